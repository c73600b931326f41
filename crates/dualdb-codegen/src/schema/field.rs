use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Rust identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Affinity {
    Both,
    RelationalOnly,
    DocumentOnly,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// True if the backend assigns the value: `#[auto]`
    pub(crate) auto: bool,

    /// `#[not_null]`
    pub(crate) not_null: bool,

    /// `#[max_length(N)]`
    pub(crate) max_length: Option<usize>,

    /// `#[sql_only]` or `#[document_only]`
    pub(crate) affinity: Affinity,

    /// Stored column or key name: `#[column("name")]`
    pub(crate) column: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            key: None,
            auto: false,
            not_null: false,
            max_length: None,
            affinity: Affinity::Both,
            column: None,
        };

        let mut affinity_attr: Option<&syn::Attribute> = None;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                flag(attr, &mut attrs.auto, &mut errs);
            } else if attr.path().is_ident("not_null") {
                flag(attr, &mut attrs.not_null, &mut errs);
            } else if attr.path().is_ident("max_length") {
                if attrs.max_length.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[max_length] attribute",
                    ));
                    continue;
                }

                match attr
                    .parse_args::<syn::LitInt>()
                    .and_then(|lit| lit.base10_parse::<usize>())
                {
                    Ok(max) => attrs.max_length = Some(max),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("sql_only") || attr.path().is_ident("document_only") {
                if let Some(prev) = affinity_attr {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        format!(
                            "field already restricted to one backend by `{}`",
                            path_name(prev)
                        ),
                    ));
                    continue;
                }

                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                    continue;
                }

                affinity_attr = Some(attr);
                attrs.affinity = if attr.path().is_ident("sql_only") {
                    Affinity::RelationalOnly
                } else {
                    Affinity::DocumentOnly
                };
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                    continue;
                }

                match attr.parse_args::<syn::LitStr>() {
                    Ok(lit) if lit.value().is_empty() => errs.push(syn::Error::new_spanned(
                        lit,
                        "column name cannot be empty",
                    )),
                    Ok(lit) => attrs.column = Some(lit),
                    Err(err) => errs.push(err),
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// The column or document key this field is stored under.
    pub(crate) fn storage_name(&self) -> String {
        match &self.attrs.column {
            Some(lit) => lit.value(),
            None => self.ident.unraw().to_string(),
        }
    }
}

fn flag(attr: &syn::Attribute, dst: &mut bool, errs: &mut ErrorSet) {
    if *dst {
        errs.push(syn::Error::new_spanned(
            attr,
            format!("duplicate #[{}] attribute", path_name(attr)),
        ));
    } else if let Err(err) = attr.meta.require_path_only() {
        errs.push(err);
    } else {
        *dst = true;
    }
}

fn path_name(attr: &syn::Attribute) -> String {
    attr.path()
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default()
}
