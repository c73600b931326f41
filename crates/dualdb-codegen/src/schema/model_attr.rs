use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// Optional document collection name to map the model to
    pub(crate) collection: Option<syn::LitStr>,

    /// Undeclared names come from the model's `LegacyNames` impl.
    pub(crate) legacy_names: bool,

    /// The model can be built with `Default::default()`.
    pub(crate) default_constructor: bool,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                match name_value(attr, "table", self.table.is_some()) {
                    Ok(lit) => self.table = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("collection") {
                match name_value(attr, "collection", self.collection.is_some()) {
                    Ok(lit) => self.collection = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("legacy_names") {
                match attr.meta.require_path_only() {
                    Ok(_) => self.legacy_names = true,
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("default_constructor") {
                match attr.meta.require_path_only() {
                    Ok(_) => self.default_constructor = true,
                    Err(err) => errs.push(err),
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Parses `#[<name> = "value"]`.
fn name_value(attr: &syn::Attribute, name: &str, duplicate: bool) -> syn::Result<syn::LitStr> {
    if duplicate {
        return Err(syn::Error::new_spanned(
            attr,
            format!("duplicate `{name}` attribute"),
        ));
    }

    let expected = || syn::Error::new_spanned(attr, format!("expected `{name} = \"{name}_name\"`"));

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(expected());
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(expected());
    };

    Ok(lit.clone())
}
