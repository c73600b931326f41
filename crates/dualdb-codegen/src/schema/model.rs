use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Model-level attributes
    pub(crate) attrs: ModelAttr,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut attrs = ModelAttr::default();
        let mut fields: Vec<Field> = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attrs.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => {
                    if let Some(key) = &field.attrs.key {
                        if fields.iter().any(|f| f.attrs.key.is_some()) {
                            errs.push(syn::Error::new_spanned(
                                key,
                                "model cannot have more than one #[key] field",
                            ));
                        }
                    }

                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            attrs,
        })
    }
}
