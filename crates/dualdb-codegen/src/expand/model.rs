use super::{load::Source, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let dualdb = &self.dualdb;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let field_arms = self.expand_field_arms();
        let row_fields = self.expand_load_fields(Source::Row);
        let document_fields = self.expand_load_fields(Source::Document);

        let instantiate = if self.model.attrs.default_constructor {
            quote! {
                fn instantiate() -> #dualdb::Option<Self> {
                    #dualdb::Option::Some(<Self as #dualdb::Default>::default())
                }
            }
        } else {
            quote!()
        };

        let legacy_names = if self.model.attrs.legacy_names {
            quote! {
                fn legacy_names(&self) -> #dualdb::Option<&dyn #dualdb::LegacyNames> {
                    #dualdb::Option::Some(self)
                }
            }
        } else {
            quote!()
        };

        quote! {
            impl #dualdb::Model for #model_ident {
                fn schema() -> &'static #dualdb::ModelSchema {
                    #model_schema
                }

                #instantiate

                #legacy_names

                fn field(&self, index: usize) -> #dualdb::Value {
                    match index {
                        #field_arms
                        _ => #dualdb::Value::Null,
                    }
                }

                #[allow(unused_mut)]
                fn load_row(mut record: #dualdb::Record) -> #dualdb::Result<Self> {
                    Ok(Self {
                        #row_fields
                    })
                }

                #[allow(unused_mut)]
                fn load_document(mut record: #dualdb::Record) -> #dualdb::Result<Self> {
                    Ok(Self {
                        #document_fields
                    })
                }
            }
        }
    }

    fn expand_field_arms(&self) -> TokenStream {
        let dualdb = &self.dualdb;

        self.model
            .fields
            .iter()
            .map(|field| {
                let index = field.id;
                let ident = &field.ident;
                quote!(#index => #dualdb::Primitive::to_value(&self.#ident),)
            })
            .collect()
    }
}
