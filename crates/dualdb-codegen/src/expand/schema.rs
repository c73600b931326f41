use super::Expand;
use crate::schema::Affinity;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    /// The body of `Model::schema()`: a static descriptor table.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let dualdb = &self.dualdb;
        let model_name = self.model.ident.unraw().to_string();
        let num_fields = self.model.fields.len();
        let legacy_names = self.model.attrs.legacy_names;

        let table = optional_str(self.model.attrs.table.as_ref());
        let collection = optional_str(self.model.attrs.collection.as_ref());

        let descriptors = self.model.fields.iter().map(|field| {
            let name = field.ident.unraw().to_string();
            let mut descriptor = quote!(#dualdb::FieldDescriptor::new(#name));

            if let Some(column) = &field.attrs.column {
                descriptor = quote!(#descriptor.column(#column));
            }

            match field.attrs.affinity {
                Affinity::Both => {}
                Affinity::RelationalOnly => {
                    descriptor =
                        quote!(#descriptor.affinity(#dualdb::Affinity::RelationalOnly));
                }
                Affinity::DocumentOnly => {
                    descriptor = quote!(#descriptor.affinity(#dualdb::Affinity::DocumentOnly));
                }
            }

            if field.attrs.auto {
                descriptor = quote!(#descriptor.auto());
            }

            if field.attrs.key.is_some() {
                descriptor = quote!(#descriptor.primary_key());
            }

            if field.attrs.not_null {
                descriptor = quote!(#descriptor.not_null());
            }

            if let Some(max) = field.attrs.max_length {
                descriptor = quote!(#descriptor.max_length(#max));
            }

            descriptor
        });

        quote! {
            static FIELDS: [#dualdb::FieldDescriptor; #num_fields] = [
                #( #descriptors, )*
            ];

            static SCHEMA: #dualdb::ModelSchema = #dualdb::ModelSchema {
                name: #model_name,
                table: #table,
                collection: #collection,
                legacy_names: #legacy_names,
                fields: &FIELDS,
            };

            &SCHEMA
        }
    }
}

fn optional_str(lit: Option<&syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(Some(#lit)),
        None => quote!(None),
    }
}
