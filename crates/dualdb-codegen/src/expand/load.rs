use super::Expand;
use crate::schema::Affinity;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

#[derive(Clone, Copy)]
pub(super) enum Source {
    Row,
    Document,
}

impl Expand<'_> {
    /// Struct initializer fields for loading from a row or a document. Fields
    /// the source does not store are set to their default.
    pub(super) fn expand_load_fields(&self, source: Source) -> TokenStream {
        let dualdb = &self.dualdb;
        let model_name = self.model.ident.unraw().to_string();

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let column = field.storage_name();

                let stored = match (field.attrs.affinity, source) {
                    (Affinity::Both, _) => true,
                    (Affinity::RelationalOnly, Source::Row) => true,
                    (Affinity::DocumentOnly, Source::Document) => true,
                    _ => false,
                };

                if stored {
                    quote!(#ident: #dualdb::load_field::<#ty>(&mut record, #model_name, #column)?,)
                } else {
                    quote!(#ident: #dualdb::Default::default(),)
                }
            })
            .collect()
    }
}
