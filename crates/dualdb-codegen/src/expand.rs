mod load;
mod model;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for dualdb types
    dualdb: TokenStream,
}

pub(super) fn model(model: &Model) -> TokenStream {
    let dualdb = quote!(_dualdb::codegen_support);

    let expand = Expand { model, dualdb };
    wrap_in_const(expand.expand_model_impl())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use dualdb as _dualdb;
            #code
        };
    }
}
