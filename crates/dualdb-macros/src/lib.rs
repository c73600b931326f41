extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Model,
    attributes(
        key,
        auto,
        not_null,
        max_length,
        sql_only,
        document_only,
        column,
        table,
        collection,
        legacy_names,
        default_constructor
    )
)]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match dualdb_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
