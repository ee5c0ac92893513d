extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Poco, attributes(key, table, column, read_only, skip))]
pub fn derive_poco(input: TokenStream) -> TokenStream {
    match poco_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(PocoEnum)]
pub fn derive_poco_enum(input: TokenStream) -> TokenStream {
    match poco_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
