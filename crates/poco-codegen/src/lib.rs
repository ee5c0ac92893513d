mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Poco)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

/// Expands `#[derive(PocoEnum)]`.
pub fn generate_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemEnum = syn::parse2(input)?;
    let poco_enum = schema::PocoEnum::from_ast(&item)?;

    Ok(expand::poco_enum(&poco_enum))
}
