use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// `Some("lit")` or `None`.
pub(crate) fn opt_str(v: Option<&syn::LitStr>) -> TokenStream {
    match v {
        Some(lit) => quote::quote!(Some(#lit)),
        None => quote::quote!(None),
    }
}
