mod fields;
mod model;
mod poco_enum;
mod util;

use crate::schema::{Model, PocoEnum};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for poco types
    poco: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #model_impls
            #field_struct
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        poco: codegen_support(),
    }
    .expand()
}

pub(super) fn poco_enum(poco_enum: &PocoEnum) -> TokenStream {
    wrap_in_const(poco_enum::expand(poco_enum, &codegen_support()))
}

fn codegen_support() -> TokenStream {
    quote!(_poco::codegen_support)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use poco as _poco;
            #code
        };
    }
}
