use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let poco = &self.poco;
        let vis = &self.model.vis;
        let field_struct_ident = &self.model.field_struct_ident;
        let model_ident = &self.model.ident;

        // One method per mapped field, returning the path to that field
        let methods = self.model.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let field_offset = util::int(field.id);
            let name = &field.name;

            quote! {
                #vis const fn #field_ident(&self) -> #poco::Path<#model_ident> {
                    #poco::Path::from_field_index(#field_offset, #name)
                }
            }
        });

        quote!(
            #vis struct #field_struct_ident {
                _p: (),
            }

            #[allow(dead_code)]
            impl #field_struct_ident {
                #( #methods )*
            }
        )
    }
}
