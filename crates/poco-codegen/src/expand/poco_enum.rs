use crate::schema::PocoEnum;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

pub(super) fn expand(poco_enum: &PocoEnum, poco: &TokenStream) -> TokenStream {
    let ident = &poco_enum.ident;
    let type_name = ident.unraw().to_string();
    let variant_idents: Vec<_> = poco_enum.variants.iter().map(|v| &v.ident).collect();
    let variant_names: Vec<_> = poco_enum.variants.iter().map(|v| &v.name).collect();

    quote! {
        impl #poco::Primitive for #ident {
            const TYPE: #poco::Type = #poco::Type::Enum(#type_name);

            fn load(value: #poco::Value) -> #poco::Result<Self> {
                if let Some(name) = value.as_str() {
                    let name = name.trim();
                    #(
                        if name.eq_ignore_ascii_case(#variant_names) {
                            return Ok(Self::#variant_idents);
                        }
                    )*
                }

                // Integers, and text holding an integer, match discriminants
                if let Ok(discriminant) = i64::try_from(value.clone()) {
                    #(
                        if discriminant == Self::#variant_idents as i64 {
                            return Ok(Self::#variant_idents);
                        }
                    )*
                }

                Err(#poco::Error::type_conversion(value, #type_name))
            }

            fn to_value(&self) -> #poco::Value {
                match self {
                    #( Self::#variant_idents => #poco::Value::from(#variant_names), )*
                }
            }
        }
    }
}
