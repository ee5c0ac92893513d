use super::{util, Expand};
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let poco = &self.poco;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let field_struct_ident = &self.model.field_struct_ident;
        let model_info = self.expand_model_info();
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        quote! {
            impl #poco::Poco for #model_ident {
                fn model() -> &'static #poco::Model<Self> {
                    static MODEL: std::sync::OnceLock<#poco::Model<#model_ident>> = std::sync::OnceLock::new();

                    MODEL.get_or_init(|| {
                        #poco::Model::new(
                            #model_info,
                            vec![ #( #fields ),* ],
                        )
                    })
                }
            }

            impl #model_ident {
                /// Typed paths to the mapped fields
                #vis const fn fields() -> #field_struct_ident {
                    #field_struct_ident { _p: () }
                }
            }
        }
    }

    fn expand_model_info(&self) -> TokenStream {
        let poco = &self.poco;
        let name = self.model.ident.unraw().to_string();
        let table = util::opt_str(self.model.attrs.table.as_ref());
        let primary_key = util::opt_str(self.model.attrs.key.as_ref());

        quote! {
            #poco::ModelInfo {
                name: #name,
                table: #table,
                primary_key: #primary_key,
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let poco = &self.poco;
        let model_ident = &self.model.ident;
        let field_ident = &field.ident;
        let ty = &field.ty;
        let name = &field.name;
        let column = util::opt_str(field.column_name());
        let primary_key = field.attrs.key.is_some();
        let settable = !field.attrs.read_only;

        let set = if settable {
            quote! {
                Some(|instance: &mut #model_ident, value: #poco::Value| -> #poco::Result<()> {
                    instance.#field_ident = <#ty as #poco::Primitive>::load(value)?;
                    Ok(())
                })
            }
        } else {
            quote!(None)
        };

        quote! {
            #poco::Field {
                info: #poco::FieldInfo {
                    name: #name,
                    column: #column,
                    primary_key: #primary_key,
                    ty: <#ty as #poco::Primitive>::TYPE,
                    nullable: <#ty as #poco::Primitive>::NULLABLE,
                    settable: #settable,
                },
                get: |instance: &#model_ident| #poco::Primitive::to_value(&instance.#field_ident),
                set: #set,
            }
        }
    }
}
