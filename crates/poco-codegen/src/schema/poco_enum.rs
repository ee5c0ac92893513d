use super::ErrorSet;

use syn::ext::IdentExt;

/// A fieldless enum loaded from a text or integer column.
#[derive(Debug)]
pub(crate) struct PocoEnum {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    pub(crate) variants: Vec<Variant>,
}

#[derive(Debug)]
pub(crate) struct Variant {
    /// Rust identifier for this variant (e.g., `Pending`)
    pub(crate) ident: syn::Ident,

    /// Name matched against text columns
    pub(crate) name: String,
}

impl PocoEnum {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        if ast.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                ast,
                "enum must have at least one variant",
            ));
        }

        let mut variants = vec![];
        let mut errs = ErrorSet::new();

        for variant in &ast.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "PocoEnum variants cannot carry fields",
                ));
                continue;
            }

            variants.push(Variant {
                ident: variant.ident.clone(),
                name: variant.ident.unraw().to_string(),
            });
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            variants,
        })
    }
}
