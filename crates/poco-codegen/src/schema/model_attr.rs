use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Explicit primary key column: `#[key = "column"]`
    pub(crate) key: Option<syn::LitStr>,

    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("key") {
                if self.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                    continue;
                }

                match name_value(attr, "expected `key = \"column_name\"`") {
                    Ok(lit) => self.key = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                match name_value(attr, "expected `table = \"table_name\"`") {
                    Ok(lit) => self.table = Some(lit),
                    Err(err) => errs.push(err),
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn name_value(attr: &syn::Attribute, msg: &str) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(attr, msg));
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(syn::Error::new_spanned(attr, msg));
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(syn::Error::new_spanned(attr, msg));
    };

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, "name must not be empty"));
    }

    Ok(lit.clone())
}
