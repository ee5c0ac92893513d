use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field among the model's mapped fields
    pub(crate) id: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Declared name, without any raw identifier prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,

    /// True if the field is annotated with `#[read_only]`
    pub(crate) read_only: bool,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,
}

impl Field {
    /// Parses a struct field. Returns `Ok(None)` for fields annotated with
    /// `#[skip]`.
    pub(super) fn from_ast(
        field: &syn::Field,
        model_ident: &syn::Ident,
        id: usize,
    ) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "poco fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field-level #[key] takes no arguments; use #[column(\"name\")] to rename the column",
                    ));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("read_only") {
                if attrs.read_only {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[read_only] attribute",
                    ));
                } else {
                    attrs.read_only = true;
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    attrs.skip = true;
                }
            }
        }

        if attrs.skip && (attrs.key.is_some() || attrs.column.is_some() || attrs.read_only) {
            errs.push(syn::Error::new_spanned(
                field,
                "#[skip] fields are not mapped and take no other attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if attrs.skip {
            return Ok(None);
        }

        let mut ty = field.ty.clone();
        rewrite_self(&mut ty, model_ident);

        Ok(Some(Self {
            id,
            attrs,
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty,
        }))
    }

    /// Explicit column name, if any
    pub(crate) fn column_name(&self) -> Option<&syn::LitStr> {
        self.attrs.column.as_ref().map(|column| &column.name)
    }
}

fn rewrite_self(ty: &mut syn::Type, model: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(model).visit_type_mut(ty);
}
