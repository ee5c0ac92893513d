use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Struct-level attributes
    pub(crate) attrs: ModelAttr,

    /// The field struct identifier
    pub(crate) field_struct_ident: syn::Ident,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "poco fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "poco generics are not supported",
            ));
        }

        let mut attrs = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attrs.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node, &ast.ident, fields.len()) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        let key_fields: Vec<_> = fields
            .iter()
            .filter_map(|field| field.attrs.key.as_ref())
            .collect();

        if attrs.key.is_some() {
            for attr in &key_fields {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "field cannot have #[key] attribute when the struct has a #[key] attribute",
                ));
            }
        } else if key_fields.len() > 1 {
            for attr in &key_fields[1..] {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "only one field can be annotated with #[key]",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            attrs,
            field_struct_ident: struct_ident("Fields", ast),
        })
    }
}

fn struct_ident(suffix: &str, model: &syn::ItemStruct) -> syn::Ident {
    syn::Ident::new(&format!("{}{}", model.ident, suffix), model.ident.span())
}
