use super::{FieldInfo, ModelInfo};
use crate::{Result, Value};

use std::{
    fmt,
    sync::{Arc, OnceLock},
};
use std_util::str;

/// Decides how types and fields map to tables and columns.
///
/// Metadata is cached per mapper instance, so a mapper must answer the same
/// way for the same input for as long as it is in use.
///
/// The cache is keyed by the address of the `Arc` and keeps a strong
/// reference to it until [`flush_cache`](super::flush_cache) runs. Build one
/// `Arc` per configuration and share it; a fresh `Arc` per call resolves
/// every type again and is never released.
pub trait Mapper: Send + Sync + fmt::Debug {
    /// Table-level mapping for a model.
    fn table_info(&self, model: &ModelInfo, fields: &[FieldInfo]) -> TableInfo;

    /// Column name for a field. Returning `None` excludes the field.
    fn column_name(&self, field: &FieldInfo) -> Option<String>;

    /// Converts a value read from the database before it is coerced into the
    /// field's declared type.
    fn from_db(&self, field: &FieldInfo, value: Value) -> Result<Value> {
        let _ = field;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub table_name: String,
    pub primary_key: String,
    pub auto_increment: bool,
}

/// How a declared name becomes a database name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Inflection {
    /// Use the declared name as-is
    #[default]
    Preserve,

    /// `OrderLine` -> `order_line`
    SnakeCase,

    /// `order_line` -> `OrderLine`
    UpperCamelCase,

    Lowercase,

    Uppercase,
}

impl Inflection {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_string(),
            Self::SnakeCase => str::snake_case(name),
            Self::UpperCamelCase => str::upper_camel_case(name),
            Self::Lowercase => name.to_lowercase(),
            Self::Uppercase => name.to_uppercase(),
        }
    }
}

/// The default [`Mapper`]: explicit annotations first, then naming
/// conventions.
///
/// The primary key is the annotated key, else the first field named `id`,
/// `<type>id` or `<type>_id` (compared case-insensitively), else the
/// configured default key name.
#[derive(Debug, Clone)]
pub struct ConventionMapper {
    primary_key: String,
    table_inflection: Inflection,
    column_inflection: Inflection,
    table_name_prefix: Option<String>,
}

#[derive(Debug)]
pub struct Builder {
    primary_key: String,
    table_inflection: Inflection,
    column_inflection: Inflection,
    table_name_prefix: Option<String>,
}

impl ConventionMapper {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Name used for the primary key when no field qualifies.
    pub fn default_primary_key(&self) -> &str {
        &self.primary_key
    }

    fn key_field<'a>(&self, model: &ModelInfo, fields: &'a [FieldInfo]) -> Option<&'a FieldInfo> {
        if let Some(primary_key) = model.primary_key {
            return fields.iter().find(|field| {
                self.column_name(field)
                    .is_some_and(|column| column.eq_ignore_ascii_case(primary_key))
            });
        }

        if let Some(field) = fields.iter().find(|field| field.primary_key) {
            return Some(field);
        }

        let type_id = format!("{}id", normalize(model.name));

        fields.iter().find(|field| {
            let name = normalize(field.name);
            name == "id" || name == type_id
        })
    }
}

impl Default for ConventionMapper {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl Mapper for ConventionMapper {
    fn table_info(&self, model: &ModelInfo, fields: &[FieldInfo]) -> TableInfo {
        let table_name = match model.table {
            Some(table) => table.to_string(),
            None => {
                let name = self.table_inflection.apply(model.name);
                match &self.table_name_prefix {
                    Some(prefix) => format!("{prefix}{name}"),
                    None => name,
                }
            }
        };

        let key_field = self.key_field(model, fields);

        let primary_key = match (model.primary_key, key_field) {
            (Some(primary_key), _) => primary_key.to_string(),
            (None, Some(field)) => self
                .column_name(field)
                .unwrap_or_else(|| field.name.to_string()),
            (None, None) => self.primary_key.clone(),
        };

        TableInfo {
            table_name,
            primary_key,
            auto_increment: key_field.is_some_and(|field| field.ty.is_integer()),
        }
    }

    fn column_name(&self, field: &FieldInfo) -> Option<String> {
        Some(match field.column {
            Some(column) => column.to_string(),
            None => self.column_inflection.apply(field.name),
        })
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            primary_key: "Id".to_string(),
            table_inflection: Inflection::Preserve,
            column_inflection: Inflection::Preserve,
            table_name_prefix: None,
        }
    }

    pub fn primary_key(&mut self, name: &str) -> &mut Self {
        self.primary_key = name.to_string();
        self
    }

    pub fn table_inflection(&mut self, inflection: Inflection) -> &mut Self {
        self.table_inflection = inflection;
        self
    }

    pub fn column_inflection(&mut self, inflection: Inflection) -> &mut Self {
        self.column_inflection = inflection;
        self
    }

    /// If set, prefix inferred table names with this string
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&self) -> ConventionMapper {
        ConventionMapper {
            primary_key: self.primary_key.clone(),
            table_inflection: self.table_inflection,
            column_inflection: self.column_inflection,
            table_name_prefix: self.table_name_prefix.clone(),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// The mapper used when none is configured.
pub fn default_mapper() -> Arc<dyn Mapper> {
    static DEFAULT: OnceLock<Arc<dyn Mapper>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(ConventionMapper::default()))
        .clone()
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
