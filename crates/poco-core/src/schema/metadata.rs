use super::{default_mapper, FieldInfo, Mapper, ModelInfo, Poco, Record, TableInfo};
use crate::{value::Type, Cache};

use by_address::ByAddress;
use indexmap::IndexMap;
use std::{
    any::{type_name, TypeId},
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, OnceLock},
};

/// Structural mapping of a type onto a table.
#[derive(Debug)]
pub struct TypeMetadata {
    type_name: &'static str,

    table: TableInfo,

    /// Property name to column, in declaration order
    columns: IndexMap<String, ColumnInfo>,

    /// Lowercased column name to position in `columns`. When two columns
    /// differ only by case, the first declared one wins.
    by_column: HashMap<String, usize>,
}

/// How one field maps onto a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Declared field name
    pub property: String,

    pub column_name: String,

    pub is_primary_key: bool,

    /// False when the field cannot be written to
    pub settable: bool,

    /// Index into the type's accessor table. `None` for dynamic records.
    pub field: Option<usize>,

    pub ty: Type,
}

/// Holds the mapper strongly, so each distinct mapper stays alive until the
/// cache is flushed.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Key {
    ty: TypeId,
    mapper: ByAddress<Arc<dyn Mapper>>,
    primary_key: Option<String>,
}

fn cache() -> &'static Cache<Key, Arc<TypeMetadata>> {
    static CACHE: OnceLock<Cache<Key, Arc<TypeMetadata>>> = OnceLock::new();
    CACHE.get_or_init(Cache::new)
}

/// Drops every cached [`TypeMetadata`]. Later requests resolve again.
pub fn flush_cache() {
    cache().clear();
    tracing::debug!("type metadata cache flushed");
}

/// Something metadata can be resolved for at runtime.
pub trait Instance {
    fn metadata(&self, primary_key: Option<&str>, mapper: &Arc<dyn Mapper>) -> Arc<TypeMetadata>;
}

impl<T: Poco> Instance for T {
    fn metadata(&self, primary_key: Option<&str>, mapper: &Arc<dyn Mapper>) -> Arc<TypeMetadata> {
        TypeMetadata::resolve::<T>(primary_key, mapper)
    }
}

impl Instance for Record {
    fn metadata(&self, primary_key: Option<&str>, mapper: &Arc<dyn Mapper>) -> Arc<TypeMetadata> {
        Arc::new(TypeMetadata::from_record(self, primary_key, &**mapper))
    }
}

impl TypeMetadata {
    /// Metadata for `T`, resolved once per mapper and then served from the
    /// process-wide cache.
    pub fn of<T: Poco>(mapper: &Arc<dyn Mapper>) -> Arc<TypeMetadata> {
        Self::resolve::<T>(None, mapper)
    }

    /// Metadata for `T` using the default mapper.
    pub fn of_default<T: Poco>() -> Arc<TypeMetadata> {
        Self::of::<T>(&default_mapper())
    }

    /// Metadata for a runtime instance. A `primary_key` override replaces
    /// whatever key the type declares.
    ///
    /// Typed instances share the cache with [`of`](Self::of), keyed by the
    /// override. [`Record`]s resolve from their own columns every time.
    pub fn for_instance(
        instance: &impl Instance,
        primary_key: Option<&str>,
        mapper: &Arc<dyn Mapper>,
    ) -> Arc<TypeMetadata> {
        instance.metadata(primary_key, mapper)
    }

    fn resolve<T: Poco>(primary_key: Option<&str>, mapper: &Arc<dyn Mapper>) -> Arc<TypeMetadata> {
        let key = Key {
            ty: TypeId::of::<T>(),
            mapper: ByAddress(mapper.clone()),
            primary_key: primary_key.map(str::to_string),
        };

        cache().get_or_insert_with(&key, || {
            let model = T::model();
            let metadata = Arc::new(Self::build(&model.info, &model.fields, primary_key, &**mapper));

            tracing::debug!(
                type_name = type_name::<T>(),
                table = %metadata.table.table_name,
                primary_key = %metadata.table.primary_key,
                columns = metadata.columns.len(),
                "resolved type metadata"
            );

            metadata
        })
    }

    pub(crate) fn build(
        model: &ModelInfo,
        fields: &[FieldInfo],
        primary_key: Option<&str>,
        mapper: &dyn Mapper,
    ) -> TypeMetadata {
        let mut table = mapper.table_info(model, fields);

        if let Some(primary_key) = primary_key {
            table.primary_key = primary_key.to_string();
            table.auto_increment = false;
        }

        let mut columns = IndexMap::new();

        for (index, field) in fields.iter().enumerate() {
            let Some(column_name) = mapper.column_name(field) else {
                continue;
            };

            columns.insert(
                field.name.to_string(),
                ColumnInfo {
                    property: field.name.to_string(),
                    is_primary_key: column_name.eq_ignore_ascii_case(&table.primary_key),
                    column_name,
                    settable: field.settable,
                    field: Some(index),
                    ty: field.ty,
                },
            );
        }

        TypeMetadata::new(model.name, table, columns)
    }

    fn from_record(record: &Record, primary_key: Option<&str>, mapper: &dyn Mapper) -> TypeMetadata {
        let primary_key = match primary_key {
            Some(primary_key) => primary_key.to_string(),
            None => mapper
                .table_info(&ModelInfo::record(), &[])
                .primary_key,
        };

        let columns = record
            .iter()
            .map(|(name, value)| {
                let column = ColumnInfo {
                    property: name.to_string(),
                    column_name: name.to_string(),
                    is_primary_key: name.eq_ignore_ascii_case(&primary_key),
                    settable: true,
                    field: None,
                    ty: value.infer_ty(),
                };
                (name.to_string(), column)
            })
            .collect();

        let table = TableInfo {
            table_name: record.table().unwrap_or_default().to_string(),
            primary_key,
            auto_increment: false,
        };

        TypeMetadata::new("Record", table, columns)
    }

    fn new(
        type_name: &'static str,
        table: TableInfo,
        columns: IndexMap<String, ColumnInfo>,
    ) -> TypeMetadata {
        let mut by_column = HashMap::with_capacity(columns.len());

        for (index, column) in columns.values().enumerate() {
            match by_column.entry(column.column_name.to_lowercase()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        type_name,
                        column = %column.column_name,
                        "column name differs from an earlier column only by case; \
                         case-insensitive lookups resolve to the earlier one"
                    );
                }
            }
        }

        TypeMetadata {
            type_name,
            table,
            columns,
            by_column,
        }
    }

    /// Declared name of the mapped type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn table_name(&self) -> &str {
        &self.table.table_name
    }

    pub fn primary_key_name(&self) -> &str {
        &self.table.primary_key
    }

    pub fn auto_increment(&self) -> bool {
        self.table.auto_increment
    }

    /// Mapped columns in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &ColumnInfo> + '_ {
        self.columns.values()
    }

    /// Number of mapped columns. A joined read gives each type this many
    /// consecutive columns of the row.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column mapped from the property named `property`.
    pub fn column(&self, property: &str) -> Option<&ColumnInfo> {
        self.columns.get(property)
    }

    /// Column named `column_name`, compared case-insensitively. Among columns
    /// whose names differ only by case, the first declared is returned.
    pub fn find_column(&self, column_name: &str) -> Option<&ColumnInfo> {
        let index = match self.by_column.get(column_name) {
            Some(index) => *index,
            None => *self.by_column.get(&column_name.to_lowercase())?,
        };

        self.columns.get_index(index).map(|(_, column)| column)
    }
}

impl ModelInfo {
    fn record() -> ModelInfo {
        ModelInfo {
            name: "Record",
            table: None,
            primary_key: None,
        }
    }
}
