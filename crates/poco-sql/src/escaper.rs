use poco_core::{
    schema::{Path, Poco},
    Cache, Dialect, Error, Mapper, Result, TypeMetadata,
};

use std::{
    fmt,
    marker::PhantomData,
    sync::{Arc, PoisonError, RwLock},
};

/// Table, key and column names of `T`, escaped for one dialect.
///
/// Escaped names are cached per logical name until [`invalidate`] is called.
///
/// [`invalidate`]: Escaper::invalidate
pub struct Escaper<T> {
    dialect: Arc<dyn Dialect>,

    mapper: Arc<dyn Mapper>,

    /// Applies when a call does not say whether to escape
    escape_identifiers: bool,

    metadata: RwLock<Option<Arc<TypeMetadata>>>,

    /// Logical name to escaped name
    escaped: Cache<(NameKind, String), String>,

    /// Property name to column name
    columns: Cache<String, String>,

    _p: PhantomData<fn() -> T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NameKind {
    Table,
    Column,
}

/// Names a property of `T`: either its declared name or a typed field path.
pub trait PropertyRef<T> {
    fn property_name(&self) -> &str;
}

impl<T> PropertyRef<T> for &str {
    fn property_name(&self) -> &str {
        self
    }
}

impl<T> PropertyRef<T> for String {
    fn property_name(&self) -> &str {
        self
    }
}

impl<T> PropertyRef<T> for Path<T> {
    fn property_name(&self) -> &str {
        self.name()
    }
}

impl<T: Poco> Escaper<T> {
    pub fn new(dialect: Arc<dyn Dialect>, mapper: Arc<dyn Mapper>, escape_identifiers: bool) -> Self {
        Escaper {
            dialect,
            mapper,
            escape_identifiers,
            metadata: RwLock::new(None),
            escaped: Cache::new(),
            columns: Cache::new(),
            _p: PhantomData,
        }
    }

    /// The table `T` maps to.
    pub fn table_name(&self, escape: Option<bool>) -> String {
        let metadata = self.metadata();
        self.escape(NameKind::Table, metadata.table_name(), escape)
    }

    /// The primary key column of `T`.
    pub fn key_name(&self, escape: Option<bool>) -> String {
        let metadata = self.metadata();
        self.escape(NameKind::Column, metadata.primary_key_name(), escape)
    }

    /// The column a property of `T` maps to.
    ///
    /// Fails with a configuration error when `T` has no mapped property of
    /// that name.
    pub fn column_name(&self, property: impl PropertyRef<T>, escape: Option<bool>) -> Result<String> {
        let property = property.property_name();

        let column = self.columns.get_or_try_insert_with(property, || {
            let metadata = self.metadata();

            match metadata.column(property) {
                Some(column) => Ok(column.column_name.clone()),
                None => Err(Error::configuration(format!(
                    "{} has no mapped property `{property}`",
                    metadata.type_name()
                ))),
            }
        })?;

        Ok(self.escape(NameKind::Column, &column, escape))
    }

    /// Drops every cached name and the resolved metadata.
    pub fn invalidate(&self) {
        self.escaped.clear();
        self.columns.clear();
        *self.metadata.write().unwrap_or_else(PoisonError::into_inner) = None;

        tracing::debug!(type_name = std::any::type_name::<T>(), "escaper invalidated");
    }

    pub fn escape_identifiers(&self) -> bool {
        self.escape_identifiers
    }

    fn metadata(&self) -> Arc<TypeMetadata> {
        if let Some(metadata) = &*self.metadata.read().unwrap_or_else(PoisonError::into_inner) {
            return metadata.clone();
        }

        let metadata = TypeMetadata::of::<T>(&self.mapper);
        self.metadata
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(metadata)
            .clone()
    }

    fn escape(&self, kind: NameKind, name: &str, escape: Option<bool>) -> String {
        if !escape.unwrap_or(self.escape_identifiers) {
            return name.to_string();
        }

        self.escaped
            .get_or_insert_with(&(kind, name.to_string()), || match kind {
                NameKind::Table => self.dialect.escape_table_name(name),
                NameKind::Column => self.dialect.escape_identifier(name),
            })
    }
}

impl<T> fmt::Debug for Escaper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Escaper")
            .field("type", &std::any::type_name::<T>())
            .field("dialect", &self.dialect)
            .field("escape_identifiers", &self.escape_identifiers)
            .finish()
    }
}
