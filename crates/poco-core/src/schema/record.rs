use super::{Mapper, Poco, TypeMetadata};
use crate::Value;

use indexmap::IndexMap;
use std::sync::Arc;

/// An untyped object: ordered column names with their values.
///
/// Metadata for a record is read from its own columns. See
/// [`TypeMetadata::for_instance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    table: Option<String>,
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    pub fn with_table(table: impl Into<String>) -> Record {
        Record {
            table: Some(table.into()),
            fields: IndexMap::new(),
        }
    }

    /// Reads every mapped field of `instance`, keyed by column name.
    pub fn from_poco<T: Poco>(instance: &T, mapper: &Arc<dyn Mapper>) -> Record {
        let model = T::model();
        let metadata = TypeMetadata::of::<T>(mapper);

        let mut record = Record::with_table(metadata.table_name());

        for column in metadata.columns() {
            if let Some(field) = column.field {
                record.insert(column.column_name.clone(), model.get(instance, field));
            }
        }

        record
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Sets a column, returning its previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.fields.shift_remove(column)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.fields.values()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
