use crate::{value::Type, Result, Value};

use std::{fmt, marker::PhantomData};

/// A plain data type that rows can be materialized into.
///
/// Usually implemented with `#[derive(Poco)]`. Materialization starts from
/// `Self::default()` and assigns each received column through the field's
/// setter.
pub trait Poco: Default + Send + 'static {
    /// The accessor table describing this type.
    fn model() -> &'static Model<Self>;
}

/// Ahead-of-time description of a [`Poco`] type: its declared structure plus
/// one getter/setter pair per mapped field.
pub struct Model<T> {
    /// Type-level annotations
    pub info: ModelInfo,

    /// Field descriptions, in declaration order
    pub fields: Vec<FieldInfo>,

    /// Accessors, parallel to `fields`
    accessors: Vec<Accessor<T>>,
}

/// Type-level annotations of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Declared type name
    pub name: &'static str,

    /// Explicit table name, if the type is annotated with one
    pub table: Option<&'static str>,

    /// Explicit primary key column, if the type is annotated with one
    pub primary_key: Option<&'static str>,
}

/// Declared structure of one mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Declared field name
    pub name: &'static str,

    /// Explicit column name
    pub column: Option<&'static str>,

    /// True if the field is annotated as the primary key
    pub primary_key: bool,

    /// Declared value type
    pub ty: Type,

    /// True if the field accepts `NULL`
    pub nullable: bool,

    /// True if a value can be written into the field
    pub settable: bool,
}

/// One field of a model: its description and accessors.
pub struct Field<T> {
    pub info: FieldInfo,
    pub get: fn(&T) -> Value,
    pub set: Option<fn(&mut T, Value) -> Result<()>>,
}

struct Accessor<T> {
    get: fn(&T) -> Value,
    set: Option<fn(&mut T, Value) -> Result<()>>,
}

impl<T> Model<T> {
    pub fn new(info: ModelInfo, fields: Vec<Field<T>>) -> Self {
        let mut infos = Vec::with_capacity(fields.len());
        let mut accessors = Vec::with_capacity(fields.len());

        for field in fields {
            debug_assert_eq!(field.info.settable, field.set.is_some());
            infos.push(field.info);
            accessors.push(Accessor {
                get: field.get,
                set: field.set,
            });
        }

        Self {
            info,
            fields: infos,
            accessors,
        }
    }

    /// Get a field by index
    pub fn field(&self, index: usize) -> &FieldInfo {
        &self.fields[index]
    }

    /// Find a field by its declared name
    pub fn field_by_name(&self, name: &str) -> Option<(usize, &FieldInfo)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Reads the value of field `index` from `instance`.
    pub fn get(&self, instance: &T, index: usize) -> Value {
        (self.accessors[index].get)(instance)
    }

    /// Writes `value` into field `index` of `instance`. Returns `None` when
    /// the field has no setter.
    pub fn set(&self, instance: &mut T, index: usize, value: Value) -> Option<Result<()>> {
        let set = self.accessors[index].set?;
        Some(set(instance, value))
    }
}

impl<T> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("info", &self.info)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A typed reference to one field of `T`, generated by `#[derive(Poco)]` as
/// `T::fields().<field>()`.
///
/// The path is resolved by the field it names, whatever the field's value
/// type is.
pub struct Path<T> {
    index: usize,
    name: &'static str,
    _p: PhantomData<fn() -> T>,
}

impl<T> Path<T> {
    pub const fn from_field_index(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name,
            _p: PhantomData,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared name of the field
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Path<T> {}

impl<T> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("index", &self.index)
            .field("name", &self.name)
            .finish()
    }
}
