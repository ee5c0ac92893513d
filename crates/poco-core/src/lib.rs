#[macro_use]
mod macros;

pub mod cache;
pub use cache::Cache;

pub mod driver;
pub use driver::{Cursor, Dialect, Driver, Row};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{ColumnInfo, Mapper, Poco, TypeMetadata};

pub mod value;
pub use value::{Primitive, Type, Value};

/// A Result type alias that uses poco's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
