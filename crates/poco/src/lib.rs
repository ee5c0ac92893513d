pub mod db;
pub use db::Db;

pub mod materialize;
pub use materialize::{materialize, Join};

pub mod reader;
pub use reader::{GridReader, Rows};

pub use poco_core::{
    async_trait,
    driver::{self, Cursor, Dialect, Driver, MemoryCursor, ResultSet, Row},
    record,
    schema::{
        self, default_mapper, flush_cache, ColumnInfo, ConventionMapper, Inflection, Mapper,
        Path, Poco, Record, TypeMetadata,
    },
    Error, Primitive, Result, Type, Value,
};
pub use poco_sql::{Escaper, Flavor};

pub use poco_macros::{Poco, PocoEnum};

#[cfg(feature = "sqlite")]
pub use poco_driver_sqlite::Sqlite;

#[doc(hidden)]
pub mod codegen_support {
    pub use poco_core::{
        schema::{Field, FieldInfo, Model, ModelInfo, Path, Poco},
        Error, Primitive, Result, Type, Value,
    };
}
