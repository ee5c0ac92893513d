mod builder;
pub use builder::Builder;

use crate::{GridReader, Join};

use poco_core::{schema::Poco, Driver, Mapper, Result, TypeMetadata, Value};
use poco_sql::Escaper;

use std::sync::Arc;

/// A database handle: a driver plus the mapping configuration applied to
/// everything read through it.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
    mapper: Arc<dyn Mapper>,
    escape_identifiers: bool,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    pub fn mapper(&self) -> &Arc<dyn Mapper> {
        &self.mapper
    }

    /// Runs `sql`, returning a reader over every result set it produces.
    pub async fn query_multiple(&self, sql: &str, params: &[Value]) -> Result<GridReader> {
        let cursor = self.driver.execute(sql, params).await?;
        Ok(GridReader::new(cursor, self.mapper.clone()))
    }

    /// Runs `sql` and materializes its first result set.
    pub async fn query<T: Poco>(&self, sql: &str, params: &[Value]) -> Result<Vec<T>> {
        let mut reader = self.query_multiple(sql, params).await?;
        let rows = reader.read::<T>()?.collect_all();
        rows
    }

    /// Runs `sql` and materializes its first result set, splitting each row
    /// over the types of `J`.
    pub async fn query_multi<J, R, F>(&self, sql: &str, params: &[Value], combine: F) -> Result<Vec<R>>
    where
        J: Join,
        F: FnMut(J) -> R,
    {
        let mut reader = self.query_multiple(sql, params).await?;
        let rows = reader.read_multi::<J, R, F>(combine)?.collect_all();
        rows
    }

    /// Runs `sql`, discarding any rows it returns.
    pub async fn execute(&self, sql: &str, params: &[Value]) -> Result<()> {
        let mut cursor = self.driver.execute(sql, params).await?;
        cursor.dispose();
        Ok(())
    }

    /// Metadata for `T` under this handle's mapper.
    pub fn metadata<T: Poco>(&self) -> Arc<TypeMetadata> {
        TypeMetadata::of::<T>(&self.mapper)
    }

    /// Names of `T`, escaped for this handle's dialect.
    pub fn escaper<T: Poco>(&self) -> Escaper<T> {
        Escaper::new(
            self.driver.dialect(),
            self.mapper.clone(),
            self.escape_identifiers,
        )
    }
}
