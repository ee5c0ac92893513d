mod cursor;
pub use cursor::{Cursor, Row};

mod dialect;
pub use dialect::Dialect;

mod memory;
pub use memory::{MemoryCursor, ResultSet};

use crate::{async_trait, Value};

use std::{fmt::Debug, sync::Arc};

/// Executes SQL on behalf of the mapper.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Identifier quoting rules of the database behind this driver.
    fn dialect(&self) -> Arc<dyn Dialect>;

    /// Execute one or more statements, returning a cursor positioned at the
    /// first result set.
    async fn execute(&self, sql: &str, params: &[Value]) -> crate::Result<Box<dyn Cursor>>;
}
