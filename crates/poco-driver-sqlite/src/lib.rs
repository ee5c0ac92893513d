mod value;

use poco_core::{async_trait, Cursor, Dialect, Driver, Error, Result, Value};
use poco_core::driver::{MemoryCursor, ResultSet};
use poco_sql::Flavor;

use rusqlite::{Batch, Connection, Statement};
use std::{
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

/// SQLite driver backed by a single connection.
///
/// Statements of a batch run in order. Each statement that returns columns
/// yields one result set, fully buffered before the cursor is handed out.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    pub fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn run(&self, sql: &str, params: &[Value]) -> Result<Vec<ResultSet>> {
        let connection = self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut batch = Batch::new(&connection, sql);
        let mut result_sets = vec![];

        while let Some(mut stmt) = batch.next().map_err(Error::driver)? {
            bind(&mut stmt, params)?;

            if stmt.column_count() == 0 {
                let count = stmt.raw_execute().map_err(Error::driver)?;
                tracing::trace!(count, "statement executed");
                continue;
            }

            result_sets.push(read_result_set(&mut stmt)?);
        }

        Ok(result_sets)
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn dialect(&self) -> Arc<dyn Dialect> {
        Arc::new(Flavor::Sqlite)
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Box<dyn Cursor>> {
        tracing::debug!(sql, params = params.len(), "executing");

        let result_sets = self.run(sql, params)?;
        Ok(Box::new(MemoryCursor::new(result_sets)))
    }
}

/// Binds `params` to every placeholder of `stmt`.
///
/// `@N`, `:N` and `$N` are zero-based indexes into `params`; `?N` is
/// one-based, as in SQLite itself. A bare `?` takes the parameter at its own
/// position in the statement.
fn bind(stmt: &mut Statement<'_>, params: &[Value]) -> Result<()> {
    for position in 1..=stmt.parameter_count() {
        let index = match stmt.parameter_name(position) {
            None => position - 1,
            Some(name) => parameter_index(name)?,
        };

        let Some(param) = params.get(index) else {
            return Err(Error::configuration(format!(
                "statement references parameter {index}, but only {} were given",
                params.len()
            )));
        };

        stmt.raw_bind_parameter(position, value::to_sql(param)?)
            .map_err(Error::driver)?;
    }

    Ok(())
}

fn parameter_index(name: &str) -> Result<usize> {
    let (one_based, digits) = match name.split_at(1) {
        ("?", digits) => (true, digits),
        ("@" | ":" | "$", digits) => (false, digits),
        _ => (false, ""),
    };

    match digits.parse::<usize>() {
        Ok(0) if one_based => Err(Error::configuration("parameter `?0` is out of range")),
        Ok(n) if one_based => Ok(n - 1),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::configuration(format!(
            "parameter `{name}` is not positional"
        ))),
    }
}

fn read_result_set(stmt: &mut Statement<'_>) -> Result<ResultSet> {
    let width = stmt.column_count();
    let mut result_set = ResultSet::new(stmt.column_names());
    let mut rows = stmt.raw_query();

    while let Some(row) = rows.next().map_err(Error::driver)? {
        let mut values = Vec::with_capacity(width);

        for index in 0..width {
            values.push(value::from_sql(row.get_ref(index).map_err(Error::driver)?)?);
        }

        result_set.push_row(values);
    }

    tracing::trace!(rows = result_set.len(), "read result set");
    Ok(result_set)
}
