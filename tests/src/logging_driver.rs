use poco::{async_trait, Cursor, Dialect, Driver, Result, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct DriverOp {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A driver wrapper that logs every statement batch it is asked to run.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with the [`ExecLog`] handed to tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            inner: Box::new(driver),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn dialect(&self) -> Arc<dyn Dialect> {
        self.inner.dialect()
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Box<dyn Cursor>> {
        self.ops_log.lock().unwrap().push(DriverOp {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        self.inner.execute(sql, params).await
    }
}
