use crate::logging_driver::DriverOp;
use std::sync::{Arc, Mutex};

/// Statements a test ran, in order.
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// The most recent statement batch
    pub fn last(&self) -> Option<DriverOp> {
        self.ops.lock().unwrap().last().cloned()
    }

    /// Forget everything logged so far, e.g. the fixture's seed statements
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
