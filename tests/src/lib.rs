mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub mod models;

mod setup;
pub use setup::{epoch, setup, Fixture, ORDER_STATUSES};

pub use std_util::*;
