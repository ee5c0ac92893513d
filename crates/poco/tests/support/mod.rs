#![allow(dead_code)]

use poco::{async_trait, Cursor, Dialect, Driver, Flavor, MemoryCursor, Poco, PocoEnum, ResultSet, Row, Value};
use rust_decimal::Decimal;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, PocoEnum)]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Deleted,
}

#[derive(Debug, Default, Clone, PartialEq, Poco)]
#[table = "Orders"]
pub struct Order {
    #[key]
    #[column("Id")]
    pub id: i64,

    #[column("PersonId")]
    pub person_id: i64,

    #[column("PoNumber")]
    pub po_number: String,

    #[column("Status")]
    pub status: OrderStatus,

    #[column("CreatedBy")]
    pub created_by: String,

    #[column("Total")]
    pub total: Decimal,
}

#[derive(Debug, Default, Clone, PartialEq, Poco)]
#[table = "People"]
pub struct Person {
    #[column("Id")]
    pub id: i64,

    #[column("Name")]
    pub name: String,

    #[column("Age")]
    pub age: i32,

    #[column("Email")]
    pub email: Option<String>,

    #[skip]
    pub orders: Vec<Order>,
}

#[derive(Debug, Default, PartialEq, Poco)]
pub struct Invoice {
    pub id: i64,

    #[read_only]
    pub total: i64,
}

pub fn order_columns() -> [&'static str; 6] {
    ["Id", "PersonId", "PoNumber", "Status", "CreatedBy", "Total"]
}

pub fn person_columns() -> [&'static str; 4] {
    ["Id", "Name", "Age", "Email"]
}

pub fn order_row(id: i64, person_id: i64) -> Vec<Value> {
    vec![
        Value::I64(id),
        Value::I64(person_id),
        Value::from(format!("PO-{id}")),
        Value::from("Accepted"),
        Value::from("Harry"),
        Value::from("19.99"),
    ]
}

pub fn person_row(id: i64, name: &str) -> Vec<Value> {
    vec![
        Value::I64(id),
        Value::from(name),
        Value::I64(30 + id),
        Value::Null,
    ]
}

pub fn orders(ids: &[i64]) -> ResultSet {
    let mut set = ResultSet::new(order_columns());
    for id in ids {
        set.push_row(order_row(*id, 1));
    }
    set
}

pub fn people(ids: &[i64]) -> ResultSet {
    let mut set = ResultSet::new(person_columns());
    for id in ids {
        set.push_row(person_row(*id, &format!("Person {id}")));
    }
    set
}

/// Wraps a [`MemoryCursor`], counting row advances and disposals.
#[derive(Debug)]
pub struct CountingCursor {
    inner: MemoryCursor,
    counters: Counters,
}

#[derive(Debug, Clone, Default)]
pub struct Counters {
    pub advanced_rows: Arc<AtomicUsize>,
    pub disposed: Arc<AtomicUsize>,
}

impl Counters {
    pub fn advanced_rows(&self) -> usize {
        self.advanced_rows.load(Ordering::SeqCst)
    }
}

impl CountingCursor {
    pub fn new(result_sets: impl IntoIterator<Item = ResultSet>) -> (Box<dyn Cursor>, Arc<AtomicUsize>) {
        let (cursor, counters) = CountingCursor::with_counters(result_sets);
        (cursor, counters.disposed)
    }

    pub fn with_counters(result_sets: impl IntoIterator<Item = ResultSet>) -> (Box<dyn Cursor>, Counters) {
        let counters = Counters::default();
        let cursor = CountingCursor {
            inner: MemoryCursor::new(result_sets),
            counters: counters.clone(),
        };
        (Box::new(cursor), counters)
    }
}

impl Cursor for CountingCursor {
    fn columns(&self) -> &[String] {
        self.inner.columns()
    }

    fn current_row(&self) -> Option<&Row> {
        self.inner.current_row()
    }

    fn advance_row(&mut self) -> poco::Result<bool> {
        self.counters.advanced_rows.fetch_add(1, Ordering::SeqCst);
        self.inner.advance_row()
    }

    fn advance_result_set(&mut self) -> poco::Result<bool> {
        self.inner.advance_result_set()
    }

    fn dispose(&mut self) {
        self.counters.disposed.fetch_add(1, Ordering::SeqCst);
        self.inner.dispose();
    }
}

/// Serves canned result sets and records the SQL it was asked to run.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    result_sets: Mutex<Vec<ResultSet>>,
    pub log: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MemoryDriver {
    pub fn new(result_sets: impl IntoIterator<Item = ResultSet>) -> MemoryDriver {
        MemoryDriver {
            result_sets: Mutex::new(result_sets.into_iter().collect()),
            log: Mutex::default(),
        }
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    fn dialect(&self) -> Arc<dyn Dialect> {
        Arc::new(Flavor::SqlServer)
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> poco::Result<Box<dyn Cursor>> {
        self.log
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));

        let result_sets = std::mem::take(&mut *self.result_sets.lock().unwrap());
        Ok(Box::new(MemoryCursor::new(result_sets)))
    }
}
