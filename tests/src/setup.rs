use crate::{
    models::{OrderLineStatus, OrderStatus},
    ExecLog, LoggingDriver,
};

use chrono::{Days, NaiveDate, NaiveDateTime};
use poco::{Db, Primitive, Sqlite, Value};
use rust_decimal::Decimal;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

const SCHEMA: &str = "
    CREATE TABLE People (
        Id INTEGER PRIMARY KEY,
        Name TEXT NOT NULL,
        Age INTEGER NOT NULL,
        Height INTEGER NOT NULL
    );

    CREATE TABLE Orders (
        Id INTEGER PRIMARY KEY,
        PersonId INTEGER NOT NULL REFERENCES People (Id),
        PoNumber TEXT NOT NULL,
        Status INTEGER NOT NULL,
        CreatedOn TEXT NOT NULL,
        CreatedBy TEXT NOT NULL
    );

    CREATE TABLE OrderLines (
        Id INTEGER PRIMARY KEY,
        OrderId INTEGER NOT NULL REFERENCES Orders (Id),
        Quantity INTEGER NOT NULL,
        SellPrice TEXT NOT NULL,
        Status TEXT NOT NULL
    );
";

/// A fresh in-memory database with the test schema.
pub struct Fixture {
    pub db: Db,
    pub log: ExecLog,
}

pub async fn setup() -> Fixture {
    init_tracing();

    let driver = LoggingDriver::new(Sqlite::in_memory().unwrap());
    let log = ExecLog::new(driver.ops_log_handle());
    let db = Db::builder().escape_identifiers(true).build(driver);

    db.execute(SCHEMA, &[]).await.unwrap();
    log.clear();

    Fixture { db, log }
}

/// Installs a test-friendly subscriber; filter with `RUST_LOG`.
fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Date every seeded order is created on or before
pub fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1990, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap()
}

impl Fixture {
    /// Inserts `count` people named `Peta0`, `Peta1`, ... starting at `offset`.
    pub async fn add_people(&self, count: i64, offset: i64) {
        for i in offset..offset + count {
            self.db
                .execute(
                    "INSERT INTO People (Id, Name, Age, Height) VALUES (@0, @1, @2, @3)",
                    &[
                        Value::I64(i + 1),
                        Value::from(format!("Peta{i}")),
                        Value::I64(18 + i),
                        Value::I64(160 + i),
                    ],
                )
                .await
                .unwrap();
        }
    }

    /// Inserts `count` orders, each with its own person and two order lines.
    pub async fn add_orders(&self, count: i64) {
        self.add_people(count, 0).await;

        for i in 0..count {
            let created_on = epoch().checked_sub_days(Days::new(i as u64)).unwrap();

            self.db
                .execute(
                    "INSERT INTO Orders (Id, PersonId, PoNumber, Status, CreatedOn, CreatedBy)
                     VALUES (@0, @1, @2, @3, @4, @5)",
                    &[
                        Value::I64(i + 1),
                        Value::I64(i + 1),
                        Value::from(format!("PO{i}")),
                        Value::I64(i % 4),
                        Value::from(created_on),
                        Value::from(format!("Harry{i}")),
                    ],
                )
                .await
                .unwrap();

            for (line, (quantity, status)) in [
                (1, OrderLineStatus::Pending),
                (2, OrderLineStatus::Allocated),
            ]
            .into_iter()
            .enumerate()
            {
                self.db
                    .execute(
                        "INSERT INTO OrderLines (Id, OrderId, Quantity, SellPrice, Status)
                         VALUES (@0, @1, @2, @3, @4)",
                        &[
                            Value::I64(i * 2 + line as i64 + 1),
                            Value::I64(i + 1),
                            Value::I16(quantity),
                            Value::from(Decimal::new(999, 2) * Decimal::from(quantity)),
                            status.to_value(),
                        ],
                    )
                    .await
                    .unwrap();
            }
        }

        self.log.clear();
    }
}

/// Every status an order can be seeded with
pub const ORDER_STATUSES: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Accepted,
    OrderStatus::Rejected,
    OrderStatus::Deleted,
];
