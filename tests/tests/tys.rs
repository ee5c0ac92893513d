use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use poco::{Poco, Value};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use tests::*;
use uuid::Uuid;

#[derive(Debug, Default, PartialEq, Poco)]
#[table = "Samples"]
struct Sample {
    id: i64,
    flag: bool,
    ratio: f64,
    amount: Decimal,
    token: Uuid,
    born_on: NaiveDate,
    wakes_at: NaiveTime,
    seen_at: DateTime<Utc>,
    note: Option<String>,
    payload: Vec<u8>,
}

#[tokio::test]
async fn round_trip_through_sqlite() {
    let fixture = setup().await;

    assert_ok!(
        fixture
            .db
            .execute(
                "CREATE TABLE Samples (
                    id INTEGER PRIMARY KEY, flag INTEGER, ratio REAL, amount TEXT,
                    token TEXT, born_on TEXT, wakes_at TEXT, seen_at TEXT,
                    note TEXT, payload BLOB
                )",
                &[],
            )
            .await
    );

    let expected = Sample {
        id: 1,
        flag: true,
        ratio: 0.25,
        amount: Decimal::new(12345, 3),
        token: Uuid::new_v4(),
        born_on: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        wakes_at: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
        seen_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        note: None,
        payload: vec![0, 1, 2, 255],
    };

    let record = poco::Record::from_poco(&expected, fixture.db.mapper());
    let params: Vec<Value> = record.values().cloned().collect();

    assert_ok!(
        fixture
            .db
            .execute(
                "INSERT INTO Samples VALUES (@0, @1, @2, @3, @4, @5, @6, @7, @8, @9)",
                &params,
            )
            .await
    );

    let samples: Vec<Sample> = assert_ok!(fixture.db.query("SELECT * FROM Samples", &[]).await);
    assert_eq!(samples, [expected]);
}

#[tokio::test]
async fn metadata_of_inferred_names() {
    let fixture = setup().await;
    let metadata = fixture.db.metadata::<Sample>();

    assert_eq!(metadata.table_name(), "Samples");
    assert_eq!(metadata.primary_key_name(), "id");
    assert!(metadata.auto_increment());
    assert_eq!(metadata.column_count(), 10);
}
