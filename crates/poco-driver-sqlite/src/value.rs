use poco_core::{Error, Result, Value};

use rusqlite::types::{Value as SqlValue, ValueRef};

/// Converts a column value read by SQLite.
pub(crate) fn from_sql(value: ValueRef<'_>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::I64(v),
        ValueRef::Real(v) => Value::F64(v),
        ValueRef::Text(v) => Value::String(std::str::from_utf8(v).map_err(Error::driver)?.to_string()),
        ValueRef::Blob(v) => Value::Bytes(v.to_vec()),
    })
}

/// Converts a parameter into the closest SQLite storage class.
///
/// Decimals, UUIDs and temporal values are stored as text.
pub(crate) fn to_sql(value: &Value) -> Result<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(v) => SqlValue::Integer(*v as i64),
        Value::I8(v) => SqlValue::Integer(*v as i64),
        Value::I16(v) => SqlValue::Integer(*v as i64),
        Value::I32(v) => SqlValue::Integer(*v as i64),
        Value::I64(v) => SqlValue::Integer(*v),
        Value::U8(v) => SqlValue::Integer(*v as i64),
        Value::U16(v) => SqlValue::Integer(*v as i64),
        Value::U32(v) => SqlValue::Integer(*v as i64),
        Value::U64(v) => match i64::try_from(*v) {
            Ok(v) => SqlValue::Integer(v),
            Err(_) => return Err(Error::type_conversion(value.clone(), "INTEGER")),
        },
        Value::F32(v) => SqlValue::Real(*v as f64),
        Value::F64(v) => SqlValue::Real(*v),
        Value::Decimal(v) => SqlValue::Text(v.to_string()),
        Value::String(v) => SqlValue::Text(v.clone()),
        Value::Bytes(v) => SqlValue::Blob(v.clone()),
        Value::Uuid(v) => SqlValue::Text(v.to_string()),
        Value::Date(v) => SqlValue::Text(v.format("%Y-%m-%d").to_string()),
        Value::Time(v) => SqlValue::Text(v.format("%H:%M:%S%.f").to_string()),
        Value::DateTime(v) => SqlValue::Text(v.format("%Y-%m-%d %H:%M:%S%.f").to_string()),
        Value::Timestamp(v) => SqlValue::Text(v.to_rfc3339()),
    })
}
