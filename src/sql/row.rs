//! Row materialization: a driver cursor row becomes an ordered
//! column-name -> JSON value map.
//!
//! The raw-SQL endpoint cannot know result shapes at compile time, so each
//! cell is probed against the common PostgreSQL types in turn. SQL NULL
//! always materializes as an explicit JSON null, never an empty string.
//! Column order is preserved (`serde_json` with `preserve_order`).

use base64::Engine;
use serde_json::{Map, Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row};

/// Materialize one row. Keys appear in result-set column order.
pub fn row_to_json(row: &PgRow) -> Value {
    let mut map = Map::with_capacity(row.columns().len());
    for (idx, col) in row.columns().iter().enumerate() {
        map.insert(col.name().to_string(), cell_to_value(row, idx));
    }
    Value::Object(map)
}

fn cell_to_value(row: &PgRow, idx: usize) -> Value {
    macro_rules! probe {
        ($ty:ty, $to:expr) => {
            if let Ok(Some(v)) = row.try_get::<Option<$ty>, _>(idx) {
                #[allow(clippy::redundant_closure_call)]
                return ($to)(v);
            }
        };
    }

    probe!(i16, |n: i16| Value::Number(n.into()));
    probe!(i32, |n: i32| Value::Number(n.into()));
    probe!(i64, |n: i64| Value::Number(n.into()));
    probe!(f32, |n: f32| float_value(n as f64));
    probe!(f64, float_value);
    probe!(bool, Value::Bool);
    probe!(uuid::Uuid, |u: uuid::Uuid| Value::String(u.to_string()));
    probe!(
        chrono::DateTime<chrono::Utc>,
        |d: chrono::DateTime<chrono::Utc>| Value::String(d.to_rfc3339())
    );
    probe!(chrono::NaiveDateTime, |d: chrono::NaiveDateTime| {
        Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    });
    probe!(chrono::NaiveDate, |d: chrono::NaiveDate| Value::String(
        d.format("%Y-%m-%d").to_string()
    ));
    probe!(String, Value::String);
    probe!(serde_json::Value, |j: Value| j);
    // bytea last: base64, the encoding the original JSON layer produced.
    probe!(Vec<u8>, |b: Vec<u8>| Value::String(
        base64::engine::general_purpose::STANDARD.encode(b)
    ));

    Value::Null
}

fn float_value(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_value_rejects_non_finite() {
        assert!(float_value(1.5).is_number());
        assert!(float_value(f64::NAN).is_null());
        assert!(float_value(f64::INFINITY).is_null());
    }
}
