//! Configuration records: a mapping from field name to scalar value.
//!
//! Records are how models are constructed from, and written back to,
//! configuration. Each model reads the keys it recognizes and leaves the
//! rest for whatever it is layered on.

use crate::error::ConfigError;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Ordered field-name → value mapping.
pub type Record = BTreeMap<String, Value>;

/// Read a required numeric field.
pub fn read_scalar(record: &Record, key: &str) -> Result<f64, ConfigError> {
    let value = record.get(key).ok_or_else(|| ConfigError::Missing {
        key: key.to_string(),
    })?;
    as_scalar(key, value)
}

/// Read an optional numeric field, falling back to `default` when absent.
pub fn read_scalar_or(record: &Record, key: &str, default: f64) -> Result<f64, ConfigError> {
    match record.get(key) {
        Some(value) => as_scalar(key, value),
        None => Ok(default),
    }
}

/// Read an optional text field, falling back to `default` when absent.
pub fn read_string_or(record: &Record, key: &str, default: &str) -> Result<String, ConfigError> {
    match record.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "must be a string",
        }),
        None => Ok(default.to_string()),
    }
}

/// Store a text field, replacing any previous value.
pub fn write_string(record: &mut Record, key: &str, value: &str) {
    record.insert(key.to_string(), Value::String(value.to_string()));
}

/// Store a numeric field, replacing any previous value.
pub fn write_scalar(record: &mut Record, key: &str, value: f64) {
    record.insert(key.to_string(), Value::Number(value.into()));
}

/// Build a record from `(key, value)` pairs.
pub fn record_from_scalars<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Record {
    let mut record = Record::new();
    for (key, value) in pairs {
        write_scalar(&mut record, key, value);
    }
    record
}

fn as_scalar(key: &str, value: &Value) -> Result<f64, ConfigError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ConfigError::NonNumeric {
            key: key.to_string(),
            found: format!("number {n}"),
        }),
        other => Err(ConfigError::NonNumeric {
            key: key.to_string(),
            found: describe(other),
        }),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(_) => "sequence".to_string(),
        Value::Mapping(_) => "mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn written_scalars_read_back_exactly(v in proptest::num::f64::NORMAL) {
            let mut record = Record::new();
            write_scalar(&mut record, "x", v);
            prop_assert_eq!(read_scalar(&record, "x").unwrap(), v);
        }

        #[test]
        fn yaml_text_round_trip_is_exact(v in -1e12_f64..1e12) {
            let record = record_from_scalars([("x", v)]);
            let text = serde_yaml::to_string(&record).unwrap();
            let back: Record = serde_yaml::from_str(&text).unwrap();
            prop_assert_eq!(read_scalar(&back, "x").unwrap(), v);
        }
    }
}
