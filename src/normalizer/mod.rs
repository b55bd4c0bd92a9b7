use serde_json::Value;

use crate::app::{NebulaError, Result};
use crate::domain::Entry;

/// Name of the array field accepted when the feed is wrapped in an object.
pub const WRAPPED_FIELD: &str = "results";

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse a feed body into entries.
    ///
    /// Accepts a bare JSON array or an object holding the array under
    /// [`WRAPPED_FIELD`]. Records that cannot be read as an entry are
    /// skipped with a warning rather than failing the feed.
    pub fn normalize(&self, body: &[u8]) -> Result<Vec<Entry>> {
        let document: Value = serde_json::from_slice(body)?;

        let records = match document {
            Value::Array(records) => records,
            Value::Object(mut map) => match map.remove(WRAPPED_FIELD) {
                Some(Value::Array(records)) => records,
                Some(_) => {
                    return Err(NebulaError::Parse(format!(
                        "field '{}' is not an array",
                        WRAPPED_FIELD
                    )))
                }
                None => {
                    return Err(NebulaError::Parse(format!(
                        "object has no '{}' array",
                        WRAPPED_FIELD
                    )))
                }
            },
            other => {
                return Err(NebulaError::Parse(format!(
                    "expected an array of entries, found {}",
                    json_type(&other)
                )))
            }
        };

        let total = records.len();
        let entries: Vec<Entry> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Entry>(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping feed record {}: {}", index, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Parsed {} of {} feed records", entries.len(), total);
        Ok(entries)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
