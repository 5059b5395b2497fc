//! Element-by-element decoding of list payloads.

use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// One element of a JSON array, decoded on its own.
///
/// An element that does not fit `T` is kept as raw JSON together with its
/// decode error, and the rest of the array still decodes.
#[derive(Debug)]
pub enum Record<T> {
    Decoded(T),
    Malformed {
        raw: Value,
        error: serde_json::Error,
    },
}

impl<T> Record<T> {
    /// The decoded value, if the element was well formed.
    pub fn decoded(self) -> Option<T> {
        match self {
            Record::Decoded(value) => Some(value),
            Record::Malformed { .. } => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let decoded = T::deserialize(&raw);
        Ok(match decoded {
            Ok(value) => Record::Decoded(value),
            Err(error) => Record::Malformed { raw, error },
        })
    }
}

/// Keeps the well-formed elements, in order, and logs each skipped one.
pub fn keep_decoded<T>(records: Vec<Record<T>>, what: &str) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record {
            Record::Decoded(value) => Some(value),
            Record::Malformed { error, .. } => {
                warn!("Skipping malformed {what} at index {index}: {error}");
                None
            }
        })
        .collect()
}
