//! Decoded responses that re-encode to the JSON they were decoded from
//!
//! The typed resource shapes fill defaults for fields a response left out
//! (a search asks for a handful of card fields) and normalise numbers
//! (`16384` becomes `16384.0` through an `f64`). Structured output must show
//! what the API sent, so typed operations return a [`Payload`]: the typed
//! value for display and the received JSON for serialization.

use std::ops::Deref;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A typed value together with the JSON it was decoded from
///
/// Dereferences to the typed value and serializes as the received JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T> {
    value: T,
    raw: Value,
}

impl<T> Payload<T> {
    /// The JSON as the API sent it
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// The typed value
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: DeserializeOwned> Payload<T> {
    /// Decode `raw` into the typed shape, keeping `raw` for serialization
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        let value = T::deserialize(&raw)?;
        Ok(Self { value, raw })
    }
}

impl<T> Deref for Payload<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Payload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(de::Error::custom)
    }
}

impl<T> Serialize for Payload<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
