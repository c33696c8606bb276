//! JSON helpers built on `serde_json`.
//!
//! Decoding happens in two steps: [`parse_record`] turns text into a plain
//! [`Value`], and [`attach`] gives that record a [`Shape`], i.e. a concrete
//! type whose methods can then be called on the data. [`deserialize`] does both.
//! Decoder errors are returned unchanged.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A type a parsed record can be attached to.
///
/// Implemented for every [`DeserializeOwned`] type; the caller picks the shape
/// with a type parameter, e.g. `deserialize::<Rectangle>(text)`.
pub trait Shape: DeserializeOwned {
    /// Human-readable name, used in diagnostics.
    #[must_use]
    fn shape_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: DeserializeOwned> Shape for T {}

/// Encode `value` as compact JSON.
///
/// Struct fields keep declaration order and `Value` maps keep the order keys were inserted or parsed in.
///
/// # Errors
///
/// Only if `value`'s `Serialize` impl fails, e.g. a map with non-string keys.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Parse `text` into a plain record without attaching a shape.
///
/// # Errors
///
/// Returns the `serde_json` syntax error if `text` is not valid JSON.
pub fn parse_record(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(text)
}

/// Attach shape `S` to an already parsed record.
///
/// # Errors
///
/// Returns the `serde_json` data error if the record does not fit `S`.
pub fn attach<S: Shape>(record: Value) -> serde_json::Result<S> {
    serde_json::from_value(record)
}

/// Parse `text` and attach shape `S` to the result.
///
/// # Errors
///
/// Returns the `serde_json` error from whichever step failed.
pub fn deserialize<S: Shape>(text: &str) -> serde_json::Result<S> {
    attach(parse_record(text)?)
}
