//! Small data utilities.
//!
//! - **Rectangle** - a value object whose area is recomputed on every call
//! - **JSON** - compact serialization, and deserialization that attaches a
//!   caller-chosen [`Shape`] to the parsed record

/// Compact JSON encoding and shape-attaching decoding.
pub mod json;
/// The rectangle factory.
pub mod rectangle;

pub use json::{Shape, attach, deserialize, parse_record, serialize};
pub use rectangle::{Rectangle, build_rectangle};
