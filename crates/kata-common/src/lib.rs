//! Common utilities for the kata crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated stderr output for suspicious but accepted input

pub mod warning;
