//! Domain primitives shared by the repository and HTTP layers.
//!
//! This crate has no I/O: it holds the error type, parameter bounds and
//! validation, search pattern construction and timestamp formatting.

pub mod error;
pub mod franchise;
pub mod timestamp;
pub mod types;
