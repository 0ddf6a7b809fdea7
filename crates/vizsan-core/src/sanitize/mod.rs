//! Sanitizer pipeline.
//!
//! document → scene → {shape ×N, then animation ×M bounded by the surviving
//! shape count} → identifier deduplication. Every stage is total over its
//! input: malformed data is dropped or omitted, never reported as an error.

pub mod animation;
pub mod coerce;
pub mod document;
pub(crate) mod fields;
pub mod scene;
pub mod shape;
pub mod stats;
