use serde_json::Value;

use crate::document::model::VisualizationDocument;
use crate::error::SanitizeError;

/// Structural bounds enforced before any sanitization work.
///
/// Cost of sanitizing is linear in input size, so these limits are the only
/// thing standing between an untrusted document and unbounded work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth; the root value is depth 1.
    pub max_depth: usize,

    /// Maximum number of values (scalars and containers) in the tree.
    pub max_nodes: usize,

    /// Maximum raw input size in bytes, enforced while reading.
    pub max_input_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_nodes: 200_000,
            max_input_bytes: 8 * 1024 * 1024,
        }
    }
}

/// Walk `value` and reject it if it exceeds `limits`.
///
/// The walk uses an explicit stack, so a hostile nesting depth cannot
/// overflow the call stack before the depth limit trips.
pub fn check_structure(value: &Value, limits: &Limits) -> Result<(), SanitizeError> {
    let mut stack = vec![(value, 1usize)];
    let mut nodes = 0usize;

    while let Some((value, depth)) = stack.pop() {
        nodes += 1;
        if nodes > limits.max_nodes {
            return Err(SanitizeError::TooManyNodes {
                limit: limits.max_nodes,
            });
        }
        if depth > limits.max_depth {
            return Err(SanitizeError::TooDeep {
                limit: limits.max_depth,
            });
        }

        match value {
            Value::Array(items) => stack.extend(items.iter().map(|v| (v, depth + 1))),
            Value::Object(map) => stack.extend(map.values().map(|v| (v, depth + 1))),
            _ => {}
        }
    }

    Ok(())
}

/// Check a sanitized document against the same limits as its input.
///
/// Sanitizing can grow a document: a `{}` scene comes out with an id,
/// duration and two lists. Output that would fail the guard on a second pass
/// is rejected here, so every accepted document stays accepted.
pub fn check_document(
    document: &VisualizationDocument,
    limits: &Limits,
) -> Result<(), SanitizeError> {
    let value = serde_json::to_value(document).map_err(|err| SanitizeError::Output {
        message: err.to_string(),
    })?;
    check_structure(&value, limits)
}
