use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SanitizeError;
use crate::report::model::{ContentHash, InputInfo};

/// Raw input document as read, before parsing.
///
/// Holds the exact bytes and a fingerprint identifying them, so a stored
/// sanitized result can be traced back to the payload it came from.
#[derive(Debug, Clone)]
pub struct InputContext {
    /// Source path, or `None` for stdin.
    pub path: Option<String>,

    /// Exact bytes read.
    pub bytes: Vec<u8>,

    pub size_bytes: u64,

    /// Hash algorithm used for fingerprinting.
    pub hash_alg: String,

    /// Hex-encoded digest of `bytes` under `hash_alg`.
    pub hash_hex: String,
}

impl InputContext {
    /// Report-facing metadata; drops the raw bytes.
    pub fn into_info(self) -> InputInfo {
        InputInfo {
            path: self.path,
            size_bytes: self.size_bytes,
            hash: ContentHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        }
    }
}

/// Read an input document from a file.
pub fn read_input(path: &Path, max_bytes: u64) -> Result<InputContext> {
    let file =
        File::open(path).with_context(|| format!("failed to open input: {}", path.display()))?;

    read_from(file, Some(path.display().to_string()), max_bytes)
        .with_context(|| format!("failed to read input: {}", path.display()))
}

/// Read an input document from stdin.
pub fn read_stdin(max_bytes: u64) -> Result<InputContext> {
    read_from(std::io::stdin().lock(), None, max_bytes).context("failed to read stdin")
}

/// Read at most `max_bytes` from `reader`.
///
/// One extra byte is requested so an oversized input is detected without
/// buffering the rest of it.
pub fn read_from(reader: impl Read, path: Option<String>, max_bytes: u64) -> Result<InputContext> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;

    let size_bytes = bytes.len() as u64;
    if size_bytes > max_bytes {
        return Err(SanitizeError::InputTooLarge { limit: max_bytes }.into());
    }

    Ok(InputContext {
        path,
        size_bytes,
        hash_alg: "sha256".to_string(),
        hash_hex: sha256_hex(&bytes),
        bytes,
    })
}

/// Parse raw bytes into a generic JSON tree.
///
/// Any syntactically valid JSON is accepted here, whatever its shape; only
/// unparsable bytes are an error.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).context("input is not valid JSON")
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
