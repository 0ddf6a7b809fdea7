use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::document::model::VisualizationDocument;
use crate::input::read::sha256_hex;
use crate::sanitize::stats::SanitizeStats;

/// Summary of one sanitization run.
///
/// Everything here is derived from the input bytes and the sanitized
/// document, so identical inputs produce identical reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub status: SanitizeStatus,
    pub input: InputInfo,
    pub output: OutputInfo,
    pub stats: SanitizeStats,
}

impl Report {
    pub fn new(
        tool: ToolInfo,
        input: InputInfo,
        document: &VisualizationDocument,
        stats: SanitizeStats,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            status: SanitizeStatus::from_stats(&stats),
            input,
            output: OutputInfo::from_document(document)?,
            stats,
        })
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Raw input metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// `None` when read from stdin.
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: ContentHash,
}

/// Content fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentHash {
    pub algorithm: String,
    pub value: String,
}

impl ContentHash {
    pub fn sha256(value: impl Into<String>) -> Self {
        Self {
            algorithm: "sha256".into(),
            value: value.into(),
        }
    }
}

/// Sanitized document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputInfo {
    pub scene_count: usize,
    pub shape_count: usize,
    pub animation_count: usize,
    /// Hash of the compact JSON serialization of the sanitized document.
    pub hash: ContentHash,
}

impl OutputInfo {
    pub fn from_document(document: &VisualizationDocument) -> serde_json::Result<Self> {
        let bytes = serde_json::to_vec(document)?;
        Ok(Self {
            scene_count: document.scenes.len(),
            shape_count: document.shape_count(),
            animation_count: document.animation_count(),
            hash: ContentHash::sha256(sha256_hex(&bytes)),
        })
    }
}

/// Whether sanitization had to change anything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SanitizeStatus {
    /// Nothing was dropped, omitted, synthesized or renamed.
    Clean,
    Repaired,
}

impl SanitizeStatus {
    pub fn from_stats(stats: &SanitizeStats) -> Self {
        if stats.is_clean() {
            Self::Clean
        } else {
            Self::Repaired
        }
    }
}

impl std::fmt::Display for SanitizeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Clean => "CLEAN",
            Self::Repaired => "REPAIRED",
        })
    }
}
