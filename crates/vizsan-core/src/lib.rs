pub mod document;
pub mod error;
pub mod input;
pub mod report;
pub mod sanitize;
pub mod util;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::document::model::VisualizationDocument;
use crate::error::SanitizeError;
use crate::input::guard::{Limits, check_document, check_structure};
use crate::input::read::{InputContext, parse_document};
use crate::report::model::{Report, ToolInfo};
use crate::sanitize::document::normalize_document;
use crate::sanitize::stats::SanitizeStats;

pub const TOOL_NAME: &str = "vizsan";

/// JSON schema version of vizsan reports.
/// Bump only when the report layout changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A sanitized document together with what it cost to produce it.
#[derive(Debug, Clone)]
pub struct Sanitized {
    pub document: VisualizationDocument,
    pub stats: SanitizeStats,
}

/// Sanitize an untrusted document under the default [`Limits`].
///
/// Only a structural limit violation is an error; malformed content is
/// repaired by omission.
pub fn sanitize(raw: &Value) -> Result<VisualizationDocument, SanitizeError> {
    sanitize_with(raw, &Limits::default()).map(|s| s.document)
}

/// Sanitize an untrusted document under explicit limits.
///
/// Both the raw input and the sanitized output must fit `limits`; output
/// that could not be sanitized again under the same limits is rejected.
///
/// Pure and synchronous: no state survives the call, so independent
/// documents may be sanitized concurrently.
#[tracing::instrument(skip_all)]
pub fn sanitize_with(raw: &Value, limits: &Limits) -> Result<Sanitized, SanitizeError> {
    if let Err(err) = check_structure(raw, limits) {
        tracing::warn!(%err, "rejecting input");
        return Err(err);
    }

    let mut stats = SanitizeStats::default();
    let document = normalize_document(raw, &mut stats);

    if let Err(err) = check_document(&document, limits) {
        tracing::warn!(%err, "rejecting input: sanitized output exceeds limits");
        return Err(err);
    }

    tracing::debug!(
        scenes = document.scenes.len(),
        clean = stats.is_clean(),
        "sanitized document"
    );

    Ok(Sanitized { document, stats })
}

/// Result of the full read-to-report pipeline.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub document: VisualizationDocument,
    pub report: Report,
}

/// Parse, guard, sanitize and report on raw input bytes.
pub fn inspect(input: InputContext, tool: ToolInfo, limits: &Limits) -> Result<Inspection> {
    let raw = parse_document(&input.bytes)?;
    let Sanitized { document, stats } = sanitize_with(&raw, limits)?;

    let report = Report::new(tool, input.into_info(), &document, stats)
        .context("failed to serialize sanitized document")?;

    Ok(Inspection { document, report })
}
