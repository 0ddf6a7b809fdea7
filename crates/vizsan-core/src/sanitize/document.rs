use serde_json::{Map, Value};

use crate::document::model::VisualizationDocument;
use crate::sanitize::scene::sanitize_scene;
use crate::sanitize::stats::SanitizeStats;
use crate::util::dedup::dedupe_scene_ids;

/// Normalize a raw (already guard-checked) document.
///
/// Anything that is not an object yields an empty document. An object keeps
/// every top-level field except `scenes` verbatim; `scenes` is rebuilt from
/// the raw entries that are objects, in order, and then deduplicated.
pub fn normalize_document(raw: &Value, stats: &mut SanitizeStats) -> VisualizationDocument {
    let Some(raw) = raw.as_object() else {
        tracing::debug!("input is not an object; producing an empty document");
        return VisualizationDocument::default();
    };

    let mut extra: Map<String, Value> = raw.clone();
    let raw_scenes = match extra.remove("scenes") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::debug!("`scenes` is not an array; producing no scenes");
            stats.fields_omitted += 1;
            Vec::new()
        }
        None => Vec::new(),
    };

    let mut scenes = Vec::with_capacity(raw_scenes.len());
    for (position, entry) in raw_scenes.iter().enumerate() {
        match entry.as_object() {
            Some(scene) => scenes.push(sanitize_scene(scene, position, stats)),
            None => {
                tracing::debug!(position, "dropping scene: entry is not an object");
                stats.scenes_dropped += 1;
            }
        }
    }

    stats.ids_rewritten += dedupe_scene_ids(&mut scenes);

    VisualizationDocument { extra, scenes }
}
