use serde_json::{Map, Value};

use crate::document::model::{MIN_SCENE_DURATION, Scene};
use crate::sanitize::animation::sanitize_animations;
use crate::sanitize::coerce;
use crate::sanitize::fields::Fields;
use crate::sanitize::shape::sanitize_shape;
use crate::sanitize::stats::SanitizeStats;

/// Sanitize one raw scene mapping.
///
/// `position` is the scene's index in the raw `scenes` array and seeds the
/// placeholder identifier for scenes without a usable `scene_id`.
///
/// Shapes are finalized before animations are looked at: the valid
/// `shape_index` range is the number of shapes that survived, not the number
/// the input declared.
pub fn sanitize_scene(
    raw: &Map<String, Value>,
    position: usize,
    stats: &mut SanitizeStats,
) -> Scene {
    let mut f = Fields::new(raw, stats);

    let scene_id = f.text("scene_id");
    let title = f.text("title");
    let duration = raw
        .get("duration")
        .and_then(coerce::number)
        .map_or(MIN_SCENE_DURATION, |d| d.max(MIN_SCENE_DURATION));

    let scene_id = scene_id.unwrap_or_else(|| {
        stats.ids_synthesized += 1;
        placeholder_id(position)
    });

    let shapes: Vec<_> = list(raw, "shapes")
        .iter()
        .filter_map(|entry| {
            let shape = sanitize_shape(entry, stats);
            if shape.is_none() {
                stats.shapes_dropped += 1;
            }
            shape
        })
        .collect();

    let animations = sanitize_animations(list(raw, "animations"), shapes.len(), stats);

    Scene {
        scene_id,
        title,
        duration,
        shapes,
        animations,
    }
}

/// Identifier for a scene that arrived without one.
pub fn placeholder_id(position: usize) -> String {
    format!("scene_{}", position + 1)
}

fn list<'a>(raw: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    raw.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
