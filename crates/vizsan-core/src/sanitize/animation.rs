use serde_json::Value;

use crate::document::model::Animation;
use crate::sanitize::coerce;
use crate::sanitize::fields::Fields;
use crate::sanitize::stats::SanitizeStats;

/// Sanitize a scene's animation list against its sanitized shape count.
///
/// An entry survives only if it is a mapping whose `shape_index` coerces to
/// an integer in `[0, shape_count)`. `type`, `duration` and `delay` are
/// coerced independently and omitted on failure without dropping the entry.
/// Surviving entries keep their input order.
pub fn sanitize_animations(
    raw: &[Value],
    shape_count: usize,
    stats: &mut SanitizeStats,
) -> Vec<Animation> {
    raw.iter()
        .filter_map(|entry| {
            let anim = sanitize_animation(entry, shape_count, stats);
            if anim.is_none() {
                stats.animations_dropped += 1;
            }
            anim
        })
        .collect()
}

fn sanitize_animation(
    raw: &Value,
    shape_count: usize,
    stats: &mut SanitizeStats,
) -> Option<Animation> {
    let raw = raw.as_object()?;

    let Some(shape_index) = raw
        .get("shape_index")
        .and_then(coerce::index)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < shape_count)
    else {
        tracing::debug!(
            shape_index = ?raw.get("shape_index"),
            shape_count,
            "dropping animation: shape_index out of range"
        );
        return None;
    };

    let mut f = Fields::new(raw, stats);

    Some(Animation {
        shape_index,
        kind: f.text("type"),
        duration: f.number("duration"),
        delay: f.number("delay"),
    })
}
