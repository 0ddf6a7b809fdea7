use serde_json::Value;

use crate::document::model::{
    ArrowShape, CircleShape, LineShape, RectangleShape, Shape, TextShape,
};
use crate::sanitize::fields::Fields;
use crate::sanitize::stats::SanitizeStats;

/// Sanitize one raw shape entry.
///
/// Returns `None` when the entry cannot be drawn at all: it is not a
/// mapping, or its `type` is missing or unknown. Otherwise every field in
/// the type's schema is coerced independently and unknown fields are
/// discarded.
pub fn sanitize_shape(raw: &Value, stats: &mut SanitizeStats) -> Option<Shape> {
    let Some(raw) = raw.as_object() else {
        tracing::debug!("dropping shape: entry is not an object");
        return None;
    };

    let kind = raw.get("type").and_then(Value::as_str);
    let mut f = Fields::new(raw, stats);

    let shape = match kind {
        Some("line") => Shape::Line(LineShape {
            points: f.points("points"),
            stroke: f.text("stroke"),
            dash: f.number_list("dash"),
        }),
        Some("arrow") => Shape::Arrow(ArrowShape {
            points: f.points("points"),
            stroke: f.text("stroke"),
            line_dash: f.number_list("lineDash"),
        }),
        Some("circle") => Shape::Circle(CircleShape {
            x: f.number("x"),
            y: f.number("y"),
            radius: f.number("radius"),
            stroke_width: f.number("strokeWidth"),
        }),
        Some("rectangle") => Shape::Rectangle(RectangleShape {
            x: f.number("x"),
            y: f.number("y"),
            width: f.number("width"),
            height: f.number("height"),
            stroke: f.text("stroke"),
        }),
        Some("text") => Shape::Text(TextShape {
            font_size: f.number("fontSize"),
            text: f.text("text"),
        }),
        other => {
            tracing::debug!(shape_type = ?other, "dropping shape: unrecognized type");
            return None;
        }
    };

    Some(shape)
}
