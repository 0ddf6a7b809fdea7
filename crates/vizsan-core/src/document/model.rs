use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sanitized visualization document.
///
/// `scenes` is the only field the sanitizer rewrites. Every other top-level
/// field of the input (including `topic`) is carried through verbatim in
/// `extra` and flattened back into the top-level object on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationDocument {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub scenes: Vec<Scene>,
}

impl VisualizationDocument {
    /// The document topic, when the input carried one as a string.
    pub fn topic(&self) -> Option<&str> {
        self.extra.get("topic").and_then(Value::as_str)
    }

    pub fn shape_count(&self) -> usize {
        self.scenes.iter().map(|s| s.shapes.len()).sum()
    }

    pub fn animation_count(&self) -> usize {
        self.scenes.iter().map(|s| s.animations.len()).sum()
    }
}

/// One timed unit of shapes and animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Seconds; never below [`MIN_SCENE_DURATION`].
    pub duration: f64,
    pub shapes: Vec<Shape>,
    pub animations: Vec<Animation>,
}

/// Floor applied to every scene duration.
pub const MIN_SCENE_DURATION: f64 = 1.0;

/// A drawable primitive, tagged on the wire by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line(LineShape),
    Arrow(ArrowShape),
    Circle(CircleShape),
    Rectangle(RectangleShape),
    Text(TextShape),
}

impl Shape {
    /// Wire name of the shape type.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Arrow(_) => "arrow",
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
            Shape::Text(_) => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineShape {
    /// Flat `[x0, y0, x1, y1, ...]` list; always even and non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(rename = "lineDash", skip_serializing_if = "Option::is_none")]
    pub line_dash: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextShape {
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A timed effect applied to one shape of the owning scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Index into the owning scene's sanitized `shapes`.
    pub shape_index: usize,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}
