use crate::TOOL_NAME;
use crate::report::model::Report;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    out.push_str(&format!(
        "Input: {} ({} bytes)\n",
        report.input.path.as_deref().unwrap_or("<stdin>"),
        report.input.size_bytes
    ));
    out.push_str(&format!("Status: {}\n", report.status));
    out.push_str(&format!(
        "Output: {} scenes, {} shapes, {} animations\n",
        report.output.scene_count, report.output.shape_count, report.output.animation_count
    ));

    let s = &report.stats;
    out.push_str("Repairs:\n");
    for (label, count) in [
        ("scenes dropped", s.scenes_dropped),
        ("shapes dropped", s.shapes_dropped),
        ("animations dropped", s.animations_dropped),
        ("fields omitted", s.fields_omitted),
        ("ids synthesized", s.ids_synthesized),
        ("ids rewritten", s.ids_rewritten),
    ] {
        out.push_str(&format!("  - {label}: {count}\n"));
    }
    out
}
