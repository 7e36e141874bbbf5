//! Preview pipeline driver
//!
//! Single-threaded, strictly sequential: trace the program, pre-scan the
//! waypoints for canvas bounds, then segment and render in one pass.
//! The pre-scan exists because the `<svg>` header carries the bounds and
//! must be written before any primitive; the waypoint vector is already
//! buffered, so deriving bounds first costs one linear scan.

use std::io::Write;

use grooveview_core::{PreviewConfig, Result};
use grooveview_gcode::Program;

use crate::render::renderer_for;
use crate::stroke::StrokeSegmenter;
use crate::svg::SvgDocument;
use crate::trace::{TraceBuilder, Waypoint};

/// Canvas bounds in pixels: maximum engaged-waypoint x and |y|, scaled
/// and rounded up. Disengaged waypoints do not grow the canvas.
pub fn canvas_bounds(waypoints: &[Waypoint], pixels_per_inch: f64) -> (u32, u32) {
    let mut width = 0.0f64;
    let mut height = 0.0f64;
    for wp in waypoints.iter().filter(|wp| wp.z < 0.0) {
        width = width.max(wp.x * pixels_per_inch);
        height = height.max(wp.y.abs() * pixels_per_inch);
    }
    (width.ceil() as u32, height.ceil() as u32)
}

/// Render a tokenized program into a complete SVG document.
///
/// The caller is responsible for tool-angle validation in principle, but
/// the check is cheap and a bad angle poisons every radius, so it is
/// re-run here.
pub fn render_preview<W: Write>(
    program: &Program,
    config: &PreviewConfig,
    out: &mut W,
) -> Result<()> {
    config.validate()?;

    let waypoints = TraceBuilder::new().trace(program);
    let (width, height) = canvas_bounds(&waypoints, config.pixels_per_inch);

    let mut doc = SvgDocument::new(width, height, config.pretty);
    let renderer = renderer_for(config.render_mode);
    let mut segmenter = StrokeSegmenter::new(config);
    let mut strokes = 0usize;

    for waypoint in &waypoints {
        if let Some(stroke) = segmenter.push(waypoint) {
            renderer.render(&stroke, &mut doc);
            strokes += 1;
        }
    }
    // Input may end with the tool still engaged.
    if let Some(stroke) = segmenter.finish() {
        renderer.render(&stroke, &mut doc);
        strokes += 1;
    }

    tracing::debug!(
        waypoints = waypoints.len(),
        strokes,
        primitives = doc.primitive_count(),
        width,
        height,
        "rendered preview"
    );

    doc.write_to(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(x: f64, y: f64, z: f64) -> Waypoint {
        Waypoint { x, y, z }
    }

    #[test]
    fn test_bounds_ignore_disengaged_waypoints() {
        let waypoints = [wp(5.0, 5.0, 0.1), wp(1.0, -0.5, -0.1)];
        assert_eq!(canvas_bounds(&waypoints, 100.0), (100, 50));
    }

    #[test]
    fn test_bounds_empty_trace() {
        assert_eq!(canvas_bounds(&[], 100.0), (0, 0));
    }

    #[test]
    fn test_bounds_round_up() {
        let waypoints = [wp(0.015, 0.0, -0.1)];
        assert_eq!(canvas_bounds(&waypoints, 100.0), (2, 0));
    }

    #[test]
    fn test_bounds_never_negative() {
        let waypoints = [wp(-2.0, 0.0, -0.1)];
        assert_eq!(canvas_bounds(&waypoints, 100.0), (0, 0));
    }
}
