//! End-to-end pipeline tests: G-code text in, SVG document out.

use grooveview_core::{PreviewConfig, RenderMode};
use grooveview_gcode::tokenize;
use grooveview_preview::render_preview;

fn preview(gcode: &str, config: &PreviewConfig) -> String {
    let program = tokenize(gcode).expect("test g-code must tokenize");
    let mut out = Vec::new();
    render_preview(&program, config, &mut out).expect("render must succeed");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_no_motion_commands_empty_canvas() {
    let out = preview("F100\n(just a comment)\nG90", &PreviewConfig::default());
    assert!(out.contains("height=\"0\" width=\"0\""));
    assert!(!out.contains("<circle"));
    assert!(!out.contains("<path"));
}

#[test]
fn test_engaged_line_renders_single_outline() {
    // Two engaged waypoints, then a lift: one 2-point stroke.
    let gcode = "G1 X0 Y0 Z-0.05\nG1 X1 Y0 Z-0.05\nG0 Z0.1";
    let out = preview(gcode, &PreviewConfig::default());

    assert!(out.contains("height=\"0\" width=\"100\""), "bounds: {}", out);
    assert_eq!(out.matches("<path").count(), 1);
    assert!(!out.contains("<circle"));
    // Ribbon at r ≈ 1.34 px around y=0 with two arc caps.
    assert!(out.contains("M 0.0 1.3 "));
    assert_eq!(out.matches("A 1.3 1.3 ").count(), 2);
    assert!(out.contains("Z\""));
}

#[test]
fn test_lone_plunge_flushed_as_circle() {
    // Input ends while engaged; the open stroke must still render.
    let out = preview("G1 X0 Y0 Z-0.1", &PreviewConfig::default());
    assert_eq!(out.matches("<circle").count(), 1);
    assert!(out.contains("cx=\"0.0\" cy=\"0.0\" r=\"2.7\""));
}

#[test]
fn test_dots_mode_circle_per_sample() {
    let gcode = "G1 X0 Y0 Z-0.05\nG1 X1 Y0 Z-0.05\nG0 Z0.1";
    let config = PreviewConfig {
        render_mode: RenderMode::Dots,
        ..PreviewConfig::default()
    };
    let out = preview(gcode, &config);
    assert_eq!(out.matches("<circle").count(), 2);
    assert!(!out.contains("<path"));
}

#[test]
fn test_full_mode_renders_nothing() {
    let gcode = "G1 X0 Y0 Z-0.05\nG1 X1 Y0 Z-0.05\nG0 Z0.1";
    let config = PreviewConfig {
        render_mode: RenderMode::Full,
        ..PreviewConfig::default()
    };
    let out = preview(gcode, &config);
    // Bounds still reflect the trace; the body is empty.
    assert!(out.contains("width=\"100\""));
    assert!(!out.contains("<circle"));
    assert!(!out.contains("<path"));
}

#[test]
fn test_lift_and_replunge_yields_two_strokes() {
    let gcode = "G1 X0 Y0 Z-0.05\nG1 X1 Y0 Z-0.05\nG0 Z0.1\nG0 X2\nG1 Z-0.05\nG1 X3\nG0 Z0.1";
    let out = preview(gcode, &PreviewConfig::default());
    assert_eq!(out.matches("<path").count(), 2);
}

#[test]
fn test_modal_axes_across_blocks() {
    // Y set once, inherited by later motion; canvas height follows |y|.
    let gcode = "G0 X0 Y0.5 Z0.1\nG1 Z-0.05\nG1 X1\nG0 Z0.1";
    let out = preview(gcode, &PreviewConfig::default());
    assert!(out.contains("height=\"50\" width=\"100\""), "bounds: {}", out);
    // Image-space y is negated: ribbon sides sit at -50 ± 1.34 px.
    assert!(out.contains("M 0.0 -48.7 "));
    assert!(out.contains("L 0.0 -51.3 "));
}

#[test]
fn test_invalid_angle_rejected() {
    let program = tokenize("G1 Z-0.1").unwrap();
    let config = PreviewConfig::with_tool_angle(180.0);
    let mut out = Vec::new();
    let err = render_preview(&program, &config, &mut out);
    assert!(err.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_idempotent_output() {
    let gcode = "G1 X0 Y0 Z-0.05\nG1 X1 Y0.25 Z-0.1\nG0 Z0.1\nG1 X2 Y1 Z-0.02";
    let config = PreviewConfig {
        pretty: true,
        ..PreviewConfig::default()
    };
    let first = preview(gcode, &config);
    let second = preview(gcode, &config);
    assert_eq!(first, second);
}

#[test]
fn test_pretty_and_compact_same_primitives() {
    let gcode = "G1 X0 Y0 Z-0.05\nG1 X1 Y0 Z-0.05\nG0 Z0.1";
    let compact = preview(gcode, &PreviewConfig::default());
    let pretty = preview(
        gcode,
        &PreviewConfig {
            pretty: true,
            ..PreviewConfig::default()
        },
    );
    assert_eq!(compact.replace('\n', ""), pretty.replace('\n', ""));
    assert!(pretty.lines().count() > compact.lines().count());
}
