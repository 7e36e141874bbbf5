//! # Grooveview
//!
//! SVG preview of the groove a V-shaped bit carves from a G-code
//! toolpath, assuming flat stock at Z=0. Useful for visualizing V-carve
//! toolpaths without running a machine or a full simulator.
//!
//! ## Architecture
//!
//! Grooveview is organized as a workspace:
//!
//! 1. **grooveview-core** - Configuration and error types
//! 2. **grooveview-gcode** - Word-address tokenizer
//! 3. **grooveview-preview** - Motion trace, stroke segmentation, SVG rendering
//! 4. **grooveview** - CLI binary tying the pieces together
//!
//! The pipeline is a single sequential pass: tokenized command blocks
//! become absolute waypoints, contiguous depth-negative runs become
//! strokes, and each stroke is rendered as a dot or a width-varying
//! ribbon outline into the output document.

pub use grooveview_core::{
    PreviewConfig, PreviewError, RenderMode, Result, DEFAULT_PIXELS_PER_INCH,
    DEFAULT_TOOL_ANGLE_DEG,
};
pub use grooveview_gcode::{tokenize, Address, Block, Chunk, Program, TokenizeError};
pub use grooveview_preview::{
    canvas_bounds, render_preview, renderer_for, MachineState, MotionMode, Stroke, StrokePoint,
    StrokeRenderer, StrokeSegmenter, SvgDocument, TraceBuilder, Waypoint,
};

/// Tokenize and render in one call, returning the SVG document text.
pub fn preview_gcode(input: &str, config: &PreviewConfig) -> anyhow::Result<String> {
    let program = tokenize(input)?;
    let mut out = Vec::new();
    render_preview(&program, config, &mut out)?;
    Ok(String::from_utf8(out).expect("SVG output is valid UTF-8"))
}

/// Initialize logging with the default configuration.
///
/// Structured console logging on stderr with RUST_LOG support. Stderr
/// because stdout carries the SVG document.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
