//! # Grooveview Preview
//!
//! Turns a tokenized G-code program into an SVG preview of the groove a
//! V-bit carves into flat stock at Z=0. The pipeline is strictly
//! sequential:
//!
//! 1. **Trace** — rebuild the absolute 3D tool position per motion
//!    command, applying modal axis defaults.
//! 2. **Stroke** — group consecutive depth-negative waypoints into
//!    strokes of pixel position plus groove radius.
//! 3. **Render** — draw each stroke as a dot or a width-varying ribbon
//!    outline.
//! 4. **Svg** — wrap the primitives in a document with computed canvas
//!    bounds.

pub mod pipeline;
pub mod render;
pub mod stroke;
pub mod svg;
pub mod trace;

pub use pipeline::{canvas_bounds, render_preview};
pub use render::{renderer_for, DotRenderer, NullRenderer, StrokeRenderer, TrapezoidRenderer};
pub use stroke::{Stroke, StrokePoint, StrokeSegmenter};
pub use svg::SvgDocument;
pub use trace::{MachineState, MotionMode, TraceBuilder, Waypoint};
