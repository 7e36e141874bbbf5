//! # Grooveview Core
//!
//! Shared configuration and error types for the grooveview workspace:
//! - Preview configuration (tool geometry, output scaling, render mode)
//! - Structured error types
//!
//! The preview pipeline itself lives in `grooveview-preview`; the G-code
//! tokenizer lives in `grooveview-gcode`.

pub mod config;
pub mod error;

pub use config::{PreviewConfig, RenderMode, DEFAULT_PIXELS_PER_INCH, DEFAULT_TOOL_ANGLE_DEG};
pub use error::{PreviewError, Result};
