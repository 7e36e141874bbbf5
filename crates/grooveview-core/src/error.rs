//! Error types for the preview pipeline.
//!
//! The pipeline performs no semantic validation of the command stream:
//! unrecognized words are ignored and axis-less motion repeats the last
//! known position. The only precondition enforced here is the tool
//! half-angle range; everything else that can fail is I/O.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Errors that can occur while producing a groove preview.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Tool angle outside the open interval (0, 180) degrees.
    ///
    /// Outside this range `depth2width` degenerates: zero width at 0°,
    /// negative width beyond 180°, and a tangent singularity at 180°.
    #[error("Invalid tool angle: {degrees}° (must be strictly between 0 and 180)")]
    InvalidToolAngle {
        /// The rejected angle in degrees.
        degrees: f64,
    },

    /// I/O error while writing the output document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for preview operations.
pub type Result<T> = std::result::Result<T, PreviewError>;
