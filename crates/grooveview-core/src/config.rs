//! Preview configuration
//!
//! Fixed per-run settings: the V-bit tool angle, output scaling, the
//! stroke render mode, and the output formatting toggle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PreviewError, Result};

/// Default V-bit included angle in degrees.
pub const DEFAULT_TOOL_ANGLE_DEG: f64 = 30.0;

/// Output scaling: SVG pixels per inch of machine travel.
pub const DEFAULT_PIXELS_PER_INCH: f64 = 100.0;

/// Stroke render strategy, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One circle per engaged sample.
    Dots,
    /// Width-varying ribbon outline with rounded end caps.
    Trapezoids,
    /// Reserved full-outline mode; renders nothing.
    Full,
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::Trapezoids
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dots => write!(f, "dots"),
            Self::Trapezoids => write!(f, "trapezoids"),
            Self::Full => write!(f, "full"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dots" => Ok(Self::Dots),
            "trapezoids" => Ok(Self::Trapezoids),
            "full" => Ok(Self::Full),
            _ => Err(format!("Unknown render mode: {}", s)),
        }
    }
}

/// Per-run preview configuration.
///
/// The tool angle is the only field validated here; callers must invoke
/// [`PreviewConfig::validate`] before running the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// V-bit included angle in degrees, open interval (0, 180).
    pub tool_angle_deg: f64,
    /// SVG pixels per inch of machine travel.
    pub pixels_per_inch: f64,
    /// Stroke render strategy.
    pub render_mode: RenderMode,
    /// Emit one primitive per line instead of compact output.
    pub pretty: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tool_angle_deg: DEFAULT_TOOL_ANGLE_DEG,
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
            render_mode: RenderMode::default(),
            pretty: false,
        }
    }
}

impl PreviewConfig {
    /// Create a configuration with the given tool angle and defaults
    /// for everything else.
    pub fn with_tool_angle(tool_angle_deg: f64) -> Self {
        Self {
            tool_angle_deg,
            ..Self::default()
        }
    }

    /// Check that the tool angle is strictly between 0 and 180 degrees.
    pub fn validate(&self) -> Result<()> {
        if self.tool_angle_deg > 0.0 && self.tool_angle_deg < 180.0 {
            Ok(())
        } else {
            Err(PreviewError::InvalidToolAngle {
                degrees: self.tool_angle_deg,
            })
        }
    }

    /// Groove width per unit of carve depth: `2 * tan(half_angle)`.
    pub fn depth_to_width(&self) -> f64 {
        2.0 * (self.tool_angle_deg / 2.0).to_radians().tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PreviewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tool_angle_deg, 30.0);
        assert_eq!(config.pixels_per_inch, 100.0);
        assert_eq!(config.render_mode, RenderMode::Trapezoids);
    }

    #[test]
    fn test_angle_bounds_rejected() {
        for degrees in [0.0, -10.0, 180.0, 360.0] {
            let config = PreviewConfig::with_tool_angle(degrees);
            assert!(
                matches!(
                    config.validate(),
                    Err(PreviewError::InvalidToolAngle { .. })
                ),
                "angle {} should be rejected",
                degrees
            );
        }
    }

    #[test]
    fn test_angle_just_inside_bounds_accepted() {
        assert!(PreviewConfig::with_tool_angle(0.001).validate().is_ok());
        assert!(PreviewConfig::with_tool_angle(179.999).validate().is_ok());
    }

    #[test]
    fn test_depth_to_width_30_degrees() {
        let config = PreviewConfig::with_tool_angle(30.0);
        // 2 * tan(15°) ≈ 0.5359
        assert!((config.depth_to_width() - 0.535_898).abs() < 1e-5);
    }

    #[test]
    fn test_depth_to_width_90_degrees() {
        let config = PreviewConfig::with_tool_angle(90.0);
        // 2 * tan(45°) = 2
        assert!((config.depth_to_width() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_mode_round_trip() {
        for mode in [RenderMode::Dots, RenderMode::Trapezoids, RenderMode::Full] {
            let parsed: RenderMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("wireframe".parse::<RenderMode>().is_err());
    }
}
