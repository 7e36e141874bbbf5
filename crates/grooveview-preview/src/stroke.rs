//! Stroke segmentation
//!
//! Groups consecutive engaged waypoints (z < 0) into strokes of pixel
//! position plus instantaneous groove radius. A stroke closes when the
//! tool lifts back to z >= 0 or the input ends.

use glam::DVec2;

use grooveview_core::PreviewConfig;

use crate::trace::Waypoint;

/// One engaged sample in pixel space.
///
/// `pos` has the Y sign inverted to match top-down image coordinates;
/// `radius` is half the groove width at this depth. Both are already
/// scaled by pixels-per-inch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub pos: DVec2,
    pub radius: f64,
}

/// A maximal contiguous run of engaged samples. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<StrokePoint>,
}

impl Stroke {
    /// The stroke's samples in input order.
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Strokes are never empty; kept for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Accumulates the in-progress stroke across a waypoint sequence.
///
/// State is explicit so the segmenter is restartable and testable with
/// injected waypoints.
pub struct StrokeSegmenter {
    pixels_per_inch: f64,
    depth_to_width: f64,
    current: Vec<StrokePoint>,
}

impl StrokeSegmenter {
    /// Create a segmenter from the run configuration.
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            pixels_per_inch: config.pixels_per_inch,
            depth_to_width: config.depth_to_width(),
            current: Vec::new(),
        }
    }

    /// Feed one waypoint; returns a completed stroke when the tool
    /// transitions from engaged to disengaged.
    pub fn push(&mut self, waypoint: &Waypoint) -> Option<Stroke> {
        if waypoint.z < 0.0 {
            let point = self.sample(waypoint);
            if self.current.last() != Some(&point) {
                self.current.push(point);
            }
            None
        } else {
            self.take_current()
        }
    }

    /// Flush a stroke still open at end of input.
    pub fn finish(&mut self) -> Option<Stroke> {
        self.take_current()
    }

    fn take_current(&mut self) -> Option<Stroke> {
        if self.current.is_empty() {
            return None;
        }
        let points = std::mem::take(&mut self.current);
        tracing::trace!(points = points.len(), "closed stroke");
        Some(Stroke { points })
    }

    fn sample(&self, waypoint: &Waypoint) -> StrokePoint {
        let ppi = self.pixels_per_inch;
        StrokePoint {
            pos: DVec2::new(waypoint.x * ppi, -waypoint.y * ppi),
            radius: -waypoint.z * ppi * self.depth_to_width / 2.0,
        }
    }
}
