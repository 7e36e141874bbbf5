//! Stroke renderers
//!
//! A render strategy is selected once per run and invoked per stroke,
//! writing primitives straight into the output document in call order.
//!
//! The trapezoid renderer offsets each vertex along the local
//! perpendicular of its incoming segment. There is no mitering at
//! interior vertices, so sharp turns can pinch or self-overlap; that
//! matches the source behavior this previewer reproduces.

use glam::DVec2;

use grooveview_core::RenderMode;

use crate::stroke::Stroke;
use crate::svg::{fmt_num, SvgDocument};

/// Strategy for turning one stroke into SVG primitives.
pub trait StrokeRenderer {
    /// Render one stroke into the document.
    fn render(&self, stroke: &Stroke, doc: &mut SvgDocument);
}

/// Select the renderer for a run.
pub fn renderer_for(mode: RenderMode) -> Box<dyn StrokeRenderer> {
    match mode {
        RenderMode::Dots => Box::new(DotRenderer),
        RenderMode::Trapezoids => Box::new(TrapezoidRenderer),
        RenderMode::Full => Box::new(NullRenderer),
    }
}

/// One circle per engaged sample.
pub struct DotRenderer;

impl StrokeRenderer for DotRenderer {
    fn render(&self, stroke: &Stroke, doc: &mut SvgDocument) {
        for point in stroke.points() {
            doc.circle(point.pos.x, point.pos.y, point.radius);
        }
    }
}

/// Width-varying ribbon outline with semicircular end caps.
pub struct TrapezoidRenderer;

impl StrokeRenderer for TrapezoidRenderer {
    fn render(&self, stroke: &Stroke, doc: &mut SvgDocument) {
        let points = stroke.points();
        if points.len() < 2 {
            // A trapezoid needs two vertices; degenerate strokes fall
            // back to a dot.
            DotRenderer.render(stroke, doc);
            return;
        }

        let mut positive = Vec::with_capacity(points.len());
        let mut negative = Vec::with_capacity(points.len());

        // Offset direction of vertex i is the unit perpendicular of the
        // incoming segment; vertex 0 borrows the first segment's. A
        // zero-length delta (same position, different radius) keeps the
        // previous direction.
        let mut dir = (points[1].pos - points[0].pos)
            .try_normalize()
            .unwrap_or(DVec2::X);
        offset_vertex(points[0].pos, dir, points[0].radius, &mut positive, &mut negative);
        for i in 1..points.len() {
            dir = (points[i].pos - points[i - 1].pos)
                .try_normalize()
                .unwrap_or(dir);
            offset_vertex(points[i].pos, dir, points[i].radius, &mut positive, &mut negative);
        }

        doc.path(&outline_path(&positive, &negative));
    }
}

fn offset_vertex(
    pos: DVec2,
    dir: DVec2,
    radius: f64,
    positive: &mut Vec<DVec2>,
    negative: &mut Vec<DVec2>,
) {
    let offset = dir.perp() * radius;
    positive.push(pos + offset);
    negative.push(pos - offset);
}

/// Closed outline: positive side forward, arc cap, negative side in
/// reverse, arc cap back to the start.
fn outline_path(positive: &[DVec2], negative: &[DVec2]) -> String {
    let mut d = String::new();

    d.push_str(&move_to(positive[0]));
    for p in &positive[1..] {
        d.push_str(&line_to(*p));
    }

    let last = positive.len() - 1;
    d.push_str(&arc_to(positive[last], negative[last]));
    for p in negative[..last].iter().rev() {
        d.push_str(&line_to(*p));
    }
    d.push_str(&arc_to(negative[0], positive[0]));
    d.push_str("Z");

    d
}

fn move_to(p: DVec2) -> String {
    format!("M {} {} ", fmt_num(p.x), fmt_num(p.y))
}

fn line_to(p: DVec2) -> String {
    format!("L {} {} ", fmt_num(p.x), fmt_num(p.y))
}

/// Semicircular cap: radius is half the distance between the side
/// endpoints, sweep chosen to bulge away from the stroke body.
fn arc_to(from: DVec2, to: DVec2) -> String {
    let r = from.distance(to) / 2.0;
    format!(
        "A {} {} 0 0 0 {} {} ",
        fmt_num(r),
        fmt_num(r),
        fmt_num(to.x),
        fmt_num(to.y)
    )
}

/// Reserved full-outline mode: renders nothing.
pub struct NullRenderer;

impl StrokeRenderer for NullRenderer {
    fn render(&self, _stroke: &Stroke, _doc: &mut SvgDocument) {}
}
