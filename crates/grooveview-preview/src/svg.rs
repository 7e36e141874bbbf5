//! SVG document emitter
//!
//! Collects circle and path primitives in call order and writes a
//! complete document: XML declaration, `<svg>` header carrying the
//! computed canvas bounds, body, footer. Bounds must be known at
//! construction time, so the pipeline pre-scans the waypoint trace
//! before any primitive is emitted.

use std::io::{self, Write};

/// Fixed-point coordinate formatting, one decimal digit.
///
/// Negative zero is folded into zero so that `-y` positions at y=0 do
/// not print as `-0.0`.
pub fn fmt_num(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.1}", value)
}

/// An SVG document buffered in memory.
pub struct SvgDocument {
    width: u32,
    height: u32,
    pretty: bool,
    primitives: Vec<String>,
}

impl SvgDocument {
    /// Create a document with known pixel bounds.
    pub fn new(width: u32, height: u32, pretty: bool) -> Self {
        Self {
            width,
            height,
            pretty,
            primitives: Vec::new(),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of primitives emitted so far.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Append a circle primitive.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        self.primitives.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r)
        ));
    }

    /// Append a path primitive with the given `d` attribute.
    pub fn path(&mut self, d: &str) {
        self.primitives.push(format!("<path d=\"{}\"/>", d));
    }

    /// Write the complete document.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let sep = if self.pretty { "\n" } else { "" };
        write!(out, "<?xml version=\"1.0\"?>{}", sep)?;
        write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{}\" width=\"{}\">",
            self.height, self.width
        )?;
        for primitive in &self.primitives {
            write!(out, "{}{}", sep, primitive)?;
        }
        writeln!(out, "{}</svg>", sep)?;
        Ok(())
    }

    /// Render the document to a string. Used by tests and the library
    /// convenience API; the CLI writes straight to its output stream.
    pub fn to_svg_string(&self) -> String {
        let mut buf = Vec::new();
        self.write_to(&mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("document is valid UTF-8")
    }
}
