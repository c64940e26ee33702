//! Minimal buffered SVG writer.
//! The renderer issues drawing commands against this surface and the result
//! is written out once at the end.

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct SvgCanvas {
    body: String,
    open_groups: usize,
}

/// Compact coordinate formatting: integral values lose the trailing ".0".
fn fmt(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

/// Escape text content for XML.
fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64, background: &str) -> Self {
        let mut body = String::new();
        body.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"chartArea\" \
             width=\"{}\" height=\"{}\" style=\"background-color:{};\">\n",
            fmt(width),
            fmt(height),
            background
        ));
        Self {
            body,
            open_groups: 0,
        }
    }

    pub fn open_group(&mut self, transform: &str) {
        self.body
            .push_str(&format!("<g transform=\"{}\">\n", transform));
        self.open_groups += 1;
    }

    pub fn close_group(&mut self) {
        if self.open_groups > 0 {
            self.body.push_str("</g>\n");
            self.open_groups -= 1;
        }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" fill=\"none\" stroke=\"{}\"/>\n",
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            stroke
        ));
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, opacity: f64) {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" opacity=\"{}\"/>\n",
            fmt(x),
            fmt(y),
            fmt(w),
            fmt(h),
            fill,
            opacity
        ));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, opacity: f64) {
        self.body.push_str(&format!(
            "<circle class=\"dataPoint\" cx=\"{}\" cy=\"{}\" r=\"{}\" \
             fill=\"{}\" stroke=\"{}\" opacity=\"{}\"/>\n",
            fmt(cx),
            fmt(cy),
            fmt(r),
            fill,
            stroke,
            opacity
        ));
    }

    pub fn text(&mut self, x: f64, y: f64, size: u32, fill: &str, content: &str) {
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"Sans-Serif\" \
             fill=\"{}\">{}</text>\n",
            fmt(x),
            fmt(y),
            size,
            fill,
            esc(content)
        ));
    }

    /// Escape hatch for markup the simple primitives do not cover
    /// (rotated axis labels, tick groups).
    pub fn raw(&mut self, markup: &str) {
        self.body.push_str(markup);
    }

    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.body.push_str("</g>\n");
            self.open_groups -= 1;
        }
        self.body.push_str("</svg>\n");
        self.body
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let document = self.finish();
        let mut f = File::create(path)?;
        f.write_all(document.as_bytes())?;
        Ok(())
    }
}
