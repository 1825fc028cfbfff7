// File: crates/pump-chart/src/svg.rs
// Summary: SVG serialization of a `Drawing`.

use std::fmt::Write as _;

use crate::drawing::{Drawing, Primitive, Text};
use crate::series::format_value as num;

/// Escape text for use in XML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_text(out: &mut String, t: &Text) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
        num(t.position.x),
        num(t.position.y),
        t.anchor.as_svg(),
        num(t.size),
        t.fill,
        escape(&t.content),
    );
}

impl Drawing {
    /// Serialize as a standalone SVG document in the drawing's logical
    /// coordinate space, sized to fill its container's width.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="100%" style="display:block">"#,
            num(self.width),
            num(self.height),
        );
        for p in &self.primitives {
            match p {
                Primitive::Rect { rect, fill } => {
                    let _ = write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                        num(rect.left),
                        num(rect.top),
                        num(rect.width()),
                        num(rect.height()),
                        fill,
                    );
                }
                Primitive::Area { path, fill } => {
                    let _ = write!(out, r#"<path d="{path}" fill="{fill}" stroke="none"/>"#);
                }
                Primitive::Line { path, stroke, width } => {
                    let _ = write!(
                        out,
                        r#"<path d="{path}" fill="none" stroke="{stroke}" stroke-width="{}"/>"#,
                        num(*width),
                    );
                }
                Primitive::Marker { center, radius, fill } => {
                    let _ = write!(
                        out,
                        r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
                        num(center.x),
                        num(center.y),
                        num(*radius),
                    );
                }
                Primitive::Pill(pill) => {
                    let _ = write!(
                        out,
                        r#"<g><rect x="{}" y="{}" rx="{r}" ry="{r}" width="{}" height="{}" fill="{}" opacity="{}"/>"#,
                        num(pill.rect.left),
                        num(pill.rect.top),
                        num(pill.rect.width()),
                        num(pill.rect.height()),
                        pill.fill,
                        num(pill.opacity),
                        r = num(pill.radius),
                    );
                    write_text(&mut out, &pill.text);
                    out.push_str("</g>");
                }
                Primitive::Tick(t) => write_text(&mut out, t),
            }
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}
