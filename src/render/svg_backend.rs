use std::fmt::Write as _;

use tracing::debug;

use crate::core::to_svg_path_data;
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renderer that serializes each frame into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    element_count: usize,
}

impl SvgRenderer {
    /// SVG markup of the last rendered frame.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::new();
        let mut elements = 0usize;
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for line in &frame.lines {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                line.color.to_rgb_hex(),
                opacity_attr("stroke-opacity", line.color),
                num(line.stroke_width),
            );
            elements += 1;
        }

        for rect in &frame.rects {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                num(rect.corner_radius),
                rect.fill.to_rgb_hex(),
                opacity_attr("fill-opacity", rect.fill),
            );
            elements += 1;
        }

        for path in &frame.paths {
            let fill = match path.fill {
                Some(color) => format!(
                    r#" fill="{}"{}"#,
                    color.to_rgb_hex(),
                    opacity_attr("fill-opacity", color)
                ),
                None => r#" fill="none""#.to_owned(),
            };
            let stroke = match path.stroke {
                Some(color) => format!(
                    r#" stroke="{}"{} stroke-width="{}""#,
                    color.to_rgb_hex(),
                    opacity_attr("stroke-opacity", color),
                    num(path.stroke_width)
                ),
                None => String::new(),
            };
            let transform = if path.offset_x != 0.0 || path.offset_y != 0.0 {
                format!(
                    r#" transform="translate({} {})""#,
                    num(path.offset_x),
                    num(path.offset_y)
                )
            } else {
                String::new()
            };
            let _ = writeln!(
                out,
                r#"  <path d="{}"{fill}{stroke}{transform}/>"#,
                to_svg_path_data(&path.commands),
            );
            elements += 1;
        }

        for circle in &frame.circles {
            let stroke = match circle.stroke {
                Some(color) => format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    color.to_rgb_hex(),
                    num(circle.stroke_width)
                ),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{}{stroke}/>"#,
                num(circle.cx),
                num(circle.cy),
                num(circle.radius),
                circle.fill.to_rgb_hex(),
                opacity_attr("fill-opacity", circle.fill),
            );
            elements += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
                num(text.x),
                num(text.y),
                num(text.font_size_px),
                text.color.to_rgb_hex(),
                escape_text(&text.text),
            );
            elements += 1;
        }

        out.push_str("</svg>\n");
        debug!(elements, width, height, "rendered svg frame");
        self.document = out;
        self.element_count = elements;
        Ok(())
    }
}

fn num(value: f64) -> String {
    let text = format!("{:.2}", (value * 100.0).round() / 100.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(color.alpha))
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_text, num};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.346), "12.35");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn text_is_xml_escaped() {
        assert_eq!(escape_text("R&D <beta>"), "R&amp;D &lt;beta&gt;");
    }
}
