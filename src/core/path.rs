use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One command of a vector path, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Elliptical arc with SVG semantics; `sweep == true` is clockwise on a
    /// y-down canvas.
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, `None` for `Close`.
    #[must_use]
    pub fn end_point(self) -> Option<(f64, f64)> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::ArcTo { x, y, .. } => {
                Some((x, y))
            }
            Self::Close => None,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::ArcTo { radius, x, y, .. } => {
                radius.is_finite() && x.is_finite() && y.is_finite()
            }
            Self::Close => true,
        }
    }
}

/// Serializes commands into SVG path data (`d` attribute).
#[must_use]
pub fn to_svg_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::with_capacity(commands.len() * 16);
    for (index, command) in commands.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(out, "M {} {}", coord(x), coord(y)),
            PathCommand::LineTo { x, y } => write!(out, "L {} {}", coord(x), coord(y)),
            PathCommand::ArcTo {
                radius,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                out,
                "A {r} {r} 0 {} {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                coord(x),
                coord(y),
                r = coord(radius),
            ),
            PathCommand::Close => write!(out, "Z"),
        };
    }
    out
}

fn coord(value: f64) -> String {
    let text = format!("{:.3}", (value * 1000.0).round() / 1000.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}
