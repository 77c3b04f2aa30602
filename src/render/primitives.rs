use serde::{Deserialize, Serialize};

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a `#rrggbb` / `#rrggbbaa` hex token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(token: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(token.to_owned());
        let digits = token.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |index: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| invalid())
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// `#rrggbb` token without the alpha channel.
    #[must_use]
    pub fn to_rgb_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.alpha >= 1.0 {
            self.to_rgb_hex()
        } else {
            format!("{}{:02x}", self.to_rgb_hex(), to_byte(self.alpha))
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::from_hex(&token)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

fn validate_coordinates(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_coordinates(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_coordinates(&[self.x, self.y, self.width, self.height], "rect")?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Point marker circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_coordinates(&[self.cx, self.cy], "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Vector path with optional stroke and fill.
///
/// `offset_x`/`offset_y` translate the whole path at draw time without
/// touching its commands (hover pop-out).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub fill: Option<Color>,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(commands: Vec<PathCommand>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            commands,
            stroke: Some(stroke),
            stroke_width,
            fill: None,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub fn filled(commands: Vec<PathCommand>, fill: Color) -> Self {
        Self {
            commands,
            stroke: None,
            stroke_width: 0.0,
            fill: Some(fill),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.is_empty() {
            return Err(ChartError::InvalidData(
                "path primitive must not be empty".to_owned(),
            ));
        }
        if !self.commands.iter().all(|command| command.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        validate_coordinates(&[self.offset_x, self.offset_y], "path offset")?;
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "path stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        validate_coordinates(&[self.x, self.y], "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
