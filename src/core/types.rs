use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::format::format_plain;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Horizontal domain value: either a continuous number or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Category(String),
}

impl XValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Category(_) => None,
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_plain(*value)),
            Self::Category(label) => f.write_str(label),
        }
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for XValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_owned())
    }
}

impl From<String> for XValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self {
            x: x.into(),
            y,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// A point is drawable when both of its numeric coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.y.is_finite() && self.x.as_number().is_none_or(f64::is_finite)
    }

    /// Text shown for this point in tooltips: the explicit label, or `"{x}: {y}"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}: {}", self.x, format_plain(self.y)),
        }
    }
}

/// Line renderer variant tag carried by a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Line,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, rename = "type")]
    pub kind: SeriesKind,
}

impl ChartSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
            kind: SeriesKind::Line,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        self.kind = kind;
        self
    }

    /// Iterates drawable points together with their original index.
    pub fn finite_points(&self) -> impl Iterator<Item = (usize, &DataPoint)> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.is_finite())
    }

    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.points.iter().filter(|point| !point.is_finite()).count()
    }
}
