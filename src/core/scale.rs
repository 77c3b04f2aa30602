use std::fmt;

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::format::format_plain;
use crate::core::{ChartSeries, XValue};
use crate::error::{ChartError, ChartResult};

/// Span substituted for a degenerate (`max == min`) domain.
pub const MIN_DOMAIN_SPAN: f64 = 1.0;

/// Closed numeric interval of domain values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Plain min/max over the finite values, `None` when there are none.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |acc: Option<Self>, value| match acc {
                None => Some(Self {
                    min: value,
                    max: value,
                }),
                Some(domain) => Some(Self {
                    min: domain.min.min(value),
                    max: domain.max.max(value),
                }),
            })
    }

    /// Value domain widened to contain zero, with a non-degenerate span.
    ///
    /// An empty input yields `[0, MIN_DOMAIN_SPAN]`.
    #[must_use]
    pub fn including_zero(values: impl IntoIterator<Item = f64>) -> Self {
        let domain = Self::from_values(values).unwrap_or(Self { min: 0.0, max: 0.0 });
        Self {
            min: domain.min.min(0.0),
            max: domain.max.max(0.0),
        }
        .with_min_span(MIN_DOMAIN_SPAN)
    }

    #[must_use]
    pub fn with_min_span(self, min_span: f64) -> Self {
        if self.max - self.min > 0.0 {
            return self;
        }
        if self.max == 0.0 && self.min == 0.0 {
            return Self {
                min: 0.0,
                max: min_span,
            };
        }
        if self.max <= 0.0 {
            // Keep zero at the top edge for all-negative flat data.
            return Self {
                min: self.min - min_span,
                max: self.max,
            };
        }
        Self {
            min: self.min,
            max: self.max + min_span,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be reversed (`range_start > range_end`), which is how the
/// y axis maps larger values to smaller pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a scale over `domain`, substituting `MIN_DOMAIN_SPAN` when the
    /// domain is degenerate. Never fails for finite input.
    #[must_use]
    pub fn from_domain(domain: ValueDomain, range_start: f64, range_end: f64) -> Self {
        let domain = if domain.min.is_finite() && domain.max.is_finite() {
            domain.with_min_span(MIN_DOMAIN_SPAN)
        } else {
            ValueDomain {
                min: 0.0,
                max: MIN_DOMAIN_SPAN,
            }
        };
        Self {
            domain_start: domain.min,
            domain_end: domain.max,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        // Halved operands keep the span finite for domains near ±f64::MAX.
        let normalized = (value * 0.5 - self.domain_start * 0.5)
            / (self.domain_end * 0.5 - self.domain_start * 0.5);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        lerp(self.domain_start, self.domain_end, normalized)
    }

    /// Evenly spaced domain values from start to end, both inclusive.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.domain_start],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| lerp(self.domain_start, self.domain_end, i as f64 / last))
                    .collect()
            }
        }
    }
}

/// Interpolates without forming `end - start`, which overflows for
/// extreme finite endpoints.
fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Hashable identity of one distinct x value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    Number(OrderedFloat<f64>),
    Label(String),
}

impl From<&XValue> for CategoryKey {
    fn from(value: &XValue) -> Self {
        match value {
            XValue::Number(number) => Self::Number(OrderedFloat(*number)),
            XValue::Category(label) => Self::Label(label.clone()),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => f.write_str(&format_plain(number.0)),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// Ordinal positions over the distinct x values of all series, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    categories: IndexSet<CategoryKey>,
    range_start: f64,
    range_end: f64,
}

impl OrdinalScale {
    #[must_use]
    pub fn from_series(series: &[ChartSeries], range_start: f64, range_end: f64) -> Self {
        let categories = series
            .iter()
            .flat_map(|s| s.finite_points().map(|(_, point)| CategoryKey::from(&point.x)))
            .collect();
        Self {
            categories,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, value: &XValue) -> Option<usize> {
        self.categories.get_index_of(&CategoryKey::from(value))
    }

    /// Pixel of the category at `index`; a lone category sits mid-range.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        let count = self.categories.len();
        if count <= 1 {
            return (self.range_start + self.range_end) * 0.5;
        }
        let step = (self.range_end - self.range_start) / (count - 1) as f64;
        self.range_start + step * index as f64
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.iter()
    }
}

/// Horizontal scale, chosen once per layout from the x values present.
#[derive(Debug, Clone, PartialEq)]
pub enum XScale {
    Linear(LinearScale),
    Ordinal(OrdinalScale),
}

impl XScale {
    /// Pixel for `value`, or `None` when the value is outside this scale's kind
    /// (a label on a numeric scale, or an unknown category).
    #[must_use]
    pub fn domain_to_pixel(&self, value: &XValue) -> Option<f64> {
        match self {
            Self::Linear(scale) => value.as_number().map(|number| scale.domain_to_pixel(number)),
            Self::Ordinal(scale) => scale.index_of(value).map(|index| scale.position(index)),
        }
    }
}
