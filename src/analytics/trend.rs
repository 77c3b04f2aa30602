use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// First-to-last change of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// `(last - first) / first * 100`; `None` when undefined.
    pub percent_change: Option<f64>,
}

impl Trend {
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            direction: TrendDirection::Neutral,
            percent_change: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendTuning {
    /// Changes within `±neutral_band_percent` classify as neutral.
    pub neutral_band_percent: f64,
}

impl Default for TrendTuning {
    fn default() -> Self {
        Self {
            neutral_band_percent: 0.5,
        }
    }
}

#[must_use]
pub fn calculate_trend(values: &[f64]) -> Trend {
    calculate_trend_tuned(values, TrendTuning::default())
}

/// Compares the last finite value against the first finite value.
///
/// Fewer than two values, or a first value of zero, give an undefined
/// (neutral) trend.
#[must_use]
pub fn calculate_trend_tuned(values: &[f64], tuning: TrendTuning) -> Trend {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());
    let Some(first) = finite.next() else {
        return Trend::neutral();
    };
    let Some(last) = finite.last() else {
        return Trend::neutral();
    };
    if first == 0.0 {
        return Trend::neutral();
    }

    let percent = (last - first) / first * 100.0;
    let band = tuning.neutral_band_percent.abs();
    let direction = if percent > band {
        TrendDirection::Up
    } else if percent < -band {
        TrendDirection::Down
    } else {
        TrendDirection::Neutral
    };

    Trend {
        direction,
        percent_change: Some(percent),
    }
}
