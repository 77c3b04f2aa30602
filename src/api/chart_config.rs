use serde::{Deserialize, Serialize};

use crate::core::{Padding, XAxisMode};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Palette};

/// Renderer family, resolved once when a frame is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Area,
    Bar,
    Pie,
}

impl ChartKind {
    #[must_use]
    pub fn x_axis_mode(self) -> XAxisMode {
        match self {
            Self::Bar => XAxisMode::Categorical,
            Self::Line | Self::Area | Self::Pie => XAxisMode::Auto,
        }
    }

    /// Whether the kind draws cartesian axes and grid.
    #[must_use]
    pub fn is_cartesian(self) -> bool {
        !matches!(self, Self::Pie)
    }
}

/// Public chart presentation configuration.
///
/// Serializable so hosts can persist chart setup; every field is optional in
/// JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_tooltip: bool,
    pub height: u32,
    pub colors: Palette,
    pub padding: Padding,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            x_axis_label: None,
            y_axis_label: None,
            show_grid: true,
            show_legend: true,
            show_tooltip: true,
            height: 300,
            colors: Palette::default(),
            padding: Padding::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_label = Some(x.into());
        self.y_axis_label = Some(y.into());
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Palette::new(colors);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.height == 0 {
            return Err(ChartError::InvalidConfig(
                "chart height must be > 0".to_owned(),
            ));
        }
        let padding = self.padding;
        for (side, value) in [
            ("top", padding.top),
            ("right", padding.right),
            ("bottom", padding.bottom),
            ("left", padding.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}
