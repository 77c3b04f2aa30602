use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::rgb8(0x3b, 0x82, 0xf6),
    Color::rgb8(0x10, 0xb9, 0x81),
    Color::rgb8(0xf5, 0x9e, 0x0b),
    Color::rgb8(0xef, 0x44, 0x44),
    Color::rgb8(0x8b, 0x5c, 0xf6),
    Color::rgb8(0xec, 0x48, 0x99),
    Color::rgb8(0x06, 0xb6, 0xd4),
    Color::rgb8(0x84, 0xcc, 0x16),
];

/// Ordered color list with deterministic cycling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl Palette {
    /// Builds a palette; an empty list falls back to the default colors.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    pub fn from_hex_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> ChartResult<Self> {
        let colors = tokens
            .into_iter()
            .map(Color::from_hex)
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(colors))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `index`-th series or slice, cycling modulo palette length.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// An explicit series color wins over the palette entry.
    #[must_use]
    pub fn resolve(&self, explicit: Option<Color>, index: usize) -> Color {
        explicit.unwrap_or_else(|| self.color_for(index))
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
