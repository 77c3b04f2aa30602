use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::HitTarget;
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw in field order: lines (grid and axes), rects, paths,
/// circles, then texts. `hit_targets` carry the tooltip payload of every
/// interactive primitive and are never drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub hit_targets: Vec<HitTarget>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            hit_targets: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    /// Pretty JSON snapshot of the whole scene.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render frame: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse render frame json: {e}")))
    }
}
