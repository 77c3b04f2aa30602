mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{DEFAULT_PALETTE, Palette};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart geometry and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
