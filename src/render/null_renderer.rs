use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before it
/// reaches a real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_path_count = frame.paths.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.render_count += 1;
        Ok(())
    }
}
