use tracing::{debug, warn};

use crate::core::{ChartArea, ChartSeries, ScaleLayout, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    HitTarget, HoverPayload, HoverState, InteractionController, TooltipPlacement, TooltipTuning,
};
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfig, ChartKind, RenderStyle};

/// One chart view: series, presentation config, hover state and a backend.
///
/// Frames are rebuilt from scratch on every render; the only retained state is
/// the hover tracked by the interaction controller and the hit targets of the
/// most recent frame.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    config: ChartConfig,
    kind: ChartKind,
    style: RenderStyle,
    series: Vec<ChartSeries>,
    interaction: InteractionController,
    hit_targets: Vec<HitTarget>,
    hit_targets_stale: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine drawing into a `width` x `config.height` canvas.
    pub fn new(renderer: R, width: u32, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(width, config.height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport,
            config,
            kind: ChartKind::default(),
            style: RenderStyle::default(),
            series: Vec::new(),
            interaction: InteractionController::default(),
            hit_targets: Vec::new(),
            hit_targets_stale: true,
        })
    }

    /// Replaces the series list.
    ///
    /// Non-finite points are kept in the input but skipped by every renderer.
    pub fn set_series(&mut self, series: Vec<ChartSeries>) {
        for s in &series {
            let skipped = s.non_finite_count();
            if skipped > 0 {
                warn!(series = %s.name, skipped, "series contains non-finite points");
            }
        }
        debug!(series = series.len(), "chart series replaced");
        self.series = series;
        self.invalidate_hit_targets();
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        if self.kind != kind {
            debug!(?kind, "chart kind changed");
            self.kind = kind;
            self.invalidate_hit_targets();
        }
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.viewport = Viewport::new(self.viewport.width, config.height);
        self.config = config;
        self.invalidate_hit_targets();
        Ok(())
    }

    /// Resizes the canvas width; height always follows the config.
    pub fn set_width(&mut self, width: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, self.config.height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.invalidate_hit_targets();
        Ok(())
    }

    /// Replaces the style; hit radii live here, so targets are rebuilt.
    pub fn set_render_style(&mut self, style: RenderStyle) {
        self.style = style;
        self.invalidate_hit_targets();
    }

    pub fn set_tooltip_tuning(&mut self, tuning: TooltipTuning) {
        self.interaction.set_tooltip_tuning(tuning);
    }

    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn chart_area(&self) -> ChartResult<ChartArea> {
        ChartArea::from_viewport(self.viewport, self.config.padding)
    }

    /// Shared cartesian scales for the current series and kind.
    pub fn scale_layout(&self) -> ChartResult<ScaleLayout> {
        Ok(ScaleLayout::build(
            &self.series,
            self.chart_area()?,
            self.kind.x_axis_mode(),
        ))
    }

    /// Materializes the current chart into a deterministic frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let area = self.chart_area()?;
        let mut frame = RenderFrame::new(self.viewport);

        match self.kind {
            ChartKind::Line | ChartKind::Area => {
                let layout = ScaleLayout::build(&self.series, area, self.kind.x_axis_mode());
                let x_labels = layout.x_labels(&self.series);
                self.append_axis_primitives(&mut frame, &layout, &x_labels);
                self.append_line_series_primitives(&mut frame, &layout);
            }
            ChartKind::Bar => {
                let layout = ScaleLayout::build(&self.series, area, self.kind.x_axis_mode());
                let x_labels = self.append_bar_series_primitives(&mut frame, &layout);
                self.append_axis_primitives(&mut frame, &layout, &x_labels);
            }
            ChartKind::Pie => self.append_pie_primitives(&mut frame, area),
        }
        self.append_title_primitives(&mut frame);
        if self.config.show_legend {
            self.append_legend_primitives(&mut frame);
        }

        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        debug!(
            kind = ?self.kind,
            hit_targets = frame.hit_targets.len(),
            "chart rendered"
        );
        self.hit_targets = frame.hit_targets;
        self.hit_targets_stale = false;
        Ok(())
    }

    /// Hit targets of the most recent frame.
    #[must_use]
    pub fn hit_targets(&self) -> &[HitTarget] {
        &self.hit_targets
    }

    /// Re-runs the hit test at `(x, y)`. Callers re-render when the hovered
    /// primitive changes to pick up pop-out and marker emphasis.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<&HoverState>> {
        if self.hit_targets_stale {
            self.hit_targets = self.build_render_frame()?.hit_targets;
            self.hit_targets_stale = false;
        }
        Ok(self.interaction.on_pointer_move(&self.hit_targets, x, y))
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn hover_state(&self) -> Option<&HoverState> {
        self.interaction.hover()
    }

    /// Tooltip position for the current hover, if tooltips are enabled.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipPlacement> {
        if !self.config.show_tooltip {
            return None;
        }
        self.interaction.tooltip(
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        )
    }

    /// Registers a listener notified with the hovered payload, or `None` when
    /// hover clears.
    pub fn on_hover(&mut self, listener: impl FnMut(Option<&HoverPayload>) + 'static) {
        self.interaction.subscribe(Box::new(listener));
    }

    #[must_use]
    pub(super) fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    fn invalidate_hit_targets(&mut self) {
        self.hit_targets_stale = true;
        if self.interaction.hover().is_some() {
            // Hovered primitive may no longer exist.
            self.interaction.on_pointer_leave();
        }
    }
}
