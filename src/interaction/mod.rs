//! Hover hit-testing and tooltip state.
//!
//! Renderers attach a [`HitTarget`] to every interactive primitive. Hit tests
//! are recomputed from scratch on each pointer move; the only retained state
//! is the current [`HoverState`], owned by one [`InteractionController`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::normalize_pie_angle;
use crate::render::Color;

/// Tooltip payload carried by an interactive primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    pub series_name: String,
    pub label: String,
    pub value: f64,
    pub color: Color,
}

/// Which kind of primitive a hit target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Marker,
    Bar,
    Slice,
}

/// Stable identity of an interactive primitive within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveRef {
    pub kind: PrimitiveKind,
    pub series_index: usize,
    pub point_index: usize,
}

/// Pointer-sensitive region of a primitive, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitShape {
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Sector {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        match self {
            Self::Circle { cx, cy, radius } => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= radius * radius
            }
            Self::Rect {
                x,
                y,
                width,
                height,
            } => px >= x && px <= x + width && py >= y && py <= y + height,
            Self::Sector {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
            } => {
                let (dx, dy) = (px - cx, py - cy);
                if dx * dx + dy * dy > radius * radius {
                    return false;
                }
                let angle = normalize_pie_angle(dy.atan2(dx));
                angle >= start_angle && angle < end_angle
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitTarget {
    pub primitive: PrimitiveRef,
    pub shape: HitShape,
    /// Pixel the tooltip is anchored to.
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub payload: HoverPayload,
}

/// Ephemeral hover state: pointer position plus the hovered primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub primitive: PrimitiveRef,
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub payload: HoverPayload,
}

/// Pure hit test; later targets are drawn on top and win.
#[must_use]
pub fn hit_test(targets: &[HitTarget], x: f64, y: f64) -> Option<HoverState> {
    targets
        .iter()
        .rev()
        .find(|target| target.shape.contains(x, y))
        .map(|target| HoverState {
            primitive: target.primitive,
            pointer_x: x,
            pointer_y: y,
            anchor_x: target.anchor_x,
            anchor_y: target.anchor_y,
            payload: target.payload.clone(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipTuning {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Tooltip stays within this many pixels of the cursor on each axis.
    pub max_cursor_distance: f64,
}

impl Default for TooltipTuning {
    fn default() -> Self {
        Self {
            offset_x: 12.0,
            offset_y: -12.0,
            max_cursor_distance: 48.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub x: f64,
    pub y: f64,
}

/// Anchor plus fixed offset, clamped near the cursor and inside the canvas.
#[must_use]
pub fn place_tooltip(
    hover: &HoverState,
    tuning: TooltipTuning,
    canvas_width: f64,
    canvas_height: f64,
) -> TooltipPlacement {
    let reach = tuning.max_cursor_distance.max(0.0);
    let x = (hover.anchor_x + tuning.offset_x)
        .clamp(hover.pointer_x - reach, hover.pointer_x + reach)
        .clamp(0.0, canvas_width.max(0.0));
    let y = (hover.anchor_y + tuning.offset_y)
        .clamp(hover.pointer_y - reach, hover.pointer_y + reach)
        .clamp(0.0, canvas_height.max(0.0));
    TooltipPlacement { x, y }
}

/// Listener invoked whenever the hovered primitive changes.
pub type HoverCallback = Box<dyn FnMut(Option<&HoverPayload>)>;

/// Owns the pointer position and current hover state for one chart view.
#[derive(Default)]
pub struct InteractionController {
    pointer: Option<(f64, f64)>,
    hover: Option<HoverState>,
    tooltip_tuning: TooltipTuning,
    listeners: Vec<HoverCallback>,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("pointer", &self.pointer)
            .field("hover", &self.hover)
            .field("tooltip_tuning", &self.tooltip_tuning)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl InteractionController {
    #[must_use]
    pub fn new(tooltip_tuning: TooltipTuning) -> Self {
        Self {
            tooltip_tuning,
            ..Self::default()
        }
    }

    pub fn subscribe(&mut self, listener: HoverCallback) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    #[must_use]
    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    #[must_use]
    pub fn hovered_primitive(&self) -> Option<PrimitiveRef> {
        self.hover.as_ref().map(|hover| hover.primitive)
    }

    #[must_use]
    pub fn tooltip_tuning(&self) -> TooltipTuning {
        self.tooltip_tuning
    }

    pub fn set_tooltip_tuning(&mut self, tuning: TooltipTuning) {
        self.tooltip_tuning = tuning;
    }

    #[must_use]
    pub fn tooltip(&self, canvas_width: f64, canvas_height: f64) -> Option<TooltipPlacement> {
        self.hover
            .as_ref()
            .map(|hover| place_tooltip(hover, self.tooltip_tuning, canvas_width, canvas_height))
    }

    /// Re-runs the hit test against `targets` and notifies listeners when the
    /// hovered primitive changes.
    pub fn on_pointer_move(
        &mut self,
        targets: &[HitTarget],
        x: f64,
        y: f64,
    ) -> Option<&HoverState> {
        self.pointer = Some((x, y));
        let next = hit_test(targets, x, y);
        let changed =
            next.as_ref().map(|h| h.primitive) != self.hover.as_ref().map(|h| h.primitive);
        self.hover = next;

        if changed {
            trace!(
                hovered = ?self.hover.as_ref().map(|h| h.primitive),
                "hover target changed"
            );
            self.notify();
        }
        self.hover.as_ref()
    }

    /// Clears hover immediately.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        if self.hover.take().is_some() {
            trace!("hover cleared on pointer leave");
            self.notify();
        }
    }

    fn notify(&mut self) {
        let payload = self.hover.as_ref().map(|hover| &hover.payload);
        for listener in &mut self.listeners {
            listener(payload);
        }
    }
}
