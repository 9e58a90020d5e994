//! Splitter handles.
//!
//! [`PlainHandle`] is the base separator. [`HighlightHandle`] adds the
//! accent outline drawn while the user is dragging it; the outline is purely
//! cosmetic and never touches the resize math.

use egui::{Painter, PointerButton, Rect, Stroke, StrokeKind};
use tracing::trace;

use crate::theme::Theme;
use crate::traits::{paint_separator, ResizeParticipant};

/// Direction in which a splitter lays out its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Panels left to right, handles are vertical strips
    Horizontal,
    /// Panels top to bottom, handles are horizontal strips
    Vertical,
}

impl Orientation {
    /// Length of `rect` along the layout axis.
    pub fn main_extent(self, rect: Rect) -> f32 {
        match self {
            Orientation::Horizontal => rect.width(),
            Orientation::Vertical => rect.height(),
        }
    }
}

/// Separator with press/release tracking and no extra feedback.
#[derive(Debug, Clone)]
pub struct PlainHandle {
    orientation: Orientation,
    active: bool,
}

impl ResizeParticipant for PlainHandle {
    fn create(orientation: Orientation) -> Self {
        Self {
            orientation,
            active: false,
        }
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn press(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.active = true;
        }
    }

    fn release(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.active = false;
        }
    }

    fn geometry_changed(&mut self) -> bool {
        false
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Separator that outlines itself in the accent color while being dragged.
#[derive(Debug, Clone)]
pub struct HighlightHandle {
    base: PlainHandle,
}

impl HighlightHandle {
    /// Rectangle of the drag outline, present only while active.
    pub fn outline_rect(&self, bounds: Rect) -> Option<Rect> {
        self.base.active.then(|| bounds.shrink(1.0))
    }
}

impl ResizeParticipant for HighlightHandle {
    fn create(orientation: Orientation) -> Self {
        Self {
            base: PlainHandle::create(orientation),
        }
    }

    fn orientation(&self) -> Orientation {
        self.base.orientation
    }

    fn press(&mut self, button: PointerButton) {
        self.base.press(button);
        trace!(active = self.base.active, "handle pressed");
    }

    fn release(&mut self, button: PointerButton) {
        self.base.release(button);
        trace!(active = self.base.active, "handle released");
    }

    fn geometry_changed(&mut self) -> bool {
        self.base.active
    }

    fn is_active(&self) -> bool {
        self.base.active
    }

    fn paint(&self, painter: &Painter, bounds: Rect, hovered: bool, theme: &Theme) {
        paint_separator(painter, bounds, hovered, theme);
        if let Some(outline) = self.outline_rect(bounds) {
            painter.rect_stroke(
                outline,
                0.0,
                Stroke::new(theme.metrics.outline_width, theme.colors.drag_outline),
                StrokeKind::Middle,
            );
        }
    }
}
