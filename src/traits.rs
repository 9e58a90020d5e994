//! Capability traits for workspace participants.
//!
//! Panels and splitter handles are not widgets in a class hierarchy; each one
//! implements the small capability set it takes part in:
//!
//! - [`DragParticipant`]: can start a drag gesture and accept drops (panels)
//! - [`ResizeParticipant`]: sits between two panels and tracks resize drags (handles)
//!
//! Both are driven from the single UI thread by the egui frame loop; none of
//! the methods block.

use egui::{Painter, PointerButton, Pos2, Rect};

use crate::drag::{DragTransfer, GestureEnd};
use crate::handle::Orientation;
use crate::theme::Theme;

/// Something that can be dragged to another participant and receive drops.
pub trait DragParticipant {
    /// Records the press position as the drag origin (primary button only).
    fn press(&mut self, button: PointerButton, pos: Pos2);

    /// Feeds a pointer move into the gesture.
    ///
    /// Returns the transfer payload on the move that starts the drag, i.e.
    /// the first move past `threshold` while the primary button is held.
    fn pointer_moved(&mut self, primary_down: bool, pos: Pos2, threshold: f32) -> Option<DragTransfer>;

    /// Ends the gesture on pointer release. `dropped` tells whether a target
    /// accepted the transfer during this release.
    fn release(&mut self, dropped: bool) -> GestureEnd;

    /// Aborts an in-flight gesture (focus loss, Escape). Returns true if a
    /// drag was actually in progress.
    fn cancel_drag(&mut self) -> bool;

    /// Whether an incoming transfer may be dropped here.
    fn accepts(&self, transfer: &DragTransfer) -> bool;

    /// Whether this participant is the source of an active drag.
    fn is_dragging(&self) -> bool;
}

/// A strip between two adjacent panels that the user drags to resize them.
///
/// The splitter creates one handle per adjacent pair through [`create`], so a
/// custom handle type attaches its behaviour to every handle of the splitter.
///
/// [`create`]: ResizeParticipant::create
pub trait ResizeParticipant {
    /// Builds a handle for a splitter laid out in `orientation`.
    fn create(orientation: Orientation) -> Self
    where
        Self: Sized;

    fn orientation(&self) -> Orientation;

    fn press(&mut self, button: PointerButton);

    fn release(&mut self, button: PointerButton);

    /// Called whenever the handle's geometry moves. Returns true when the
    /// handle wants a repaint.
    fn geometry_changed(&mut self) -> bool;

    /// Whether a resize drag is in progress on this handle.
    fn is_active(&self) -> bool;

    /// Paints the handle. The default draws the plain separator.
    fn paint(&self, painter: &Painter, bounds: Rect, hovered: bool, theme: &Theme) {
        paint_separator(painter, bounds, hovered, theme);
    }
}

/// Base separator drawing shared by all handle types.
pub fn paint_separator(painter: &Painter, bounds: Rect, hovered: bool, theme: &Theme) {
    let fill = if hovered {
        theme.colors.handle_hover
    } else {
        theme.colors.handle
    };
    painter.rect_filled(bounds, 0.0, fill);
}
