//! Drag gesture state machine and transfer payload.
//!
//! A gesture moves through `Idle → Armed → Dragging` and always ends back in
//! `Idle`, either by release ([`GestureEnd`]) or by cancellation. Modelling it
//! as explicit state keeps the UI thread free: egui keeps delivering hover
//! and drop callbacks to other panels while a drag is in flight.

use egui::{PointerButton, Pos2};
use tracing::debug;

/// Ephemeral payload carried by one drag gesture.
///
/// Panel drags carry the source panel's title as text. Drags from outside
/// the application may arrive with no compatible text at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragTransfer {
    text: Option<String>,
}

impl DragTransfer {
    /// Creates a transfer carrying `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    /// Creates a transfer with no text content.
    pub fn without_text() -> Self {
        Self { text: None }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

/// Current phase of a drag gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GesturePhase {
    /// No button held
    #[default]
    Idle,
    /// Primary button pressed, pointer has not yet travelled past the threshold
    Armed { origin: Pos2 },
    /// Drag in flight
    Dragging { origin: Pos2, transfer: DragTransfer },
}

/// How a gesture finished.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEnd {
    /// Release without a prior press
    Idle,
    /// Press and release without crossing the drag threshold
    Click,
    /// A target accepted the transfer
    Dropped(DragTransfer),
    /// The drag ended with no target accepting it
    Cancelled(DragTransfer),
}

/// Per-participant drag gesture tracking.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    phase: GesturePhase,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    /// Returns the drag origin while armed or dragging.
    pub fn origin(&self) -> Option<Pos2> {
        match &self.phase {
            GesturePhase::Idle => None,
            GesturePhase::Armed { origin } | GesturePhase::Dragging { origin, .. } => Some(*origin),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// The drag outline overlay is shown exactly while a drag is in flight.
    pub fn overlay_visible(&self) -> bool {
        self.is_dragging()
    }

    /// Arms the gesture on a primary press. Other buttons are ignored, as is a
    /// press arriving while a drag is already in flight.
    pub fn press(&mut self, button: PointerButton, pos: Pos2) {
        if button != PointerButton::Primary || self.is_dragging() {
            return;
        }
        self.phase = GesturePhase::Armed { origin: pos };
    }

    /// Starts the drag once the pointer has travelled `threshold` (manhattan
    /// distance) from the origin with the primary button still held.
    pub fn pointer_moved(
        &mut self,
        primary_down: bool,
        pos: Pos2,
        threshold: f32,
        text: &str,
    ) -> Option<DragTransfer> {
        let GesturePhase::Armed { origin } = &self.phase else {
            return None;
        };
        let origin = *origin;
        if !primary_down {
            return None;
        }

        let delta = pos - origin;
        if delta.x.abs() + delta.y.abs() < threshold {
            return None;
        }

        let transfer = DragTransfer::with_text(text);
        debug!(payload = text, "drag started");
        self.phase = GesturePhase::Dragging {
            origin,
            transfer: transfer.clone(),
        };
        Some(transfer)
    }

    /// Ends the gesture and returns to `Idle`.
    pub fn release(&mut self, dropped: bool) -> GestureEnd {
        match std::mem::take(&mut self.phase) {
            GesturePhase::Idle => GestureEnd::Idle,
            GesturePhase::Armed { .. } => GestureEnd::Click,
            GesturePhase::Dragging { transfer, .. } if dropped => GestureEnd::Dropped(transfer),
            GesturePhase::Dragging { transfer, .. } => {
                debug!(payload = ?transfer.text(), "drag ended without a drop");
                GestureEnd::Cancelled(transfer)
            }
        }
    }

    /// Aborts the gesture from any phase. Returns true if a drag was in flight.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            debug!("drag cancelled");
        }
        self.phase = GesturePhase::Idle;
        was_dragging
    }
}
