//! Workspace panels.
//!
//! A panel is a titled container: a fixed-height header the user grabs to
//! drag the panel, and a content region below it. Panels are both drag
//! sources and drop targets; dropping one panel on another asks the owning
//! [`Splitter`](crate::splitter::Splitter) to swap them.

use egui::{PointerButton, Pos2};

use crate::drag::{DragGesture, DragTransfer, GestureEnd};
use crate::traits::DragParticipant;

/// Stable identity of a panel, derived from its (unique) title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(egui::Id);

impl PanelId {
    pub fn for_title(title: &str) -> Self {
        Self(egui::Id::new(("tabby_panel", title)))
    }

    /// The egui id used for this panel's widgets.
    pub fn egui_id(&self) -> egui::Id {
        self.0
    }
}

/// What a panel shows below its header.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    /// Editing categories; one entry may be highlighted
    Options { items: Vec<String>, selected: Option<usize> },
    /// Imported media (always empty until an import handler exists)
    MediaLibrary { media: Vec<String> },
    /// Placeholder preview surface plus transport button
    VideoPlayer,
    /// No content
    Empty,
}

impl PanelContent {
    /// The options list shown by the stock Options panel.
    pub fn options() -> Self {
        Self::Options {
            items: ["Video", "Audio", "Video Effects", "AI Features"]
                .into_iter()
                .map(String::from)
                .collect(),
            selected: None,
        }
    }
}

/// A titled, draggable panel.
#[derive(Debug, Clone)]
pub struct Panel {
    id: PanelId,
    title: String,
    content: PanelContent,
    gesture: DragGesture,
}

impl Panel {
    pub fn new(title: impl Into<String>, content: PanelContent) -> Self {
        let title = title.into();
        Self {
            id: PanelId::for_title(&title),
            title,
            content,
            gesture: DragGesture::new(),
        }
    }

    /// A panel with no content, identified only by its title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, PanelContent::Empty)
    }

    pub fn options() -> Self {
        Self::new("Options", PanelContent::options())
    }

    pub fn media_library() -> Self {
        Self::new("Media Library", PanelContent::MediaLibrary { media: Vec::new() })
    }

    pub fn video_player() -> Self {
        Self::new("Video Player", PanelContent::VideoPlayer)
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut PanelContent {
        &mut self.content
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Whether `transfer` originated from this very panel.
    pub fn is_source_of(&self, transfer: &DragTransfer) -> bool {
        transfer.text() == Some(self.title.as_str())
    }
}

impl DragParticipant for Panel {
    fn press(&mut self, button: PointerButton, pos: Pos2) {
        self.gesture.press(button, pos);
    }

    fn pointer_moved(&mut self, primary_down: bool, pos: Pos2, threshold: f32) -> Option<DragTransfer> {
        self.gesture.pointer_moved(primary_down, pos, threshold, &self.title)
    }

    fn release(&mut self, dropped: bool) -> GestureEnd {
        self.gesture.release(dropped)
    }

    fn cancel_drag(&mut self) -> bool {
        self.gesture.cancel()
    }

    fn accepts(&self, transfer: &DragTransfer) -> bool {
        transfer.has_text()
    }

    fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }
}
