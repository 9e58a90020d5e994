//! Splitter container: an ordered row (or column) of panels separated by
//! resize handles.
//!
//! The splitter owns its panels exclusively. Its order is the on-screen
//! order, it always holds exactly one handle per adjacent pair, and its
//! relative sizes are normalized weights that travel with their panel when
//! panels are rearranged.

use egui::{pos2, Rect};
use tracing::{debug, info};

use crate::drag::DragTransfer;
use crate::error::LayoutError;
use crate::handle::{HighlightHandle, Orientation};
use crate::panel::{Panel, PanelId};
use crate::traits::{DragParticipant, ResizeParticipant};

/// Result of dropping a transfer onto a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Source and target exchanged positions (indices before the swap)
    Swapped { source: usize, target: usize },
    /// The panel was dropped onto itself
    SelfDrop,
    /// The payload carried no text
    Rejected,
    /// No panel in this splitter matches the payload
    SourceDetached,
    /// The target is not in this splitter
    UnknownTarget,
}

/// Screen rectangles for one frame of a splitter.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterLayout {
    pub panels: Vec<Rect>,
    pub handles: Vec<Rect>,
}

/// Ordered panel container with resize handles of type `H`.
#[derive(Debug, Clone)]
pub struct Splitter<H: ResizeParticipant = HighlightHandle> {
    orientation: Orientation,
    panels: Vec<Panel>,
    handles: Vec<H>,
    /// Normalized weights, parallel to `panels`
    sizes: Vec<f32>,
}

impl<H: ResizeParticipant> Splitter<H> {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            panels: Vec::new(),
            handles: Vec::new(),
            sizes: Vec::new(),
        }
    }

    // ===== Queries =====

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [Panel] {
        &mut self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    pub fn handle_mut(&mut self, index: usize) -> Option<&mut H> {
        self.handles.get_mut(index)
    }

    /// Panel titles in on-screen order.
    pub fn titles(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.title()).collect()
    }

    pub fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id() == id)
    }

    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.title() == title)
    }

    /// Normalized relative sizes, parallel to [`panels`](Self::panels).
    pub fn relative_sizes(&self) -> &[f32] {
        &self.sizes
    }

    // ===== Panel sequence =====

    /// Adds a panel after the last one.
    pub fn append(&mut self, panel: Panel) -> Result<PanelId, LayoutError> {
        self.insert_at(self.panels.len(), panel)
    }

    /// Inserts a new panel at `index` (0..=len).
    ///
    /// The newcomer receives the mean weight of the existing panels, then all
    /// weights are renormalized, so every existing panel shrinks by the same
    /// factor. Their ratios to each other are kept.
    pub fn insert_at(&mut self, index: usize, panel: Panel) -> Result<PanelId, LayoutError> {
        if index > self.panels.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.panels.len(),
            });
        }
        if self.index_of_title(panel.title()).is_some() {
            return Err(LayoutError::DuplicateTitle(panel.title().to_string()));
        }

        let weight = if self.sizes.is_empty() {
            1.0
        } else {
            self.sizes.iter().sum::<f32>() / self.sizes.len() as f32
        };

        let id = panel.id();
        debug!(title = panel.title(), index, "panel inserted");
        self.panels.insert(index, panel);
        self.sizes.insert(index, weight);
        self.normalize_sizes();
        self.sync_handles();
        Ok(id)
    }

    /// Moves an existing panel so it sits at `index`.
    ///
    /// The panel is taken out first and `index` refers to the shortened
    /// sequence; an index past the end places the panel last. Its weight
    /// moves with it.
    pub fn move_to(&mut self, id: PanelId, index: usize) -> Result<(), LayoutError> {
        let from = self.index_of(id).ok_or(LayoutError::UnknownPanel(id))?;
        let panel = self.panels.remove(from);
        let weight = self.sizes.remove(from);

        let to = index.min(self.panels.len());
        self.panels.insert(to, panel);
        self.sizes.insert(to, weight);
        Ok(())
    }

    /// Exchanges the positions of two panels; everything between them stays put.
    pub fn swap_panels(&mut self, source: PanelId, target: PanelId) -> Result<(), LayoutError> {
        let si = self.index_of(source).ok_or(LayoutError::UnknownPanel(source))?;
        let ti = self.index_of(target).ok_or(LayoutError::UnknownPanel(target))?;

        if si < ti {
            self.move_to(source, ti)?;
            self.move_to(target, si)?;
        } else if si > ti {
            self.move_to(target, si)?;
            self.move_to(source, ti)?;
        }
        Ok(())
    }

    /// Applies a drop of `transfer` onto the panel `target`.
    ///
    /// Payloads without text, self-drops and payloads whose source is not in
    /// this splitter are ignored; only a valid drop changes the order.
    pub fn drop_onto(&mut self, target: PanelId, transfer: &DragTransfer) -> DropOutcome {
        let Some(ti) = self.index_of(target) else {
            return DropOutcome::UnknownTarget;
        };
        if !self.panels[ti].accepts(transfer) {
            return DropOutcome::Rejected;
        }
        if self.panels[ti].is_source_of(transfer) {
            return DropOutcome::SelfDrop;
        }
        let Some(si) = transfer.text().and_then(|title| self.index_of_title(title)) else {
            return DropOutcome::SourceDetached;
        };

        let source = self.panels[si].id();
        if self.swap_panels(source, target).is_err() {
            return DropOutcome::SourceDetached;
        }

        info!(order = ?self.titles(), "panels swapped");
        DropOutcome::Swapped { source: si, target: ti }
    }

    // ===== Sizing =====

    /// Replaces the relative sizes with `sizes`, one weight per panel.
    pub fn set_relative_sizes(&mut self, sizes: &[f32]) -> Result<(), LayoutError> {
        if sizes.len() != self.panels.len() {
            return Err(LayoutError::SizeCountMismatch {
                expected: self.panels.len(),
                actual: sizes.len(),
            });
        }
        let total: f32 = sizes.iter().sum();
        if sizes.iter().any(|s| !s.is_finite() || *s < 0.0) || !(total > 0.0) {
            return Err(LayoutError::InvalidSizes);
        }

        self.sizes = sizes.iter().map(|s| s / total).collect();
        debug!(sizes = ?self.sizes, "relative sizes set");
        Ok(())
    }

    /// Panel extents along the layout axis for a container `total_extent`
    /// long. The extents sum to the space left after the handle strips.
    pub fn extents(&self, total_extent: f32, handle_width: f32) -> Vec<f32> {
        let available = self.available_extent(total_extent, handle_width);
        self.sizes.iter().map(|s| s * available).collect()
    }

    /// Computes panel and handle rectangles inside `rect`.
    pub fn layout(&self, rect: Rect, handle_width: f32) -> SplitterLayout {
        let extents = self.extents(self.orientation.main_extent(rect), handle_width);
        let mut panels = Vec::with_capacity(extents.len());
        let mut handles = Vec::with_capacity(self.handles.len());

        let mut cursor = match self.orientation {
            Orientation::Horizontal => rect.min.x,
            Orientation::Vertical => rect.min.y,
        };
        let span = |start: f32, len: f32| match self.orientation {
            Orientation::Horizontal => {
                Rect::from_min_max(pos2(start, rect.min.y), pos2(start + len, rect.max.y))
            }
            Orientation::Vertical => {
                Rect::from_min_max(pos2(rect.min.x, start), pos2(rect.max.x, start + len))
            }
        };

        for (i, extent) in extents.iter().enumerate() {
            panels.push(span(cursor, *extent));
            cursor += extent;
            if i < self.handles.len() {
                handles.push(span(cursor, handle_width));
                cursor += handle_width;
            }
        }

        SplitterLayout { panels, handles }
    }

    /// Moves the boundary at handle `index` by `delta` pixels.
    ///
    /// Only the two panels adjacent to the handle change; neither shrinks
    /// below `min_extent` (or half their combined extent, if smaller).
    pub fn drag_handle(
        &mut self,
        index: usize,
        delta: f32,
        total_extent: f32,
        handle_width: f32,
        min_extent: f32,
    ) -> Result<(), LayoutError> {
        if index >= self.handles.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.handles.len(),
            });
        }
        let available = self.available_extent(total_extent, handle_width);
        if available <= 0.0 || delta == 0.0 {
            return Ok(());
        }

        let before = self.sizes[index] * available;
        let after = self.sizes[index + 1] * available;
        let pair = before + after;
        let floor = min_extent.min(pair / 2.0);

        let new_before = (before + delta).clamp(floor, pair - floor);
        self.sizes[index] = new_before / available;
        self.sizes[index + 1] = (pair - new_before) / available;
        Ok(())
    }

    // ===== Interaction cleanup =====

    /// Aborts every panel drag and releases every handle.
    ///
    /// Returns true if any drag or resize was in progress.
    pub fn cancel_interactions(&mut self) -> bool {
        let mut interrupted = false;
        for panel in &mut self.panels {
            interrupted |= panel.cancel_drag();
        }
        for handle in &mut self.handles {
            interrupted |= handle.is_active();
            handle.release(egui::PointerButton::Primary);
        }
        interrupted
    }

    fn available_extent(&self, total_extent: f32, handle_width: f32) -> f32 {
        (total_extent - handle_width * self.handles.len() as f32).max(0.0)
    }

    fn normalize_sizes(&mut self) {
        let total: f32 = self.sizes.iter().sum();
        if total > 0.0 {
            for s in &mut self.sizes {
                *s /= total;
            }
        } else if !self.sizes.is_empty() {
            let share = 1.0 / self.sizes.len() as f32;
            self.sizes.iter_mut().for_each(|s| *s = share);
        }
    }

    fn sync_handles(&mut self) {
        let wanted = self.panels.len().saturating_sub(1);
        while self.handles.len() < wanted {
            self.handles.push(H::create(self.orientation));
        }
        self.handles.truncate(wanted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::PlainHandle;

    fn splitter(titles: &[&str]) -> Splitter {
        let mut splitter = Splitter::new(Orientation::Horizontal);
        for title in titles {
            splitter.append(Panel::titled(*title)).unwrap();
        }
        splitter
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_handle_count_tracks_panels() {
        let mut s: Splitter = Splitter::new(Orientation::Horizontal);
        assert_eq!(s.handles().len(), 0);
        s.append(Panel::titled("A")).unwrap();
        assert_eq!(s.handles().len(), 0);
        s.append(Panel::titled("B")).unwrap();
        s.append(Panel::titled("C")).unwrap();
        assert_eq!(s.handles().len(), 2);
        assert!(s.handles().iter().all(|h| h.orientation() == Orientation::Horizontal));
    }

    #[test]
    fn test_custom_handle_type() {
        let mut s: Splitter<PlainHandle> = Splitter::new(Orientation::Vertical);
        s.append(Panel::titled("A")).unwrap();
        s.append(Panel::titled("B")).unwrap();
        assert_eq!(s.handles().len(), 1);
        assert_eq!(s.handles()[0].orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_insert_at_and_index_of() {
        let mut s = splitter(&["A", "C"]);
        let b = s.insert_at(1, Panel::titled("B")).unwrap();
        assert_eq!(s.titles(), vec!["A", "B", "C"]);
        assert_eq!(s.index_of(b), Some(1));
        assert_eq!(s.index_of(PanelId::for_title("missing")), None);

        let err = s.insert_at(9, Panel::titled("D")).unwrap_err();
        assert_eq!(err, LayoutError::IndexOutOfRange { index: 9, len: 3 });
    }

    #[test]
    fn test_insert_rescales_existing_weights() {
        let mut s = splitter(&["A", "B"]);
        s.set_relative_sizes(&[1.0, 3.0]).unwrap();
        s.insert_at(1, Panel::titled("C")).unwrap();

        // Newcomer weight is the mean (0.5) before renormalizing over 1.5
        let sizes = s.relative_sizes();
        assert!(approx(sizes[0], 0.25 / 1.5));
        assert!(approx(sizes[1], 0.5 / 1.5));
        assert!(approx(sizes[2], 0.75 / 1.5));
        assert!(approx(sizes[2] / sizes[0], 3.0));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let mut s = splitter(&["A"]);
        let err = s.append(Panel::titled("A")).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateTitle("A".to_string()));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_move_to_clamps_to_end() {
        let mut s = splitter(&["A", "B", "C"]);
        s.move_to(PanelId::for_title("A"), 10).unwrap();
        assert_eq!(s.titles(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_swap_adjacent_both_directions() {
        let mut s = splitter(&["A", "B"]);
        s.swap_panels(PanelId::for_title("A"), PanelId::for_title("B")).unwrap();
        assert_eq!(s.titles(), vec!["B", "A"]);
        s.swap_panels(PanelId::for_title("B"), PanelId::for_title("A")).unwrap();
        assert_eq!(s.titles(), vec!["A", "B"]);
    }

    #[test]
    fn test_drop_outcomes() {
        let mut s = splitter(&["A", "B", "C"]);
        let a = PanelId::for_title("A");

        assert_eq!(s.drop_onto(a, &DragTransfer::without_text()), DropOutcome::Rejected);
        assert_eq!(s.drop_onto(a, &DragTransfer::with_text("A")), DropOutcome::SelfDrop);
        assert_eq!(s.drop_onto(a, &DragTransfer::with_text("Z")), DropOutcome::SourceDetached);
        assert_eq!(
            s.drop_onto(PanelId::for_title("Z"), &DragTransfer::with_text("A")),
            DropOutcome::UnknownTarget
        );
        assert_eq!(s.titles(), vec!["A", "B", "C"]);

        assert_eq!(
            s.drop_onto(a, &DragTransfer::with_text("C")),
            DropOutcome::Swapped { source: 2, target: 0 }
        );
        assert_eq!(s.titles(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_sizes_follow_panels() {
        let mut s = splitter(&["A", "B", "C"]);
        s.set_relative_sizes(&[1.0, 3.0, 6.0]).unwrap();
        s.drop_onto(PanelId::for_title("C"), &DragTransfer::with_text("A"));
        let sizes = s.relative_sizes();
        assert!(approx(sizes[0], 0.6));
        assert!(approx(sizes[1], 0.3));
        assert!(approx(sizes[2], 0.1));
    }

    #[test]
    fn test_set_relative_sizes_validation() {
        let mut s = splitter(&["A", "B"]);
        assert_eq!(
            s.set_relative_sizes(&[1.0]),
            Err(LayoutError::SizeCountMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(s.set_relative_sizes(&[0.0, 0.0]), Err(LayoutError::InvalidSizes));
        assert_eq!(s.set_relative_sizes(&[-1.0, 2.0]), Err(LayoutError::InvalidSizes));
        assert_eq!(s.set_relative_sizes(&[f32::NAN, 2.0]), Err(LayoutError::InvalidSizes));
    }

    #[test]
    fn test_extents_fill_available_space() {
        let mut s = splitter(&["A", "B", "C"]);
        s.set_relative_sizes(&[100.0, 300.0, 600.0]).unwrap();
        let extents = s.extents(1010.0, 5.0);
        assert!(approx(extents[0], 100.0));
        assert!(approx(extents[1], 300.0));
        assert!(approx(extents[2], 600.0));
        assert!(approx(extents.iter().sum::<f32>(), 1000.0));
    }

    #[test]
    fn test_layout_interleaves_handles() {
        let mut s = splitter(&["A", "B"]);
        s.set_relative_sizes(&[1.0, 1.0]).unwrap();
        let rect = Rect::from_min_max(pos2(0.0, 10.0), pos2(105.0, 60.0));
        let layout = s.layout(rect, 5.0);

        assert_eq!(layout.panels.len(), 2);
        assert_eq!(layout.handles.len(), 1);
        assert_eq!(layout.panels[0], Rect::from_min_max(pos2(0.0, 10.0), pos2(50.0, 60.0)));
        assert_eq!(layout.handles[0], Rect::from_min_max(pos2(50.0, 10.0), pos2(55.0, 60.0)));
        assert_eq!(layout.panels[1], Rect::from_min_max(pos2(55.0, 10.0), pos2(105.0, 60.0)));
    }

    #[test]
    fn test_vertical_layout() {
        let mut s: Splitter = Splitter::new(Orientation::Vertical);
        s.append(Panel::titled("Top")).unwrap();
        s.append(Panel::titled("Bottom")).unwrap();
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(40.0, 205.0));
        let layout = s.layout(rect, 5.0);
        assert_eq!(layout.panels[0].height(), 100.0);
        assert_eq!(layout.handles[0].min.y, 100.0);
        assert_eq!(layout.panels[1].min.y, 105.0);
    }

    #[test]
    fn test_drag_handle_moves_only_neighbours() {
        let mut s = splitter(&["A", "B", "C"]);
        s.set_relative_sizes(&[100.0, 300.0, 600.0]).unwrap();
        s.drag_handle(0, 50.0, 1010.0, 5.0, 20.0).unwrap();

        let extents = s.extents(1010.0, 5.0);
        assert!(approx(extents[0], 150.0));
        assert!(approx(extents[1], 250.0));
        assert!(approx(extents[2], 600.0));
    }

    #[test]
    fn test_drag_handle_clamps_to_min_extent() {
        let mut s = splitter(&["A", "B"]);
        s.set_relative_sizes(&[1.0, 1.0]).unwrap();
        s.drag_handle(0, -1000.0, 205.0, 5.0, 30.0).unwrap();

        let extents = s.extents(205.0, 5.0);
        assert!(approx(extents[0], 30.0));
        assert!(approx(extents[1], 170.0));
        assert!(s.drag_handle(1, 10.0, 205.0, 5.0, 30.0).is_err());
    }

    #[test]
    fn test_cancel_interactions_clears_everything() {
        let mut s = splitter(&["A", "B"]);
        s.handle_mut(0).unwrap().press(egui::PointerButton::Primary);
        let a = s.panel_mut(PanelId::for_title("A")).unwrap();
        a.press(egui::PointerButton::Primary, pos2(0.0, 0.0));
        a.pointer_moved(true, pos2(50.0, 0.0), 10.0);

        assert!(s.cancel_interactions());
        assert!(!s.handles()[0].is_active());
        assert!(s.panels().iter().all(|p| !p.is_dragging()));
        assert!(!s.cancel_interactions());
    }
}
