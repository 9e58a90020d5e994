//! Menu bar UI rendering
//!
//! Draws the declared File / Edit / Help menus. Selecting an entry only
//! reports the action; routing happens in the coordinator.

use eframe::egui;
use tabby::{ActionId, MenuBar};

/// Renders the menu bar and returns the entry selected this frame, if any.
pub fn render_menu_bar(ui: &mut egui::Ui, menu: &MenuBar) -> Option<ActionId> {
    let mut selected = None;

    egui::MenuBar::new().ui(ui, |ui| {
        for entry in menu.menus() {
            ui.menu_button(entry.title, |ui| {
                for action in &entry.actions {
                    if ui.button(action.label()).clicked() {
                        selected = Some(*action);
                    }
                }
            });
        }
    });

    selected
}
