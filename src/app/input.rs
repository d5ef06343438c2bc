use eframe::egui;

use super::toolbar::AppActions;
use super::PatchApp;

impl PatchApp {
    /// Handle dropped files and keyboard shortcuts.
    /// Returns flags for deferred actions.
    pub(super) fn handle_input(&mut self, ctx: &egui::Context) -> AppActions {
        let mut actions = AppActions::default();

        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    self.pending_open_path = Some(path.clone());
                }
            }

            // Global keyboard shortcuts
            let ctrl = i.modifiers.ctrl || i.modifiers.mac_cmd;
            if ctrl && i.key_pressed(egui::Key::O) {
                actions.open = true;
            }
            if ctrl && i.key_pressed(egui::Key::S) {
                actions.save = true;
            }
        });

        // Close request with unsaved changes routes through the confirmation
        if ctx.input(|i| i.viewport().close_requested()) && self.has_unsaved_changes() {
            if !self.dialogs.pending_close {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.dialogs.show_close = true;
            }
        }

        actions
    }
}
