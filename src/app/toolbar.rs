use eframe::egui;

use super::PatchApp;

/// Actions triggered by the toolbar or keyboard, processed after rendering
/// to avoid borrow conflicts
#[derive(Default)]
pub(super) struct AppActions {
    pub open: bool,
    pub save: bool,
    pub decompile: bool,
    pub recompile: bool,
}

impl PatchApp {
    /// Render the toolbar and return deferred action flags
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) -> AppActions {
        let mut actions = AppActions::default();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Asset pipeline placeholders
                if ui.button("Decompile Assets").clicked() {
                    actions.decompile = true;
                }
                if ui.button("Recompile Assets").clicked() {
                    actions.recompile = true;
                }

                ui.separator();

                // File operations
                if ui.button("Open Game Asset").clicked() {
                    actions.open = true;
                }
                if ui
                    .add_enabled(
                        self.editor.path().is_some() || self.has_unsaved_changes(),
                        egui::Button::new("Save Changes"),
                    )
                    .clicked()
                {
                    actions.save = true;
                }
            });
        });

        actions
    }

    /// Process deferred actions from the toolbar and keyboard shortcuts
    pub(super) fn process_actions(&mut self, actions: AppActions) {
        if actions.open {
            self.open_file_dialog();
        }
        if actions.save {
            self.save_file_dialog();
        }
        if actions.decompile {
            self.dialogs.info(
                "Decompile",
                "Asset decompilation is not implemented yet.",
            );
        }
        if actions.recompile {
            self.dialogs.info(
                "Recompile",
                "Asset recompilation is not implemented yet.",
            );
        }
    }
}
