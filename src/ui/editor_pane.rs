//! Text editor pane UI component

use crate::app::PatchApp;
use eframe::egui;

/// Show the central text editing pane
pub fn show(ui: &mut egui::Ui, app: &mut PatchApp) {
    match app.editor.display_name() {
        Some(name) => {
            let marker = if app.editor.is_modified() { " \u{25CF}" } else { "" };
            ui.heading(format!("{}{}", name, marker));
        }
        None => {
            ui.heading("Editor");
        }
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(app.editor.buffer_mut())
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Open a game asset text file to edit it here."),
            );
            if response.changed() {
                app.editor.mark_modified();
            }
        });
}
