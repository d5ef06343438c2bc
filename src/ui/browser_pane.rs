//! File browser pane: path entry plus a lazily enumerated directory tree

use crate::app::PatchApp;
use crate::browser::DirBrowser;
use eframe::egui;
use std::path::{Path, PathBuf};

/// Show the browser pane: the path entry field on top, the tree below.
/// A clicked file is routed through the app's open path (with its MIME
/// classification and error dialogs).
pub fn show(ui: &mut egui::Ui, app: &mut PatchApp) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut app.browser.path_input)
            .hint_text("Paste directory path here...")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        app.change_directory();
    }

    ui.separator();

    let root = app.browser.root().to_path_buf();
    let mut clicked: Option<PathBuf> = None;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            show_dir(ui, &root, &mut clicked);
        });

    if let Some(path) = clicked {
        app.open_file(path);
    }
}

/// Render one directory level. Collapsed subtrees are not enumerated.
fn show_dir(ui: &mut egui::Ui, path: &Path, clicked: &mut Option<PathBuf>) {
    for entry in DirBrowser::list(path) {
        if entry.is_dir {
            egui::CollapsingHeader::new(&entry.name)
                .id_salt(&entry.path)
                .show(ui, |ui| {
                    show_dir(ui, &entry.path, clicked);
                });
        } else if ui.selectable_label(false, &entry.name).clicked() {
            *clicked = Some(entry.path.clone());
        }
    }
}
