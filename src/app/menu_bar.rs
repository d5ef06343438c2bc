use eframe::egui;

use super::PatchApp;

/// Returns the platform-appropriate modifier key text for shortcuts
fn modifier_key() -> &'static str {
    if cfg!(target_os = "macos") {
        "\u{2318}"
    } else {
        "Ctrl+"
    }
}

impl PatchApp {
    /// Render the top menu bar
    pub(super) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| self.render_file_menu(ui, ctx));
                ui.menu_button("Help", |ui| self.render_help_menu(ui));
            });
        });
    }

    /// Render the File menu contents
    fn render_file_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mod_str = modifier_key();

        if ui
            .add(egui::Button::new("Open Game Asset...").shortcut_text(format!("{}O", mod_str)))
            .clicked()
        {
            self.open_file_dialog();
            ui.close_menu();
        }
        if ui
            .add_enabled(
                self.editor.path().is_some() || self.has_unsaved_changes(),
                egui::Button::new("Save Changes...").shortcut_text(format!("{}S", mod_str)),
            )
            .clicked()
        {
            self.save_file_dialog();
            ui.close_menu();
        }
        ui.separator();

        // Recent files submenu
        let recent_files = self.settings.recent_files().to_vec();
        let has_recent = !recent_files.is_empty();
        ui.menu_button("Recent Files", |ui| {
            if has_recent {
                for path in &recent_files {
                    let display_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.to_string_lossy().into_owned());

                    if ui
                        .button(&display_name)
                        .on_hover_text(path.to_string_lossy())
                        .clicked()
                    {
                        self.pending_open_path = Some(path.clone());
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("Clear Recent Files").clicked() {
                    self.settings.clear_recent_files();
                    self.settings.save();
                    ui.close_menu();
                }
            } else {
                ui.label("No recent files");
            }
        });

        ui.separator();
        if ui.button("Exit").clicked() {
            if self.has_unsaved_changes() {
                self.dialogs.show_close = true;
            } else {
                self.settings.save();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ui.close_menu();
        }
    }

    /// Render the Help menu contents
    fn render_help_menu(&mut self, ui: &mut egui::Ui) {
        if ui.button("About").clicked() {
            self.dialogs.info(
                "About Punch Patch",
                format!(
                    "Punch Patch v{}\nA shell for browsing and patching game asset text files.",
                    env!("CARGO_PKG_VERSION")
                ),
            );
            ui.close_menu();
        }
    }
}
