use eframe::egui;

use super::PatchApp;

/// Severity of a modal message dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// A single modal message awaiting dismissal
#[derive(Debug, Clone)]
pub struct MessageDialog {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

/// State for the message dialog and close confirmation
#[derive(Default)]
pub struct DialogState {
    /// Currently displayed message, if any. One at a time; a new message
    /// replaces the previous one.
    pub message: Option<MessageDialog>,
    /// Whether the close confirmation dialog is showing
    pub show_close: bool,
    /// Pending close action (true = confirmed close)
    pub pending_close: bool,
}

impl DialogState {
    pub fn info(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: MessageKind::Info,
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn warning(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: MessageKind::Warning,
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: MessageKind::Error,
            title: title.into(),
            body: body.into(),
        });
    }
}

impl PatchApp {
    /// Show the current message dialog, if any, and handle dismissal
    pub(super) fn show_message_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.dialogs.message.clone() else {
            return;
        };

        let mut dismissed = false;

        egui::Window::new(&message.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (glyph, color) = match message.kind {
                        MessageKind::Info => ("\u{2139}", egui::Color32::LIGHT_BLUE),
                        MessageKind::Warning => ("\u{26A0}", egui::Color32::YELLOW),
                        MessageKind::Error => ("\u{2716}", egui::Color32::RED),
                    };
                    ui.label(egui::RichText::new(glyph).size(32.0).color(color));
                    ui.label(&message.body);
                });

                ui.add_space(10.0);

                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dialogs.message = None;
        }
    }

    /// Show the close confirmation dialog
    pub(super) fn show_close_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialogs.show_close {
            return;
        }

        egui::Window::new("Unsaved Changes")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("You have unsaved changes. Are you sure you want to exit?");
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Save First").clicked() {
                        self.save_file_dialog();
                        self.dialogs.show_close = false;
                    }
                    if ui.button("Discard & Exit").clicked() {
                        self.dialogs.pending_close = true;
                        self.dialogs.show_close = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.dialogs.show_close = false;
                    }
                });
            });
    }
}
