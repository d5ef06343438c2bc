//! Main application state and egui integration

mod dialogs;
mod input;
mod menu_bar;
mod toolbar;

pub use dialogs::{DialogState, MessageDialog, MessageKind};

use crate::browser::DirBrowser;
use crate::editor::EditorPane;
use crate::io::{self, FileError};
use crate::settings::AppSettings;
use crate::splash::SplashScreen;
use crate::startup::StartupSequencer;
use crate::ui::splash_overlay::{self, SplashOverlay};
use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Threshold for detecting window size changes (pixels)
const WINDOW_RESIZE_THRESHOLD: f32 = 1.0;

/// Debounce delay for window resize saves (milliseconds)
const WINDOW_RESIZE_DEBOUNCE_MS: u64 = 500;

/// Main application state for Punch Patch
///
/// Everything the process owns is constructed here and passed through this
/// struct: the splash overlay, its startup sequencer, the browser tree, the
/// editor pane, dialogs, and settings. There are no process-wide singletons.
///
/// Until the startup sequencer reveals the main window, `update` renders
/// only the splash overlay; all panels appear together once the fade-out
/// completes.
pub struct PatchApp {
    /// Splash fade state machine, driven until the overlay closes
    pub splash: SplashScreen,

    /// Launch timeline: fade-in, hold, fade-out, reveal
    sequencer: StartupSequencer,

    /// Texture cache for the splash/logo image
    splash_overlay: SplashOverlay,

    /// File browser pane state (tree root, path entry)
    pub browser: DirBrowser,

    /// Text editor pane state
    pub editor: EditorPane,

    /// Modal dialog state (messages, close confirmation)
    pub dialogs: DialogState,

    /// Application settings (persisted to disk)
    pub settings: AppSettings,

    /// Pending file path to open (for deferred actions from menus)
    pub(super) pending_open_path: Option<PathBuf>,

    /// Last known window size (for change detection)
    last_window_size: Option<egui::Vec2>,

    /// Timer for debouncing window resize saves
    window_resize_timer: Option<Instant>,
}

impl PatchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let root = settings
            .last_directory
            .clone()
            .filter(|p| p.is_dir())
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));

        Self {
            splash: SplashScreen::new(),
            sequencer: StartupSequencer::new(),
            splash_overlay: SplashOverlay::default(),
            browser: DirBrowser::new(root),
            editor: EditorPane::default(),
            dialogs: DialogState::default(),
            settings,
            pending_open_path: None,
            last_window_size: None,
            window_resize_timer: None,
        }
    }

    /// Check if there are unsaved changes
    pub fn has_unsaved_changes(&self) -> bool {
        self.editor.is_modified()
    }

    /// Load a file into the editor, routing failures to the right dialog
    pub fn open_file(&mut self, path: PathBuf) {
        match io::load_text(&path) {
            Ok(content) => {
                self.editor.open(path.clone(), content);
                self.settings.add_recent_file(path);
                self.settings.save();
            }
            Err(FileError::Unsupported { mime }) => {
                log::warn!("rejected {}: {}", path.display(), mime);
                self.dialogs.warning(
                    "Unsupported File Type",
                    format!("This file type is not supported for editing ({}).", mime),
                );
            }
            Err(e @ FileError::Access(_)) => {
                log::error!("failed to open {}: {}", path.display(), e);
                self.dialogs
                    .error("Error", format!("Could not open file: {}", e));
            }
        }
    }

    /// Open file dialog and load the selected file
    pub fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_directory(self.browser.root())
            .pick_file()
        {
            self.open_file(path);
        }
    }

    /// Save dialog, then write the editor's current text to the chosen path
    pub fn save_file_dialog(&mut self) {
        let default_name = self
            .editor
            .display_name()
            .unwrap_or_else(|| "untitled.txt".to_string());

        let Some(path) = rfd::FileDialog::new()
            .set_directory(self.browser.root())
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match io::save_text(&path, self.editor.text()) {
            Ok(()) => {
                self.editor.mark_saved(path.clone());
                self.settings.add_recent_file(path);
                self.settings.save();
            }
            Err(e) => {
                log::error!("failed to save {}: {}", path.display(), e);
                self.dialogs
                    .error("Error", format!("Could not save file: {}", e));
            }
        }
    }

    /// Apply the pasted path from the browser's entry field as the new tree
    /// root, or warn and keep the previous root if it is not a directory
    pub fn change_directory(&mut self) {
        let path = PathBuf::from(self.browser.path_input.trim());
        if self.browser.set_root(path) {
            self.settings.last_directory = Some(self.browser.root().to_path_buf());
            self.settings.save();
        } else {
            self.dialogs.warning(
                "Invalid Path",
                "The directory path you pasted is invalid.",
            );
        }
    }

    /// Show all modal dialogs
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        self.show_message_dialog(ctx);
        self.show_close_dialog(ctx);
    }

    /// Render the status bar
    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Unsaved changes indicator
                if self.has_unsaved_changes() {
                    ui.colored_label(egui::Color32::from_rgb(255, 180, 0), "\u{25CF} Modified");
                    ui.separator();
                }
                if let Some(path) = self.editor.path() {
                    ui.label(format!("File: {}", path.display()));
                    ui.separator();
                    ui.label(format!("{} chars", self.editor.char_count()));
                    ui.separator();
                }
                ui.label(format!("Root: {}", self.browser.root().display()));
            });
        });
    }

    /// Render the file browser side panel
    fn render_browser_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("browser_panel")
            .resizable(true)
            .default_width(250.0)
            .min_width(180.0)
            .show(ctx, |ui| {
                crate::ui::browser_pane::show(ui, self);
            });
    }

    /// Render the central text editor panel
    fn render_editor_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            crate::ui::editor_pane::show(ui, self);
        });
    }
}

impl eframe::App for PatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the splash timeline until the main window is revealed
        if !self.sequencer.is_revealed() {
            let revealed = self.sequencer.advance(&mut self.splash, Instant::now());
            if !revealed {
                splash_overlay::show(ctx, &mut self.splash_overlay, self.splash.opacity());
                ctx.request_repaint();
                return;
            }
        }

        // Handle close confirmation
        if self.dialogs.pending_close {
            self.settings.save();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Track window size changes (debounced save)
        let current_size = ctx.screen_rect().size();
        if let Some(last_size) = self.last_window_size {
            if (current_size.x - last_size.x).abs() > WINDOW_RESIZE_THRESHOLD
                || (current_size.y - last_size.y).abs() > WINDOW_RESIZE_THRESHOLD
            {
                self.window_resize_timer = Some(Instant::now());
                self.last_window_size = Some(current_size);
            }
        } else {
            self.last_window_size = Some(current_size);
        }

        // Save window size after debounce period of no resize activity
        if let Some(timer) = self.window_resize_timer {
            if timer.elapsed() > Duration::from_millis(WINDOW_RESIZE_DEBOUNCE_MS) {
                self.settings.window_width = current_size.x;
                self.settings.window_height = current_size.y;
                self.settings.save();
                self.window_resize_timer = None;
            }
        }

        // Handle deferred file opening from the recent files menu
        if let Some(path) = self.pending_open_path.take() {
            self.open_file(path);
        }

        // Handle input and process actions
        let input_actions = self.handle_input(ctx);
        self.process_actions(input_actions);

        // Render UI components
        self.render_menu_bar(ctx);
        let toolbar_actions = self.render_toolbar(ctx);
        self.process_actions(toolbar_actions);
        self.show_dialogs(ctx);
        self.render_status_bar(ctx);
        self.render_browser_panel(ctx);
        self.render_editor_panel(ctx);
    }
}
