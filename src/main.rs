//! punch-patch: a desktop shell for browsing and patching game asset text files
//!
//! A file browser pane and a text editor pane behind an animated splash
//! screen. The decompile/recompile pipeline the shell is built around is not
//! implemented yet; those buttons surface placeholder notices.

mod app;
mod browser;
mod editor;
mod io;
mod settings;
mod splash;
mod startup;
mod ui;

use app::PatchApp;
use eframe::NativeOptions;
use settings::AppSettings;
use std::sync::Arc;

fn load_icon() -> Option<egui::IconData> {
    let icon_bytes = std::fs::read(ui::splash_overlay::SPLASH_ASSET).ok()?;
    let image = image::load_from_memory(&icon_bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Load settings for window size
    let settings = AppSettings::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([settings.window_width, settings.window_height])
        .with_min_inner_size([640.0, 480.0])
        .with_drag_and_drop(true);

    if let Some(icon) = load_icon() {
        viewport = viewport.with_icon(Arc::new(icon));
    } else {
        log::warn!("window icon unavailable, continuing without one");
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Punch Patch",
        options,
        Box::new(|cc| Ok(Box::new(PatchApp::new(cc, settings)))),
    )
}
