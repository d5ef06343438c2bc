//! Splash overlay rendering
//!
//! Paints the logo centered on a dark fill, tinted by the current fade
//! opacity. The fade state itself lives in [`crate::splash`]; this module
//! only uploads the texture and draws.

use eframe::egui;

/// Relative path the logo is loaded from at runtime
pub const SPLASH_ASSET: &str = "assets/logo.png";

/// Texture cache for the splash image
#[derive(Default)]
pub struct SplashOverlay {
    texture: Option<egui::TextureHandle>,
    load_attempted: bool,
}

/// Decode the logo from disk, or `None` if it is missing or undecodable
fn load_logo() -> Option<egui::ColorImage> {
    let bytes = match std::fs::read(SPLASH_ASSET) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("splash image {} unavailable: {}", SPLASH_ASSET, e);
            return None;
        }
    };
    let image = match image::load_from_memory(&bytes) {
        Ok(image) => image.into_rgba8(),
        Err(e) => {
            log::warn!("could not decode {}: {}", SPLASH_ASSET, e);
            return None;
        }
    };
    let size = [image.width() as usize, image.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, &image.into_raw()))
}

/// Paint the splash overlay at the given opacity
pub fn show(ctx: &egui::Context, overlay: &mut SplashOverlay, opacity: f32) {
    if overlay.texture.is_none() && !overlay.load_attempted {
        overlay.load_attempted = true;
        if let Some(logo) = load_logo() {
            overlay.texture =
                Some(ctx.load_texture("splash-logo", logo, egui::TextureOptions::LINEAR));
        }
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_rgb(40, 40, 50)))
        .show(ctx, |ui| {
            let Some(texture) = &overlay.texture else {
                // Missing asset: the fade still runs against the bare fill
                return;
            };

            // Fit the logo inside the window without upscaling
            let available = ui.available_size();
            let texture_size = texture.size_vec2();
            let scale = (available.x / texture_size.x).min(available.y / texture_size.y);
            let scaled = texture_size * scale.min(1.0);

            let tint = egui::Color32::WHITE.gamma_multiply(opacity.clamp(0.0, 1.0));
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new((texture.id(), scaled)).tint(tint));
            });
        });
}
