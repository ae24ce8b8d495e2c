//! Application entry point wiring egui/eframe to launch the form builder UI.

use crate::config::AppConfig;
use crate::ui::FormBuilderApp;
use eframe::egui;
use egui_phosphor::Variant;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: &AppConfig) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    tracing::info!(title = %config.window_title, "starting UI");

    eframe::run_native(
        &config.window_title,
        config.native_options(),
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(FormBuilderApp::default()))
        }),
    )
}
