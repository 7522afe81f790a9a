//! GUI entry point for Frotas Checker

mod app;
mod board_panel;
mod history_panel;
mod settings_panel;
mod stats_panel;
mod yard_panel;

use app::FrotasApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gestão de Frotas",
        options,
        Box::new(|cc| Ok(Box::new(FrotasApp::new(cc)))),
    )
}
