#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::PumpSelectApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("PumpSelect"),
        ..Default::default()
    };

    eframe::run_native(
        "PumpSelect",
        options,
        Box::new(|cc| Ok(Box::new(PumpSelectApp::new(cc)))),
    )
}
