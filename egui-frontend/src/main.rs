use eframe::egui;
use log::info;

mod ui;

use ui::AdminDashboardApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=info
    env_logger::init();
    info!("Starting meal admin dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("Bramhana Vantillu Admin")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Bramhana Vantillu Admin",
        options,
        Box::new(|cc| {
            let app = AdminDashboardApp::new(cc);
            info!("Dashboard initialized");
            Ok(Box::new(app))
        }),
    )
}
