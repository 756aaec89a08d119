use edu_agent::EduApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Education Learning Agent v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Education Learning Agent",
        options,
        Box::new(|_cc| Ok(Box::new(EduApp::new()))),
    )
}
