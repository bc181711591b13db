#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Map Production Grid")
            .with_inner_size([340.0, 220.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Map Production Grid",
        native_options,
        Box::new(|cc| Ok(Box::new(mapgrid::MapApp::new(cc)))),
    )
}
