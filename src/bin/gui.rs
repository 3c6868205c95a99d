// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use sorteos::gui;
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = img.dimensions();
    Some(IconData { rgba: img.into_raw(), width: w, height: h })
}

fn main() {
    let state = sorteos::config::state::AppState::default();
    let mut viewport = ViewportBuilder::default()
        .with_title("Resultados")
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
