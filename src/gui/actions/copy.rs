// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, csv};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let results = app.view.result_set();

    if results.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = csv::to_export_string(&results, export.include_headers, export.delimiter());
    logf!(
        "Copy: category={}, rows={}, headers={}",
        app.view.query().active_category,
        results.len(),
        export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} results to clipboard", results.len()));
}
