// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    config::{options::ExportFormat, state::ResultsLayout},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Layout + reload ---
    ui.horizontal(|ui| {
        ui.label("Vista:");
        let before = app.state.gui.layout;
        ui.selectable_value(&mut app.state.gui.layout, ResultsLayout::Cards, "Tarjetas");
        ui.selectable_value(&mut app.state.gui.layout, ResultsLayout::Table, "Tabla");
        if app.state.gui.layout != before {
            logf!("UI: Layout → {:?}", app.state.gui.layout);
        }

        ui.separator();

        let reload = ui.add_enabled(!app.is_loading(), egui::Button::new("⟳ Recargar"))
            .on_hover_text(app.state.options.feed.source.to_string());
        if reload.clicked() {
            actions::load(app, ui.ctx());
        }
    });

    // --- Export options ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            // Keep the text field in step with the format until the user types.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(280.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let has_rows = app.view.counts().filtered > 0;
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
