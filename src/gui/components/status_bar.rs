// src/gui/components/status_bar.rs
use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.is_loading() {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let c = app.view.counts();
            ui.label(format!("{} / {} resultados", c.filtered, c.total));
        });
    });
}
