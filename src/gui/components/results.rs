// src/gui/components/results.rs
//
// Central results area: cards or table, per GuiState.

use eframe::egui;
use crate::{config::state::ResultsLayout, gui::app::App};

use super::{cards, results_table};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view.counts().filtered == 0 {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            let msg = if app.is_loading() {
                "Cargando…"
            } else if app.view.counts().total == 0 {
                "No hay resultados cargados"
            } else {
                "Ningún resultado coincide con el filtro"
            };
            ui.label(egui::RichText::new(msg).italics());
        });
        return;
    }

    match app.state.gui.layout {
        ResultsLayout::Cards => cards::draw(ui, app),
        ResultsLayout::Table => results_table::draw(ui, app),
    }
}
