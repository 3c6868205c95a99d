// src/gui/components/cards.rs
//
// One card per result: headline, date, then the non-empty result fields.
// Purely a view over ViewState::result_set().

use eframe::egui::{self, Color32, RichText};
use crate::{gui::app::App, record::Record};

const ACCENT: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let width = app.state.gui.card_width;
    let results = app.view.result_set();

    egui::ScrollArea::vertical()
        .id_salt("cards_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                for r in &results {
                    card(ui, r, width);
                }
            });
        });
}

fn card(ui: &mut egui::Ui, r: &Record, width: f32) {
    egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical(|ui| {
                ui.label(RichText::new(r.headline()).strong().size(15.0));
                if !r.date.is_empty() {
                    ui.label(RichText::new(&r.date).small().weak());
                }
                ui.add_space(4.0);

                let fields = r.display_fields();
                if fields.is_empty() {
                    ui.label(RichText::new("sin resultado").italics().weak());
                }
                for (label, value) in fields {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(label).weak());
                        ui.label(RichText::new(value).strong().color(ACCENT).size(18.0));
                    });
                }
            });
        });
}
