// src/gui/components/filter_bar.rs
//
// Lottery selector + free-text search. Both edit the ViewState directly;
// the result set is recomputed inside the setter.

use eframe::egui;
use crate::gui::app::App;

const ALL_LOTTERIES: &str = "Todas las loterías";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // --- Lottery facet ---
        let current = app.view.query().selected_lottery.clone();
        let mut picked = current.clone();
        let shown = if current.is_empty() { ALL_LOTTERIES } else { current.as_str() };

        ui.label("Lotería:");
        egui::ComboBox::from_id_salt("lottery_facet")
            .selected_text(shown)
            .width(220.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut picked, s!(), ALL_LOTTERIES);
                for opt in app.view.facet_options() {
                    ui.selectable_value(&mut picked, opt.clone(), opt.as_str());
                }
            });

        if picked != current {
            app.view.set_selected_lottery(&picked);
            logf!("UI: Lottery → {:?} (filtered={})", picked, app.view.counts().filtered);
        }

        ui.separator();

        // --- Search ---
        ui.label("Buscar:");
        let mut text = app.view.query().search_text.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("número, animal, horario…")
                .desired_width(220.0),
        );
        if resp.changed() {
            app.view.set_search_text(&text);
            logd!("UI: Search → {:?} (filtered={})", text, app.view.counts().filtered);
        }

        if !text.is_empty() && ui.small_button("✖").on_hover_text("Clear search").clicked() {
            app.view.set_search_text("");
        }
    });
}
