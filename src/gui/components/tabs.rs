// src/gui/components/tabs.rs
//
// Category tabs. The two known categories are always shown; any other
// category present in the feed gets a tab after them.
// A click on the active tab is ignored here; ViewState itself would reset
// the filters again if it were called.

use eframe::egui;
use crate::config::consts::KNOWN_CATEGORIES;
use crate::gui::app::App;

pub fn tab_label(category: &str) -> String {
    match category {
        "loteria" => s!("Lotería"),
        "animalitos" => s!("Animalitos"),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => s!("(sin categoría)"),
            }
        }
    }
}

/// Known categories first, then feed extras in first-seen order.
pub fn tab_categories(app: &App) -> Vec<String> {
    let mut cats: Vec<String> = KNOWN_CATEGORIES.iter().map(|c| s!(*c)).collect();
    for c in app.view.store().categories() {
        if !cats.iter().any(|k| k == c) {
            cats.push(s!(c));
        }
    }
    cats
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cats = tab_categories(app);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for cat in &cats {
            let selected = app.view.query().active_category == *cat;
            let text = egui::RichText::new(tab_label(cat)).strong();

            if ui.selectable_label(selected, text).clicked() && !selected {
                let prev = app.view.query().active_category.clone();
                app.view.set_category(cat);
                logf!(
                    "UI: Tab switch {} → {} (filtered={}, facets={})",
                    prev,
                    cat,
                    app.view.counts().filtered,
                    app.view.facet_options().len()
                );
            }
        }
    });
}
