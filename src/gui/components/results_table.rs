// src/gui/components/results_table.rs
//
// Striped table over the result set. Columns are the schema minus category
// (the tab already says which one is showing).

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, record::Field};

fn columns() -> Vec<Field> {
    Field::ALL.into_iter().filter(|f| *f != Field::Category).collect()
}

fn width_for(f: Field) -> f32 {
    match f {
        Field::Lottery => 180.0,
        Field::Date | Field::Schedule | Field::Animal => 96.0,
        _ => 64.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cols = columns();
    let results = app.view.result_set();

    egui::ScrollArea::horizontal()
        .id_salt("results_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("results_table", app.view.query().active_category.as_str()));
            for &f in &cols {
                table = table.column(Column::initial(width_for(f)).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for &f in &cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(f.label()).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, results.len(), |mut row| {
                        let Some(r) = results.get(row.index()) else { return };
                        for &f in &cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let cell = r.get(f);
                                if f.is_result() {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
