// src/gui/actions/export.rs
use crate::{gui::app::App, file};

/// Resolve the export path from the output field.
///
/// A typed path sticks across exports until the field is cleared; an
/// untouched (or cleared) field follows the current category and lottery.
fn sync_out_path(app: &mut App) {
    if app.out_path_dirty && app.out_path_text.trim().is_empty() {
        logd!("Export: Output field cleared, back to the default path");
        app.out_path_dirty = false;
        app.state.options.export.reset_path();
    }

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
    } else {
        let q = app.view.query();
        let stem = file::default_stem(&q.active_category, &q.selected_lottery);
        app.state.options.export.set_stem(&stem);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }
}

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app.view borrows
    sync_out_path(app);
    logf!("Export: Out path set → {}", app.state.options.export.out_path().display());

    let status_msg = {
        let results = app.view.result_set();
        if results.is_empty() {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        } else {
            logf!(
                "Export: Begin category={}, rows={}",
                app.view.query().active_category,
                results.len()
            );
            match file::export_results(&app.state.options.export, &results) {
                Ok(path) => {
                    logf!("Export: OK path={}", path.display());
                    format!("Exported {} results to {}", results.len(), path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the dataset borrows are gone
    app.status(status_msg);
}
