// src/gui/actions/load.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{feed, gui::{app::App, progress::GuiProgress}};

/// Start a feed load on a worker thread. The UI thread picks the result up
/// in `App::poll_load` and applies it in one step.
///
/// A load that is already in flight wins: the new request is dropped.
pub fn load(app: &mut App, ctx: &egui::Context) {
    if app.is_loading() {
        logd!("Load: Clicked while a load is in flight, ignoring");
        return;
    }

    let source = app.state.options.feed.source.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    logf!("Load: Begin source={}", source);
    app.status(format!("Loading {source}…"));

    let spawned = thread::Builder::new()
        .name(s!("feed-load"))
        .spawn(move || {
            let mut prog = GuiProgress::new(status);
            let res = feed::load(&source, Some(&mut prog));
            // Receiver gone means the app is closing; nothing to report to.
            let _ = tx.send(res);
            ctx.request_repaint();
        });

    match spawned {
        Ok(_) => app.loading = Some(rx),
        Err(e) => {
            loge!("Load: could not start worker: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
