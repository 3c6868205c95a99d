// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{options::FeedOptions, state::AppState},
    feed::FeedError,
    record::Record,
    view::ViewState,
};

use super::{actions, components};

pub type LoadResult = Result<Vec<Record>, FeedError>;

pub fn run(options: eframe::NativeOptions, mut state: AppState) -> Result<(), Box<dyn Error>> {
    state.options.feed = FeedOptions::from_env();
    eframe::run_native(
        "Resultados",
        options,
        Box::new(move |cc| {
            let mut app = App::new(state);
            actions::load(&mut app, &cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // dataset + query + derived outputs
    pub view: ViewState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (load worker writes here too)
    pub status: Arc<Mutex<String>>,

    // in-flight feed load, if any
    pub loading: Option<mpsc::Receiver<LoadResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: feed={}", state.options.feed.source);

        Self {
            state,
            view: ViewState::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.loading.is_some() }

    /// Pick up a finished load, if the worker sent one.
    fn poll_load(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.loading else { return };

        let result = match rx.try_recv() {
            Ok(res) => res,
            Err(mpsc::TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
                return;
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Feed: worker stopped without a result");
                Err(FeedError::Malformed(s!("load worker stopped")))
            }
        };

        self.loading = None;
        let msg = crate::feed::apply_result(&mut self.view, result);
        logf!(
            "View: after load total={} filtered={} facets={}",
            self.view.counts().total,
            self.view.counts().filtered,
            self.view.facet_options().len()
        );
        self.status(msg);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::filter_bar::draw(ui, self);
            components::action_buttons::draw(ui, self);

            ui.separator();

            components::results::draw(ui, self);
        });
    }
}
