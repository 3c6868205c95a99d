// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Feed-load progress, written by the load worker and read by the status bar.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn loaded(&mut self, records: usize) {
        self.set_status(format!("Parsed {records} results"));
    }
    fn failed(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
}
