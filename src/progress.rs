// src/progress.rs
/// Lightweight progress reporting for feed loads.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the feed is parsed, with the number of records.
    fn loaded(&mut self, _records: usize) {}

    /// Called when the load failed; `msg` is shown verbatim.
    fn failed(&mut self, _msg: &str) {}
}

