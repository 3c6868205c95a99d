// src/feed.rs
//
// Feed text provider: resolve a `FeedSource`, fetch its text, hand it to the
// parser. Only a successfully retrieved body is ever parsed; any failure is
// reported as-is and the caller empties its dataset.

use std::{fmt, fs, io};

use crate::{
    config::options::FeedSource,
    core::net,
    csv,
    progress::Progress,
    record::Record,
    view::ViewState,
};

#[derive(Debug)]
pub enum FeedError {
    /// TCP connect failed.
    Connect { host: String, port: u16, source: io::Error },
    /// Read/write failure after connecting.
    Io(io::Error),
    /// Non-2xx status line, verbatim.
    Status(String),
    /// Response we could not make sense of.
    Malformed(String),
    /// Local feed file could not be read.
    File { path: String, source: io::Error },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Connect { host, port, source } => {
                write!(f, "Could not connect to {host}:{port}: {source}")
            }
            FeedError::Io(e) => write!(f, "Network error: {e}"),
            FeedError::Status(line) => write!(f, "HTTP error: {line}"),
            FeedError::Malformed(what) => write!(f, "Malformed response: {what}"),
            FeedError::File { path, source } => write!(f, "Could not read {path}: {source}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Connect { source, .. } | FeedError::File { source, .. } => Some(source),
            FeedError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FeedError {
    fn from(e: io::Error) -> Self { FeedError::Io(e) }
}

/// Raw CSV text of the feed.
pub fn fetch_text(source: &FeedSource) -> Result<String, FeedError> {
    let text = match source {
        FeedSource::Http { host, port, path } => net::http_get(host, *port, path)?,
        FeedSource::File(path) => fs::read_to_string(path).map_err(|e| FeedError::File {
            path: path.display().to_string(),
            source: e,
        })?,
    };
    Ok(strip_bom(text))
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => s!(rest),
        None => text,
    }
}

/// Fetch + parse. Blocking; GUI calls this from a worker thread.
pub fn load(
    source: &FeedSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>, FeedError> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Loading {source}…"));
    }
    logf!("Feed: Begin source={}", source);

    match fetch_text(source) {
        Ok(text) => {
            let records = csv::parse(&text);
            logf!("Feed: OK bytes={} records={}", text.len(), records.len());
            if let Some(p) = progress.as_deref_mut() {
                p.loaded(records.len());
            }
            Ok(records)
        }
        Err(e) => {
            loge!("Feed: Error source={}: {}", source, e);
            if let Some(p) = progress.as_deref_mut() {
                p.failed(&e.to_string());
            }
            Err(e)
        }
    }
}

/// Apply a finished load to the view: replace on success, empty on failure.
/// Returns the user-facing status line.
pub fn apply_result(view: &mut ViewState, result: Result<Vec<Record>, FeedError>) -> String {
    match result {
        Ok(records) => {
            let n = records.len();
            view.load(records);
            format!("Loaded {n} results")
        }
        Err(e) => {
            view.clear();
            e.to_string()
        }
    }
}
