// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub feed: FeedOptions,
    pub export: ExportOptions,
}

/* ---------------- Feed ---------------- */

/// Where the CSV feed text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    /// Plain HTTP/1.0 GET (no TLS).
    Http { host: String, port: u16, path: String },
    /// Local CSV file, e.g. a downloaded copy of the published sheet.
    File(PathBuf),
}

impl FeedSource {
    /// Accepts `http://host[:port]/path?query` or anything else as a file path.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(s!("Empty feed source"));
        }

        let lower = spec.to_ascii_lowercase();
        if lower.starts_with("https://") {
            return Err(format!("TLS feeds are not supported, use http:// or a local file: {spec}"));
        }
        let Some(rest) = lower.strip_prefix("http://").map(|_| &spec[7..]) else {
            return Ok(FeedSource::File(PathBuf::from(spec)));
        };

        let (authority, path) = match rest.find('/') {
            Some(ix) => (&rest[..ix], &rest[ix..]),
            None => (rest, "/"),
        };
        if authority.is_empty() {
            return Err(format!("Missing host in feed URL: {spec}"));
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port: u16 = p
                    .parse()
                    .map_err(|_| format!("Invalid port in feed URL: {spec}"))?;
                (h, port)
            }
            None => (authority, DEFAULT_HTTP_PORT),
        };

        Ok(FeedSource::Http { host: s!(host), port, path: s!(path) })
    }
}

impl Default for FeedSource {
    fn default() -> Self {
        FeedSource::File(PathBuf::from(DEFAULT_FEED_FILE))
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Http { host, port, path } if *port == DEFAULT_HTTP_PORT => {
                write!(f, "http://{host}{path}")
            }
            FeedSource::Http { host, port, path } => write!(f, "http://{host}:{port}{path}"),
            FeedSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FeedOptions {
    pub source: FeedSource,
}

impl FeedOptions {
    /// Default source, overridden by `SORTEOS_FEED` when set and valid.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(v) = std::env::var(FEED_ENV) {
            match FeedSource::parse(&v) {
                Ok(src) => opts.source = src,
                Err(e) => logw!("Config: ignoring {}: {}", FEED_ENV, e),
            }
        }
        opts
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    /// Extension the user typed, if any. Wins over the format's extension.
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        self.out_path.dir.join(join!(&*stem, ".", &ext))
    }

    /// Parse GUI/CLI text into dir + stem (+ extension if one was typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    /// Back to the default dir, stem and format extension.
    pub fn reset_path(&mut self) {
        self.out_path = OutputPath::default();
    }

    /// Replace the file stem only; dir and extension stay.
    pub fn set_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }

    pub fn delimiter(&self) -> char {
        self.format.delim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_source_parses_http_with_port_and_query() {
        let src = FeedSource::parse("http://feeds.local:8080/pub?output=csv").unwrap();
        assert_eq!(
            src,
            FeedSource::Http { host: s!("feeds.local"), port: 8080, path: s!("/pub?output=csv") }
        );
    }

    #[test]
    fn feed_source_defaults_port_and_path() {
        let src = FeedSource::parse("HTTP://example.org").unwrap();
        assert_eq!(src, FeedSource::Http { host: s!("example.org"), port: 80, path: s!("/") });
        assert_eq!(src.to_string(), "http://example.org/");
    }

    #[test]
    fn feed_source_rejects_tls_and_bad_ports() {
        assert!(FeedSource::parse("https://example.org/feed.csv").is_err());
        assert!(FeedSource::parse("http://example.org:x/feed.csv").is_err());
        assert!(FeedSource::parse("   ").is_err());
    }

    #[test]
    fn feed_source_falls_back_to_file() {
        let src = FeedSource::parse("data/resultados.csv").unwrap();
        assert_eq!(src, FeedSource::File(PathBuf::from("data/resultados.csv")));
    }

    #[test]
    fn export_path_follows_format_until_user_types_extension() {
        let mut opts = ExportOptions::default();
        assert!(opts.out_path().to_string_lossy().ends_with("resultados.csv"));
        opts.format = ExportFormat::Tsv;
        assert!(opts.out_path().to_string_lossy().ends_with("resultados.tsv"));

        opts.set_path("out/hoy.txt");
        opts.format = ExportFormat::Csv;
        assert!(opts.out_path().to_string_lossy().ends_with("hoy.txt"));

        opts.reset_path();
        assert!(opts.out_path().to_string_lossy().ends_with("resultados.csv"));
    }
}
