// src/cli.rs
use std::{env, error::Error, io::{self, Write}};

use crate::{
    config::options::{ExportFormat, FeedOptions, FeedSource},
    config::consts::DEFAULT_CATEGORY,
    feed, file,
    progress::Progress,
    record::Record,
    view::ViewState,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub source: FeedSource,
    pub category: String,
    pub lottery: String,
    pub search: String,
    pub list_facets: bool,
    pub export: Option<String>,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Params {
    pub fn new(feed: FeedOptions) -> Self {
        Self {
            source: feed.source,
            category: s!(DEFAULT_CATEGORY),
            lottery: s!(),
            search: s!(),
            list_facets: false,
            export: None,
            format: ExportFormat::Csv,
            include_headers: false,
        }
    }
}

/// Prints load status on stderr so stdout stays clean for the cards.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn loaded(&mut self, records: usize) { eprintln!("Parsed {records} record(s)"); }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let Some(params) = parse_args(env::args().skip(1), FeedOptions::from_env())? else {
        eprintln!("{}", HELP);
        return Ok(());
    };

    let records = feed::load(&params.source, Some(&mut CliProgress))?;

    let mut view = ViewState::new();
    view.load(records);
    view.set_category(&params.category);
    view.set_selected_lottery(&params.lottery);
    view.set_search_text(&params.search);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if params.list_facets {
        for f in view.facet_options() {
            writeln!(out, "{f}")?;
        }
        return Ok(());
    }

    let results = view.result_set();
    for r in &results {
        write_card(&mut out, r)?;
    }
    let counts = view.counts();
    writeln!(out, "{} / {} results", counts.filtered, counts.total)?;

    if let Some(path) = &params.export {
        let mut export = crate::config::options::ExportOptions::default();
        export.format = params.format;
        export.include_headers = params.include_headers;
        export.set_path(path);
        let written = file::export_results(&export, &results)?;
        logf!("Export: OK rows={} path={}", results.len(), written.display());
        eprintln!("Wrote {}", written.display());
    }

    Ok(())
}

/// Text rendition of one result card.
pub fn write_card<W: Write>(mut w: W, r: &Record) -> io::Result<()> {
    if r.date.is_empty() {
        writeln!(w, "[{}]", r.headline())?;
    } else {
        writeln!(w, "[{}] {}", r.headline(), r.date)?;
    }
    for (label, value) in r.display_fields() {
        writeln!(w, "  {label}: {value}")?;
    }
    Ok(())
}

/// `Ok(None)` means help was requested.
pub fn parse_args<I>(args: I, feed: FeedOptions) -> Result<Option<Params>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new(feed);
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" | "--file" => {
                let v = args.next().ok_or_else(|| format!("Missing value for {a}"))?;
                params.source = if a == "--file" {
                    FeedSource::File(v.into())
                } else {
                    FeedSource::parse(&v)?
                };
            }
            "-c" | "--category" => {
                params.category = args.next().ok_or("Missing value for --category")?;
            }
            "-l" | "--lottery" => {
                params.lottery = args.next().ok_or("Missing value for --lottery")?;
            }
            "-s" | "--search" => {
                params.search = args.next().ok_or("Missing value for --search")?;
            }
            "--facets" => params.list_facets = true,
            "-o" | "--export" => {
                params.export = Some(args.next().ok_or("Missing value for --export")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => return Ok(None),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Some(params))
}

const HELP: &str = "\
Usage: cli [options]

Feed:
  --url <http://host[:port]/path>   fetch the CSV feed over plain HTTP
  --file <path>                     read the CSV feed from disk
                                    (default: $SORTEOS_FEED or resultados.csv)
Query:
  -c, --category <cat>              loteria | animalitos | ... (default loteria)
  -l, --lottery <name>              exact lottery name
  -s, --search <text>               case-insensitive text search
  --facets                          list lottery names for the category and exit
Export:
  -o, --export <path>               write the results to a file
  --format csv|tsv
  --include-headers
";
