// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::record::{Field, Record};

/* ---------------- Parsing ---------------- */

/// Parse the feed into records. Total: never fails, whatever the input.
///
/// - First non-blank line is the header; cells are lower-cased and matched
///   against the schema keys. Unknown headers are ignored.
/// - Every other line is one record. Missing cells are empty, extra cells dropped.
/// - No value validation; cells land verbatim (after quote strip + trim).
pub fn parse(text: &str) -> Vec<Record> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    // `lines()` also drops the `\r` of CRLF feeds, before any quote handling.
    let mut lines = text.lines();
    let header = match lines.next() {
        Some(h) => HeaderMap::from_line(h),
        None => return Vec::new(),
    };

    lines.map(|line| header.record_from(split_line(line))).collect()
}

/// Column position → schema field, built from the header row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderMap {
    cols: Vec<Option<Field>>,
}

impl HeaderMap {
    pub fn from_line(line: &str) -> Self {
        let cols = split_line(line)
            .iter()
            .map(|cell| Field::from_key(&cell.to_lowercase()))
            .collect();
        Self { cols }
    }

    /// Map one row of cells onto a record. Positional; the header wins on length.
    pub fn record_from(&self, cells: Vec<String>) -> Record {
        let mut rec = Record::default();
        for (field, cell) in self.cols.iter().zip(cells) {
            if let Some(f) = field {
                rec.set(*f, cell);
            }
        }
        if rec.category.is_empty() {
            rec.category = Record::default().category;
        }
        rec
    }
}

/// Split one line on commas that sit outside double quotes.
///
/// Quote parity state machine: every `"` flips `in_quotes`; a `,` only
/// separates when `in_quotes` is false, i.e. after an even number of quotes.
/// Quote characters are kept in the cell; `strip_quotes` removes one layer.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                field.push(ch);
            }
            ',' if !in_quotes => cells.push(finish_cell(&take(&mut field))),
            _ => field.push(ch),
        }
    }
    cells.push(finish_cell(&field));

    cells
}

fn finish_cell(raw: &str) -> String {
    s!(strip_quotes(raw).trim())
}

/// Remove at most one leading and one trailing `"`. Inner `""` pairs stay as they are.
pub fn strip_quotes(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row for export: the feed's own keys, schema order.
pub fn export_headers() -> Vec<&'static str> {
    Field::ALL.iter().map(|f| f.key()).collect()
}

/// Write records to any writer (Copy/Export share this).
pub fn write_records<W: Write>(
    mut w: W,
    records: &[&Record],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &export_headers(), sep)?;
    }
    for r in records {
        write_row(&mut w, &r.values(), sep)?;
    }
    Ok(())
}

/// Whole export as a string, for the clipboard.
pub fn to_export_string(records: &[&Record], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
