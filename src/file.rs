// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::write_records;
use crate::record::Record;

/// Write the result set to `export.out_path()`. Returns the final path written to.
pub fn export_results(
    export: &ExportOptions,
    records: &[&Record],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_records(&mut out, records, export.include_headers, export.delimiter())?;
    out.flush()?;

    Ok(path)
}

/// Default export stem for a view, e.g. `resultados_animalitos_lotto_activo`.
pub fn default_stem(category: &str, lottery: &str) -> String {
    let mut stem = join!(crate::config::consts::DEFAULT_FILE, "_", &sanitize_filename(category, "todas"));
    if !lottery.is_empty() {
        stem.push('_');
        stem.push_str(&sanitize_filename(lottery, "loteria"));
    }
    stem
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::default_stem;

    #[test]
    fn stem_includes_category_and_lottery() {
        assert_eq!(default_stem("animalitos", ""), "resultados_animalitos");
        assert_eq!(default_stem("loteria", "TRIPLE FÁCIL"), "resultados_loteria_triple_facil");
    }
}
