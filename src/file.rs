// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::error::{Result, ScrapeError};
use crate::export::write_ranked;
use crate::scrape::RankedRow;

/// Save the rendered page for post-hoc inspection (anti-bot interstitials etc.).
/// Overwrites the previous capture.
pub fn write_debug_html(path: &Path, html: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, html).map_err(|e| ScrapeError::io(path, e))
}

/// Write the ranked rows to `export.out_path()` in the chosen format.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, rows: &[RankedRow]) -> Result<PathBuf> {
    let path = export.out_path();
    ensure_parent(&path)?;

    let file = File::create(&path).map_err(|e| ScrapeError::io(&path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_ranked(&mut out, rows, export.format.delim())?;
    out.flush().map_err(|e| ScrapeError::io(&path, e))?;
    Ok(path)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::other("path exists but is not a directory");
        return Err(ScrapeError::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?;
    }
    Ok(())
}
