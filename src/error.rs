// src/error.rs
use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Launch, navigation or capture failed. Navigation timeouts never land here.
    #[error("browser: {0}")]
    Browser(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("no ranking data extracted")]
    NoRankingData,
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

impl ScrapeError {
    pub fn browser(e: impl Display) -> Self {
        // {:#} keeps the anyhow context chain on one line
        ScrapeError::Browser(format!("{e:#}"))
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        ScrapeError::Io { path: path.to_path_buf(), source }
    }
}
