// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{AppOptions, ExportFormat};
use crate::core::{ChromeSource, FileSource, PageSource};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Rank every points table on a league standings page.
/// With no arguments, scrapes the built-in URL with the built-in settings.
#[derive(Debug, Default, Parser)]
#[command(name = "league_scrape", version, about)]
pub struct Args {
    /// Page to load instead of the built-in URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Run the browser without a window
    #[arg(long, conflicts_with = "headed")]
    pub headless: bool,

    /// Run the browser with a visible window
    #[arg(long)]
    pub headed: bool,

    /// Navigation timeout before proceeding with whatever has rendered
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Extra wait after DOM-content-loaded for client-side tables
    #[arg(long, value_name = "SECS")]
    pub settle_secs: Option<u64>,

    /// Output file (default: all_tables_ranked.csv / .tsv)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Where to save the rendered page
    #[arg(long, value_name = "FILE")]
    pub debug_html: Option<PathBuf>,

    /// Rank a saved page instead of launching a browser
    #[arg(long, value_name = "FILE")]
    pub from_html: Option<PathBuf>,

    /// Tab-separated output
    #[arg(long)]
    pub tsv: bool,
}

impl Args {
    /// Overlay flags on the built-in defaults.
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        let fetch = &mut opts.fetch;
        if let Some(url) = &self.url { fetch.url = url.clone(); }
        if self.headless { fetch.headless = true; }
        if self.headed { fetch.headless = false; }
        if let Some(s) = self.timeout_secs { fetch.nav_timeout = Duration::from_secs(s); }
        if let Some(s) = self.settle_secs { fetch.settle = Duration::from_secs(s); }

        let export = &mut opts.export;
        if self.tsv { export.format = ExportFormat::Tsv; }
        if let Some(out) = &self.out { export.set_path(out); }
        if let Some(p) = &self.debug_html { export.debug_html = p.clone(); }
        opts
    }

    pub fn source(&self) -> Box<dyn PageSource> {
        match &self.from_html {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(ChromeSource),
        }
    }
}

/// Console sink: per-table counts and the final path, through the log.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        logf!("Found {} table(s)", total);
    }
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
    fn item_done(&mut self, table_index: usize, rows: usize) {
        logf!("Table {}: ranked {} row(s)", table_index, rows);
    }
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let opts = args.to_options();
    let source = args.source();
    let mut progress = LogProgress;
    let summary = runner::run(&opts, source.as_ref(), Some(&mut progress))?;
    if summary.timed_out {
        logw!("Results come from a partially loaded page");
    }
    Ok(summary)
}
