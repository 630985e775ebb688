// src/runner.rs
//
// fetch → debug capture → extract → rank → print → export.
// The page source owns (and releases) any browser before parsing starts.

use std::path::PathBuf;

use crate::{
    config::AppOptions,
    core::{PageSource, extract_tables},
    error::{Result, ScrapeError},
    export, file,
    progress::{NullProgress, Progress},
    scrape::{self, RankedRow},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub tables_found: usize,
    pub tables_ranked: usize,
    pub timed_out: bool,
    pub rows: Vec<RankedRow>,
    pub out_path: PathBuf,
}

/// Top-level runner. `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    source: &dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let result = run_inner(opts, source, &mut *progress);
    progress.finish();
    result
}

fn run_inner(
    opts: &AppOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let page = source.fetch(&opts.fetch)?;

    let debug_path = &opts.export.debug_html;
    file::write_debug_html(debug_path, &page.html)?;
    logf!("Saved debug HTML to {}", debug_path.display());

    let tables = extract_tables(&page.html);
    logd!("Extract: {} table(s) found", tables.len());
    progress.begin(tables.len());

    let ranked = scrape::rank_tables(&tables);
    for t in &ranked {
        logd!("Table {}: {} row(s), {}", t.table_index, t.rows.len(), t.columns);
        progress.item_done(t.table_index, t.rows.len());
    }
    let tables_ranked = ranked.len();
    let rows = scrape::flatten(ranked);

    if rows.is_empty() {
        loge!("No tables parsed successfully.");
        return Err(ScrapeError::NoRankingData);
    }

    if opts.export.print_table {
        print!("{}", export::to_display_string(&rows));
    }

    let out_path = file::write_export(&opts.export, &rows)?;
    logf!("Saved {} row(s) to {}", rows.len(), out_path.display());
    progress.log(&format!("Wrote {}", out_path.display()));

    Ok(RunSummary {
        tables_found: tables.len(),
        tables_ranked,
        timed_out: page.timed_out,
        rows,
        out_path,
    })
}
