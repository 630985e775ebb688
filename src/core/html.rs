// src/core/html.rs
//
// Table extraction over a parsed HTML tree.
// Every <table> on the page is a candidate; nothing is filtered by size or visibility.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{header_label, normalize_ws};

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
static THEAD: LazyLock<Selector> = LazyLock::new(|| sel("thead"));
static TH: LazyLock<Selector> = LazyLock::new(|| sel("th"));
static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| sel("td"));
static CELL: LazyLock<Selector> = LazyLock::new(|| sel("th, td"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// One `<table>` as text: lower-cased headers plus the data rows that are at least as wide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// All tables in document order.
pub fn extract_tables(doc: &str) -> Vec<RawTable> {
    let html = Html::parse_document(doc);
    html.select(&TABLE).map(parse_table).collect()
}

pub fn parse_table(table: ElementRef<'_>) -> RawTable {
    let headers = header_row(table);
    if headers.is_empty() {
        return RawTable::default();
    }

    // First <tr> is the header row either way (inside <thead>, or the fallback).
    let rows = table
        .select(&TR)
        .skip(1)
        .filter_map(|tr| {
            let cells: Vec<String> = tr.select(&TD).map(cell_text).collect();
            // Short rows are merged-cell or spacer rows; drop, don't pad.
            (cells.len() >= headers.len()).then_some(cells)
        })
        .collect();

    RawTable { headers, rows }
}

/// `<thead>` `<th>` labels when present, otherwise the first row's cells.
fn header_row(table: ElementRef<'_>) -> Vec<String> {
    if let Some(thead) = table.select(&THEAD).next() {
        return thead.select(&TH).map(|th| header_label(&cell_text(th))).collect();
    }
    match table.select(&TR).next() {
        Some(first) => first.select(&CELL).map(|c| header_label(&cell_text(c))).collect(),
        None => Vec::new(),
    }
}

fn cell_text(el: ElementRef<'_>) -> String {
    let joined: String = el.text().collect();
    normalize_ws(&joined)
}
