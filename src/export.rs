// src/export.rs
use std::io::Write;

use crate::error::Result;
use crate::scrape::RankedRow;

pub const HEADERS: [&str; 6] = ["table_index", "rank", "team", "points", "nrr", "won"];

/* ---------------- Writing ---------------- */

/// Header line + one record per row. Missing numbers are empty fields.
pub fn write_ranked<W: Write>(w: W, rows: &[RankedRow], delim: u8) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .from_writer(w);
    out.write_record(HEADERS)?;
    for row in rows {
        out.serialize(row)?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/* ---------------- Console ---------------- */

fn fmt_num(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:?}"),
        None => s!("NaN"),
    }
}

/// Right-aligned columns, header first, no index column.
pub fn to_display_string(rows: &[RankedRow]) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.table_index.to_string(),
                r.rank.to_string(),
                r.team.clone(),
                fmt_num(r.points),
                fmt_num(r.nrr),
                fmt_num(r.won),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (w, c) in widths.iter_mut().zip(line) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = s!();
    push_line(&mut out, &widths, HEADERS.iter().copied());
    for line in &cells {
        push_line(&mut out, &widths, line.iter().map(String::as_str));
    }
    out
}

fn push_line<'a>(out: &mut String, widths: &[usize; 6], cells: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for (w, c) in widths.iter().zip(cells) {
        if !first { out.push(' '); } else { first = false; }
        let pad = w.saturating_sub(c.chars().count());
        out.extend(std::iter::repeat_n(' ', pad));
        out.push_str(c);
    }
    out.push('\n');
}
