// src/scrape/rank.rs
//
// Numeric coercion, per-table ordering and page-level aggregation.
//
// Sort key is (points, nrr, won), all descending. A missing number (unparseable cell)
// sorts after every real number; an unmapped role is 0.0 for every row.

use std::cmp::Ordering;

use serde::Serialize;

use super::columns::{Column, ColumnMap, Role};
use crate::core::{RawTable, sanitize::text_to_number};

/// One output line. Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedRow {
    pub table_index: usize,
    pub rank: usize,
    pub team: String,
    pub points: Option<f64>,
    pub nrr: Option<f64>,
    pub won: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedTable {
    pub table_index: usize,
    pub columns: ColumnMap,
    pub rows: Vec<RankedRow>,
}

/// Rank one table. `None` when the table has no usable rows (or no headers to map).
pub fn rank_table(table: &RawTable, table_index: usize) -> Option<RankedTable> {
    if table.is_empty() {
        return None;
    }
    let columns = ColumnMap::infer(&table.headers)?;

    let mut rows: Vec<RankedRow> = table
        .rows
        .iter()
        .map(|cells| RankedRow {
            table_index,
            rank: 0,
            team: cells.get(columns.team.index).cloned().unwrap_or_default(),
            points: coerce(cells, columns.get(Role::Points)),
            nrr: coerce(cells, columns.get(Role::Nrr)),
            won: coerce(cells, columns.get(Role::Won)),
        })
        .collect();

    // sort_by is stable: equal keys keep page order
    rows.sort_by(|a, b| {
        desc(a.points, b.points)
            .then_with(|| desc(a.nrr, b.nrr))
            .then_with(|| desc(a.won, b.won))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    Some(RankedTable { table_index, columns, rows })
}

/// Rank every table, tagging rows with the table's position among *all* tables.
/// Empty tables are skipped without renumbering the ones after them.
pub fn rank_tables(tables: &[RawTable]) -> Vec<RankedTable> {
    tables
        .iter()
        .enumerate()
        .filter_map(|(idx, t)| rank_table(t, idx))
        .collect()
}

/// Concatenate in discovery order, rank order within each table.
pub fn flatten(tables: Vec<RankedTable>) -> Vec<RankedRow> {
    tables.into_iter().flat_map(|t| t.rows).collect()
}

fn coerce(cells: &[String], column: Option<&Column>) -> Option<f64> {
    match column {
        Some(c) => cells.get(c.index).and_then(|s| text_to_number(s)),
        None => Some(0.0),
    }
}

/// Descending on numbers; `None` last.
fn desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        }
    }

    fn teams(t: &RankedTable) -> Vec<&str> {
        t.rows.iter().map(|r| r.team.as_str()).collect()
    }

    #[test]
    fn points_then_nrr_then_won() {
        let t = table(
            &["team", "points", "nrr", "won"],
            &[&["A", "10", "0.5", "5"], &["B", "15", "-0.2", "3"], &["C", "10", "1.0", "2"]],
        );
        let ranked = rank_table(&t, 0).unwrap();
        assert_eq!(teams(&ranked), vec!["B", "C", "A"]);
        assert_eq!(ranked.rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ranked.rows[0].points, Some(15.0));
        assert_eq!(ranked.rows[1].nrr, Some(1.0));
    }

    #[test]
    fn won_breaks_remaining_ties() {
        let t = table(
            &["team", "points", "nrr", "won"],
            &[&["A", "8", "0.1", "3"], &["B", "8", "0.1", "4"]],
        );
        assert_eq!(teams(&rank_table(&t, 0).unwrap()), vec!["B", "A"]);
    }

    #[test]
    fn all_unparseable_keeps_page_order() {
        let t = table(
            &["team", "points", "nrr", "won"],
            &[&["A", "-", "N/A", ""], &["B", "x", "", "?"], &["C", "", "--", "n/a"]],
        );
        let ranked = rank_table(&t, 4).unwrap();
        assert_eq!(teams(&ranked), vec!["A", "B", "C"]);
        assert_eq!(ranked.rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(ranked.rows.iter().all(|r| r.points.is_none() && r.table_index == 4));
    }

    #[test]
    fn unmapped_roles_are_zero_not_null() {
        let t = table(&["club", "w"], &[&["A", "1"], &["B", "2"]]);
        let ranked = rank_table(&t, 0).unwrap();
        assert_eq!(teams(&ranked), vec!["A", "B"]);
        for r in &ranked.rows {
            assert_eq!((r.points, r.nrr, r.won), (Some(0.0), Some(0.0), Some(0.0)));
        }
    }

    #[test]
    fn missing_number_sorts_after_negatives() {
        let t = table(&["team", "points"], &[&["A", "-"], &["B", "-3"], &["C", "0"]]);
        assert_eq!(teams(&rank_table(&t, 0).unwrap()), vec!["C", "B", "A"]);
    }

    #[test]
    fn empty_tables_keep_their_index_slot() {
        let tables = vec![
            table(&["team", "points"], &[&["A", "1"]]),
            table(&["team", "points"], &[]),
            table(&[], &[]),
            table(&["team", "points"], &[&["B", "2"], &["C", "3"]]),
        ];
        let ranked = rank_tables(&tables);
        assert_eq!(ranked.iter().map(|t| t.table_index).collect::<Vec<_>>(), vec![0, 3]);

        let rows = flatten(ranked);
        let tagged: Vec<(usize, usize, &str)> =
            rows.iter().map(|r| (r.table_index, r.rank, r.team.as_str())).collect();
        assert_eq!(tagged, vec![(0, 1, "A"), (3, 1, "C"), (3, 2, "B")]);
    }

    #[test]
    fn repeated_header_takes_the_later_cell() {
        let t = table(
            &["team", "points", "points", "team"],
            &[&["a", "1", "9", "Alpha"], &["b", "5", "2", "Beta"]],
        );
        let ranked = rank_table(&t, 0).unwrap();
        assert_eq!(teams(&ranked), vec!["Alpha", "Beta"]);
        assert_eq!(ranked.rows[0].points, Some(9.0));
    }
}
