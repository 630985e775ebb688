// src/scrape/mod.rs
pub mod columns;
pub mod rank;

pub use columns::{Column, ColumnMap, Role};
pub use rank::{RankedRow, RankedTable, flatten, rank_table, rank_tables};
