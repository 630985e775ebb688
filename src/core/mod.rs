// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{RawTable, extract_tables};
pub use net::{ChromeSource, FetchedPage, FileSource, PageSource};
