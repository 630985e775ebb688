// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/// Everything the browser session needs for one page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub user_agent: String,
    pub viewport: (u32, u32),
    pub nav_timeout: Duration,
    pub settle: Duration,
    pub headless: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(URL),
            user_agent: s!(USER_AGENT),
            viewport: VIEWPORT,
            nav_timeout: Duration::from_millis(NAV_TIMEOUT_MS),
            settle: Duration::from_millis(SETTLE_MS),
            headless: HEADLESS,
        }
    }
}

impl FetchOptions {
    /// Upper bound on any single CDP call, `Page.navigate` included, and on
    /// browser silence. Never below the settle delay plus a margin, or the
    /// browser would shut itself down mid-settle.
    pub fn idle_timeout(&self) -> Duration {
        self.nav_timeout.max(self.settle + Duration::from_millis(IDLE_MARGIN_MS))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out: Option<PathBuf>,
    pub debug_html: PathBuf,
    pub print_table: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            debug_html: PathBuf::from(DEBUG_HTML_FILE),
            print_table: true,
        }
    }
}

impl ExportOptions {
    /// User path wins as given; otherwise the default stem with the format's extension.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => PathBuf::from(OUTPUT_STEM).with_extension(self.format.ext()),
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.out = Some(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("all_tables_ranked.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("all_tables_ranked.tsv"));
    }

    #[test]
    fn user_path_keeps_its_extension() {
        let mut export = ExportOptions::default();
        export.set_path("out/standings.txt");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out/standings.txt"));
    }

    #[test]
    fn fetch_defaults_match_fixed_config() {
        let f = FetchOptions::default();
        assert_eq!(f.url, URL);
        assert_eq!(f.viewport, (1280, 800));
        assert_eq!(f.nav_timeout, Duration::from_secs(120));
        assert_eq!(f.settle, Duration::from_secs(5));
        assert_eq!(f.headless, HEADLESS);
    }

    #[test]
    fn stalled_navigate_is_bounded_by_nav_timeout() {
        let mut f = FetchOptions::default();
        assert_eq!(f.idle_timeout(), f.nav_timeout);

        f.nav_timeout = Duration::from_secs(5);
        assert_eq!(f.idle_timeout(), f.settle + Duration::from_millis(IDLE_MARGIN_MS));
    }
}
