// src/config/consts.rs

// Source page
pub const URL: &str =
    "https://cricclubs.com/FortyPlusLeague/viewPointsTable.do?league=19&clubId=24301";

// Flip to true once the site stops serving an anti-bot challenge to headless sessions.
pub const HEADLESS: bool = false;

// Browser session
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
pub const VIEWPORT: (u32, u32) = (1280, 800);
pub const NAV_TIMEOUT_MS: u64 = 120_000;
pub const SETTLE_MS: u64 = 5_000; // extra wait for JS-built tables
pub const READY_POLL_MS: u64 = 250;
pub const IDLE_MARGIN_MS: u64 = 30_000;

// Artifacts (overwritten each run)
pub const DEBUG_HTML_FILE: &str = "page_debug.html";
pub const OUTPUT_STEM: &str = "all_tables_ranked";

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV_VAR: &str = "LEAGUE_SCRAPE_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
