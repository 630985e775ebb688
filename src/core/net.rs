// src/core/net.rs
//
// Page sources. The Chrome source renders the page in a real browser;
// the file source replays a saved capture (e.g. a previous page_debug.html).

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use headless_chrome::protocol::cdp::Emulation;
use headless_chrome::util::Timeout;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::config::{FetchOptions, consts::READY_POLL_MS};
use crate::error::{Result, ScrapeError};

/// HTML as captured, plus whether the DOM never reported ready in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    pub html: String,
    pub timed_out: bool,
}

pub trait PageSource {
    fn fetch(&self, opts: &FetchOptions) -> Result<FetchedPage>;
}

/// One headless_chrome session per fetch. The browser is gone by the time `fetch` returns.
pub struct ChromeSource;

impl PageSource for ChromeSource {
    fn fetch(&self, opts: &FetchOptions) -> Result<FetchedPage> {
        let launch = LaunchOptions::default_builder()
            .headless(opts.headless)
            .window_size(Some(opts.viewport))
            .idle_browser_timeout(opts.idle_timeout())
            .build()
            .map_err(ScrapeError::browser)?;

        logd!("Fetch: launching browser headless={} viewport={:?}", opts.headless, opts.viewport);
        let browser = Browser::new(launch).map_err(ScrapeError::browser)?;
        let tab = browser.new_tab().map_err(ScrapeError::browser)?;
        tab.set_user_agent(&opts.user_agent, None, None)
            .map_err(ScrapeError::browser)?;
        // window_size is the outer window; in headed mode the page area is smaller.
        tab.call_method(device_metrics(opts.viewport))
            .map_err(ScrapeError::browser)?;

        logf!("Loading page {}", opts.url);
        let deadline = Instant::now() + opts.nav_timeout;
        let timed_out = match tab.navigate_to(&opts.url) {
            Ok(_) => !wait_for_dom_ready(&tab, deadline),
            Err(e) if nav_error_is_timeout(&e) => true,
            // DNS / refused connection: fatal.
            Err(e) => return Err(ScrapeError::browser(e)),
        };
        if timed_out {
            logw!("Timeout during page load, proceeding anyway.");
        }

        thread::sleep(opts.settle);
        let html = tab.get_content().map_err(ScrapeError::browser)?;
        logd!("Fetch: captured {} bytes", html.len());

        drop(tab);
        drop(browser);
        Ok(FetchedPage { html, timed_out })
    }
}

/// Viewport override at 1x scale, desktop layout.
fn device_metrics((width, height): (u32, u32)) -> Emulation::SetDeviceMetricsOverride {
    Emulation::SetDeviceMetricsOverride {
        width,
        height,
        device_scale_factor: 1.0,
        mobile: false,
        scale: None,
        screen_width: Some(width),
        screen_height: Some(height),
        position_x: None,
        position_y: None,
        dont_set_visible_size: None,
        screen_orientation: None,
        viewport: None,
        display_feature: None,
        device_posture: None,
    }
}

/// A stalled navigation comes back as the transport's `Timeout`; anything else
/// (`NavigationFailed`, a dead connection) is a real failure.
fn nav_error_is_timeout(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| cause.is::<Timeout>())
}

/// Poll `document.readyState` until DOMContentLoaded has fired or `deadline` passes.
/// Evaluation errors mid-navigation (context torn down) count as "not yet".
fn wait_for_dom_ready(tab: &Tab, deadline: Instant) -> bool {
    loop {
        match tab.evaluate("document.readyState", false) {
            Ok(obj) => {
                let state = obj.value.as_ref().and_then(|v| v.as_str()).unwrap_or("");
                if is_dom_ready(state) {
                    logd!("Fetch: readyState={}", state);
                    return true;
                }
            }
            Err(e) => logd!("Fetch: readyState check failed: {e}"),
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(READY_POLL_MS).min(deadline - now));
    }
}

pub fn is_dom_ready(ready_state: &str) -> bool {
    matches!(ready_state, "interactive" | "complete")
}

/// Replays saved HTML; never times out.
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl PageSource for FileSource {
    fn fetch(&self, _opts: &FetchOptions) -> Result<FetchedPage> {
        logf!("Loading saved page {}", self.path.display());
        let html = fs::read_to_string(&self.path).map_err(|e| ScrapeError::io(&self.path, e))?;
        Ok(FetchedPage { html, timed_out: false })
    }
}
