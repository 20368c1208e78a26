//! Browser-driven front-end.
//!
//! Drives headless Chrome for pages whose detail table is assembled by
//! scripts. One tab is opened at launch and reused for every navigation, so
//! a long crawl never accumulates tabs in the browser. The session only
//! produces [`RenderedDocument`] handles and raw HTML; all extraction goes
//! through the same [`crate::document::DocumentQuery`] contract as the
//! static front-end.

use std::sync::Arc;

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::document::RenderedDocument;
use crate::error::ScraperError;
use crate::extract::INFO_TABLE;

pub struct BrowserSession {
    // Keeps the Chrome process alive for as long as the tab is in use.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launches a headless Chrome instance with a single reusable tab.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Browser`] if Chrome cannot be started or the
    /// tab cannot be opened.
    pub fn launch() -> Result<Self, ScraperError> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            ..Default::default()
        })
        .map_err(|e| ScraperError::Browser(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScraperError::Browser(e.to_string()))?;
        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    /// Navigates the session tab to a detail page and waits for its info
    /// table to render.
    ///
    /// A page that never renders the table is handed back anyway — scraping
    /// it yields the defaulted record, same as the static front-end. The
    /// returned handle shares the session tab, so it must be consumed before
    /// the next navigation.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Browser`] if navigation fails outright.
    pub fn open_detail_page(&self, url: &str) -> Result<RenderedDocument, ScraperError> {
        self.navigate(url)?;

        if self.tab.wait_for_element(INFO_TABLE).is_err() {
            tracing::debug!(url, "info table never rendered; page will scrape as empty");
        }

        Ok(RenderedDocument::new(Arc::clone(&self.tab)))
    }

    /// Navigates the session tab to a search-result page and returns its
    /// rendered HTML for the shared link parser.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Browser`] on navigation or content failure.
    pub fn open_search_page(&self, url: &str) -> Result<String, ScraperError> {
        self.navigate(url)?;
        self.tab
            .get_content()
            .map_err(|e| ScraperError::Browser(e.to_string()))
    }

    fn navigate(&self, url: &str) -> Result<(), ScraperError> {
        self.tab
            .navigate_to(url)
            .and_then(|t| t.wait_until_navigated())
            .map(|_| ())
            .map_err(|e| ScraperError::Browser(e.to_string()))
    }
}
