//! Search-result page parsing.
//!
//! Search results are plain numbered pages (`{base}1`, `{base}2`, ...); each
//! page lists detail links under `a.style_titleLink__oiHVJ`. Hrefs may be
//! absolute or relative to the search URL.

use scraper::{Html, Selector};

const LISTING_LINK: &str = "a.style_titleLink__oiHVJ";

/// Builds the URL of the `page`-th search-result page.
#[must_use]
pub fn search_page_url(base: &str, page: usize) -> String {
    format!("{base}{page}")
}

/// Collects detail-page links from one search-result page, in document
/// order. Relative hrefs are joined onto `search_url`.
#[must_use]
pub fn extract_listing_links(html: &str, search_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LISTING_LINK).expect("valid selector");

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|href| {
            if href.starts_with("http") {
                href.to_string()
            } else {
                format!("{search_url}{href}")
            }
        })
        .collect()
}
