//! Demand-bounded crawl over search-result pages.
//!
//! Both front-ends share the loop shape: fetch one search page, collect its
//! detail links, extract each listing, advance to the next page until the
//! configured demand is met. A failed detail page yields a defaulted record;
//! a failed search page stops the crawl — without new links there is nothing
//! left to do.

use gnavcrawl_core::{AppConfig, ListingRecord};
use gnavcrawl_scraper::{
    pagination, BrowserSession, DirectoryClient, Extractor, StaticDocument,
};
use tokio::time::{sleep, Duration};

/// Crawls with the static-HTML front-end.
pub async fn run_static(cfg: &AppConfig) -> anyhow::Result<Vec<ListingRecord>> {
    let client = DirectoryClient::new(cfg.request_timeout_secs, &cfg.user_agent)?;
    let extractor = Extractor::new(client.clone(), cfg.tls_connect_timeout_secs);

    let mut records = Vec::new();
    let mut page = 1usize;

    while records.len() < cfg.listing_demand {
        let search_url = pagination::search_page_url(&cfg.search_base_url, page);
        let html = client.fetch_page(&search_url).await?;
        let links = pagination::extract_listing_links(&html, &search_url);
        if links.is_empty() {
            tracing::warn!(search_url, "search page carried no listings; stopping early");
            break;
        }

        let remaining = cfg.listing_demand - records.len();
        for link in links.iter().take(cfg.page_size.min(remaining)) {
            let record = match client.fetch_page(link).await {
                Ok(body) => extractor.extract(&StaticDocument::parse(&body)).await,
                Err(e) => {
                    tracing::warn!(link, error = %e, "detail fetch failed; emitting defaulted record");
                    ListingRecord::default()
                }
            };
            records.push(record);
            tracing::info!(collected = records.len(), "listing processed");
            sleep(Duration::from_millis(cfg.inter_request_delay_ms)).await;
        }

        page += 1;
    }

    Ok(records)
}

/// Crawls with the browser-driven front-end.
pub async fn run_rendered(cfg: &AppConfig) -> anyhow::Result<Vec<ListingRecord>> {
    let client = DirectoryClient::new(cfg.request_timeout_secs, &cfg.user_agent)?;
    let extractor = Extractor::new(client, cfg.tls_connect_timeout_secs);
    let session = BrowserSession::launch()?;

    let mut records = Vec::new();
    let mut page = 1usize;

    while records.len() < cfg.listing_demand {
        let search_url = pagination::search_page_url(&cfg.search_base_url, page);
        let html = session.open_search_page(&search_url)?;
        let links = pagination::extract_listing_links(&html, &search_url);
        if links.is_empty() {
            tracing::warn!(search_url, "search page carried no listings; stopping early");
            break;
        }

        let remaining = cfg.listing_demand - records.len();
        for link in links.iter().take(cfg.page_size.min(remaining)) {
            let record = match session.open_detail_page(link) {
                Ok(doc) => extractor.extract(&doc).await,
                Err(e) => {
                    tracing::warn!(link, error = %e, "render failed; emitting defaulted record");
                    ListingRecord::default()
                }
            };
            records.push(record);
            tracing::info!(collected = records.len(), "listing processed");
            sleep(Duration::from_millis(cfg.inter_request_delay_ms)).await;
        }

        page += 1;
    }

    Ok(records)
}
