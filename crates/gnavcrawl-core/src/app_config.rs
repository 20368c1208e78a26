use std::path::PathBuf;

/// Runtime configuration for the crawler, sourced from env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search-result URL base; the page number is appended as `?p=N`.
    pub search_base_url: String,
    /// Number of listings to collect before stopping.
    pub listing_demand: usize,
    /// Listings shown per search-result page; drives page advancement.
    pub page_size: usize,
    /// Destination CSV path.
    pub output_path: PathBuf,
    pub log_level: String,
    /// User agent sent on directory-page fetches.
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Connect timeout for the raw TLS probe socket.
    pub tls_connect_timeout_secs: u64,
    /// Pause between detail-page fetches.
    pub inter_request_delay_ms: u64,
}
