//! Official-URL resolution.
//!
//! The directory obfuscates a listing's outbound website link behind a
//! JSON-encoded custom attribute; some pages carry a plain fallback link
//! instead. Strategies are tried in order and the first hit wins:
//!
//! 1. `a.url.go-off` inside the info table, attribute `data-o` holding
//!    `{"b": scheme, "a": host}` — reconstructed as `scheme://host`.
//!    Malformed JSON or missing keys falls through, never fails.
//! 2. `ul#sv-site` container, link `a.sv-of.double`, `href` taken verbatim.
//!
//! A candidate from either strategy is then redirect-normalized by
//! [`crate::extract::Extractor::complete`]; the candidate survives unchanged
//! if that request fails.

use crate::document::DocumentQuery;

const PRIMARY_LINK: &str = "table.basic-table a.url.go-off";
const FALLBACK_LINK: &str = "ul#sv-site a.sv-of.double";

/// Extracts the outbound-URL candidate from a detail page, without any
/// network traffic. `None` means neither strategy found a link.
#[must_use]
pub fn candidate_url<D: DocumentQuery>(doc: &D) -> Option<String> {
    if let Some(raw) = doc.attr_of(PRIMARY_LINK, "data-o") {
        if let Some(url) = decode_data_o(&raw) {
            tracing::debug!(url, "decoded official URL from data-o attribute");
            return Some(url);
        }
        tracing::debug!(raw, "unusable data-o attribute; trying fallback link");
    }

    doc.attr_of(FALLBACK_LINK, "href")
}

/// Decodes the `data-o` JSON payload: `"b"` carries the scheme, `"a"` the
/// host. Anything malformed or incomplete is `None`.
fn decode_data_o(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let scheme = value.get("b")?.as_str()?;
    let host = value.get("a")?.as_str()?;
    Some(format!("{scheme}://{host}"))
}
