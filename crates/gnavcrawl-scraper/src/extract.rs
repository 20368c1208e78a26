//! Detail-page field extraction.
//!
//! [`scrape`] is the pure half: every DOM lookup, the address split, and the
//! outbound-URL candidate, with no network traffic — one [`ListingDraft`] per
//! document, however sparse. [`Extractor::extract`] completes the draft with
//! the redirect-following URL normalization and the TLS probe. A page whose
//! info table is missing yields a fully defaulted record; that is a normal
//! result, not an error.

use gnavcrawl_core::{InfoField, ListingRecord};

use crate::address;
use crate::client::DirectoryClient;
use crate::document::DocumentQuery;
use crate::resolve;
use crate::tls;

/// Root marker of the detail region. Without it the page has no usable data.
pub const INFO_TABLE: &str = "table.basic-table";

const NAME_NODE: &str = "table.basic-table p#info-name";
const PHONE_NODE: &str = "table.basic-table tr#info-phone span.number";
const EMAIL_LINK: &str = r#"table.basic-table a[href^="mailto:"]"#;
const ADDRESS_BLOCK: &str = "table.basic-table p.adr.slink";
const REGION_NODE: &str = "table.basic-table p.adr.slink span.region";
const LOCALITY_NODE: &str = "table.basic-table p.adr.slink span.locality";

/// A record scraped from the document, before network completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDraft {
    pub record: ListingRecord,
    /// Outbound-URL candidate, not yet redirect-normalized.
    pub candidate_url: Option<String>,
}

/// Completes scraped drafts with URL normalization and the TLS probe.
pub struct Extractor {
    client: DirectoryClient,
    tls_connect_timeout_secs: u64,
}

impl Extractor {
    #[must_use]
    pub fn new(client: DirectoryClient, tls_connect_timeout_secs: u64) -> Self {
        Self {
            client,
            tls_connect_timeout_secs,
        }
    }

    /// Extracts one full [`ListingRecord`] from a detail page.
    ///
    /// The TLS probe only runs when a URL was resolved; otherwise
    /// `tls_available` stays false without any connection attempt.
    pub async fn extract<D: DocumentQuery>(&self, doc: &D) -> ListingRecord {
        let draft = scrape(doc);
        self.complete(draft).await
    }

    /// Network half of extraction: redirect-follows the candidate URL and
    /// probes TLS availability of the result.
    pub async fn complete(&self, draft: ListingDraft) -> ListingRecord {
        let mut record = draft.record;

        if let Some(candidate) = draft.candidate_url {
            let url = self.client.final_url(&candidate).await;
            let probe = tls::probe(&url, self.tls_connect_timeout_secs).await;
            tracing::info!(url, message = probe.message, "TLS probe");
            record.tls_available = probe.available;
            record.url = Some(url);
        }

        record
    }
}

/// Scrapes every document-derived field into a [`ListingDraft`].
///
/// Absent nodes leave their fields empty; a missing info table short-circuits
/// to a fully defaulted draft.
#[must_use]
pub fn scrape<D: DocumentQuery>(doc: &D) -> ListingDraft {
    if !doc.exists(INFO_TABLE) {
        tracing::debug!("detail page has no info table; emitting defaulted record");
        return ListingDraft {
            record: ListingRecord::default(),
            candidate_url: None,
        };
    }

    let mut record = ListingRecord {
        name: info_text(doc, InfoField::Name),
        phone: info_text(doc, InfoField::Phone),
        email: info_text(doc, InfoField::Email),
        ..ListingRecord::default()
    };

    if doc.exists(ADDRESS_BLOCK) {
        let region = doc.text_of(REGION_NODE).unwrap_or_default();
        let parts = address::segment(&region);
        record.prefecture = parts.prefecture;
        record.city = parts.city;
        record.street = parts.street;
        // The building name lives in its own node, outside the regex split.
        record.building = doc.text_of(LOCALITY_NODE).unwrap_or_default();
    }

    let candidate_url = resolve::candidate_url(doc);

    ListingDraft {
        record,
        candidate_url,
    }
}

/// Reads one single-node field category. Absence is an empty string.
fn info_text<D: DocumentQuery>(doc: &D, field: InfoField) -> String {
    match field {
        InfoField::Name => doc.text_of(NAME_NODE).unwrap_or_default(),
        InfoField::Phone => doc.text_of(PHONE_NODE).unwrap_or_default(),
        InfoField::Email => doc
            .attr_of(EMAIL_LINK, "href")
            .and_then(|href| href.strip_prefix("mailto:").map(str::to_string))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
