use gnavcrawl_core::ListingRecord;

use super::*;
use crate::document::StaticDocument;

/// A complete detail page in the directory's layout, minus the outbound
/// link so that scraping stays network-free.
fn full_detail_page() -> StaticDocument {
    StaticDocument::parse(
        r#"<html><body>
          <table class="basic-table">
            <tr><td><p id="info-name">すし処 松</p></td></tr>
            <tr id="info-phone"><td><span class="number">03-1234-5678</span></td></tr>
            <tr><td><a href="mailto:info@example.jp">メール</a></td></tr>
            <tr><td>
              <p class="adr slink">
                <span class="region">東京都渋谷区神南1-1-1</span>
                <span class="locality">渋谷ビル2F</span>
              </p>
            </td></tr>
          </table>
        </body></html>"#,
    )
}

#[test]
fn scrape_populates_every_document_field() {
    let draft = scrape(&full_detail_page());
    let record = draft.record;
    assert_eq!(record.name, "すし処 松");
    assert_eq!(record.phone, "03-1234-5678");
    assert_eq!(record.email, "info@example.jp");
    assert_eq!(record.prefecture, "東京都");
    assert_eq!(record.city, "渋谷区");
    assert_eq!(record.street, "1-1-1");
    assert_eq!(record.building, "渋谷ビル2F");
    assert_eq!(record.url, None);
    assert!(!record.tls_available);
    assert_eq!(draft.candidate_url, None);
}

#[test]
fn scrape_without_info_table_is_fully_defaulted() {
    let doc = StaticDocument::parse("<html><body><p>営業時間のご案内</p></body></html>");
    let draft = scrape(&doc);
    assert_eq!(draft.record, ListingRecord::default());
    assert_eq!(draft.candidate_url, None);
}

#[test]
fn scrape_missing_fields_stay_empty() {
    let doc = StaticDocument::parse(
        r#"<table class="basic-table">
             <tr><td><p id="info-name">蕎麦 竹</p></td></tr>
           </table>"#,
    );
    let record = scrape(&doc).record;
    assert_eq!(record.name, "蕎麦 竹");
    assert_eq!(record.phone, "");
    assert_eq!(record.email, "");
    assert_eq!(record.prefecture, "");
    assert_eq!(record.building, "");
}

#[test]
fn scrape_irregular_region_keeps_building() {
    // The address grammar fails on the abbreviated region, but the building
    // name comes from its own node and must survive.
    let doc = StaticDocument::parse(
        r#"<table class="basic-table">
             <tr><td>
               <p class="adr slink">
                 <span class="region">渋谷駅前すぐ</span>
                 <span class="locality">駅前ビル B1</span>
               </p>
             </td></tr>
           </table>"#,
    );
    let record = scrape(&doc).record;
    assert_eq!(record.prefecture, "");
    assert_eq!(record.city, "");
    assert_eq!(record.street, "");
    assert_eq!(record.building, "駅前ビル B1");
}

#[test]
fn scrape_picks_up_url_candidate() {
    let doc = StaticDocument::parse(
        r#"<table class="basic-table">
             <tr><td><a class="url go-off" data-o='{"b":"https","a":"example.co.jp"}'>site</a></td></tr>
           </table>"#,
    );
    let draft = scrape(&doc);
    assert_eq!(draft.candidate_url.as_deref(), Some("https://example.co.jp"));
}

#[test]
fn scrape_is_idempotent() {
    let doc = full_detail_page();
    assert_eq!(scrape(&doc), scrape(&doc));
}

#[tokio::test]
async fn extract_without_info_table_makes_no_network_calls() {
    let client = DirectoryClient::new(5, "gnavcrawl-test/0.1").unwrap();
    let extractor = Extractor::new(client, 5);
    let doc = StaticDocument::parse("<html><body></body></html>");
    let record = extractor.extract(&doc).await;
    assert_eq!(record, ListingRecord::default());
}

#[tokio::test]
async fn extract_without_candidate_skips_the_probe() {
    let client = DirectoryClient::new(5, "gnavcrawl-test/0.1").unwrap();
    let extractor = Extractor::new(client, 5);
    let record = extractor.extract(&full_detail_page()).await;
    assert_eq!(record.url, None);
    assert!(!record.tls_available);
}
