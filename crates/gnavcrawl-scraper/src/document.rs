//! The document-query seam shared by both front-ends.
//!
//! Extraction only ever needs three capabilities from a detail page: check
//! that an element exists, read an element's text, and read an element's
//! attribute — always "first match of a CSS selector". [`StaticDocument`]
//! answers them from a parsed HTML tree, [`RenderedDocument`] from a live
//! headless-Chrome tab. Everything downstream of this trait is backend-agnostic.

use std::sync::Arc;

use headless_chrome::Tab;
use scraper::{Html, Selector};

/// Query capabilities of a parsed detail page.
pub trait DocumentQuery {
    /// Whether any element matches `selector`.
    fn exists(&self, selector: &str) -> bool;

    /// Trimmed text content of the first element matching `selector`.
    fn text_of(&self, selector: &str) -> Option<String>;

    /// Attribute value of the first element matching `selector`.
    fn attr_of(&self, selector: &str, attr: &str) -> Option<String>;
}

/// Detail page backed by a statically fetched, parsed HTML tree.
pub struct StaticDocument {
    html: Html,
}

impl StaticDocument {
    #[must_use]
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

impl DocumentQuery for StaticDocument {
    fn exists(&self, selector: &str) -> bool {
        let sel = Selector::parse(selector).expect("valid selector");
        self.html.select(&sel).next().is_some()
    }

    fn text_of(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).expect("valid selector");
        let element = self.html.select(&sel).next()?;
        let text = element.text().collect::<String>().trim().to_string();
        Some(text)
    }

    fn attr_of(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = Selector::parse(selector).expect("valid selector");
        let element = self.html.select(&sel).next()?;
        element.value().attr(attr).map(str::to_string)
    }
}

/// Detail page backed by a live rendered DOM in a headless-Chrome tab.
///
/// CDP lookups fail when an element is absent; those failures are mapped to
/// `None`/`false`, matching the static backend's absence semantics.
pub struct RenderedDocument {
    tab: Arc<Tab>,
}

impl RenderedDocument {
    #[must_use]
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }
}

impl DocumentQuery for RenderedDocument {
    fn exists(&self, selector: &str) -> bool {
        self.tab.find_element(selector).is_ok()
    }

    fn text_of(&self, selector: &str) -> Option<String> {
        let element = self.tab.find_element(selector).ok()?;
        let text = element.get_inner_text().ok()?;
        Some(text.trim().to_string())
    }

    fn attr_of(&self, selector: &str, attr: &str) -> Option<String> {
        let element = self.tab.find_element(selector).ok()?;
        element.get_attribute_value(attr).ok()?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_document_finds_text() {
        let doc = StaticDocument::parse(r#"<p id="info-name">  すし処 松  </p>"#);
        assert_eq!(doc.text_of("p#info-name").as_deref(), Some("すし処 松"));
    }

    #[test]
    fn static_document_reads_attribute() {
        let doc = StaticDocument::parse(r#"<a class="url go-off" data-o='{"a":"x"}'>site</a>"#);
        assert_eq!(
            doc.attr_of("a.url.go-off", "data-o").as_deref(),
            Some(r#"{"a":"x"}"#)
        );
    }

    #[test]
    fn static_document_missing_element_is_none() {
        let doc = StaticDocument::parse("<div></div>");
        assert!(!doc.exists("table.basic-table"));
        assert_eq!(doc.text_of("p#info-name"), None);
        assert_eq!(doc.attr_of("a.url.go-off", "data-o"), None);
    }

    #[test]
    fn static_document_matches_href_prefix_selector() {
        let doc = StaticDocument::parse(
            r#"<table class="basic-table"><tr><td><a href="mailto:a@b.jp">mail</a></td></tr></table>"#,
        );
        assert_eq!(
            doc.attr_of(r#"table.basic-table a[href^="mailto:"]"#, "href")
                .as_deref(),
            Some("mailto:a@b.jp")
        );
    }
}
