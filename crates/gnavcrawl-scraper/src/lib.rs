pub mod address;
pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod render;
pub mod resolve;
pub mod tls;

pub use address::{segment, AddressParts};
pub use client::DirectoryClient;
pub use document::{DocumentQuery, RenderedDocument, StaticDocument};
pub use error::ScraperError;
pub use extract::{scrape, Extractor, ListingDraft};
pub use render::BrowserSession;
pub use tls::TlsProbe;
