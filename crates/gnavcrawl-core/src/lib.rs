use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod app_config;
mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

/// One crawled listing, in CSV column order.
///
/// Every field defaults to empty/false: a listing is never rejected, only
/// left partially populated when the detail page lacks a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Restaurant display name.
    pub name: String,
    /// Phone number as rendered on the page.
    pub phone: String,
    /// Contact email, `mailto:` prefix stripped.
    pub email: String,
    pub prefecture: String,
    pub city: String,
    pub street: String,
    /// Building name, sourced from its own node rather than the address split.
    pub building: String,
    /// Official website URL after decode/fallback and redirect-following.
    pub url: Option<String>,
    /// Result of the independent TLS handshake probe against `url`'s host.
    pub tls_available: bool,
}

/// Categories of single-node detail fields.
///
/// A closed enumeration: invalid categories cannot reach the extractor.
/// String input is rejected at the [`FromStr`] boundary instead of being
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    Name,
    Phone,
    Email,
}

impl std::fmt::Display for InfoField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfoField::Name => write!(f, "name"),
            InfoField::Phone => write!(f, "phone"),
            InfoField::Email => write!(f, "email"),
        }
    }
}

impl FromStr for InfoField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(InfoField::Name),
            "phone" => Ok(InfoField::Phone),
            "email" => Ok(InfoField::Email),
            other => Err(CoreError::InvalidField(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid field category: {0}")]
    InvalidField(String),
}

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
