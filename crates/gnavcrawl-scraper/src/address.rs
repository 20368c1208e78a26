//! Japanese address segmentation.
//!
//! A region string like `東京都渋谷区神南1-1-1` is split into prefecture,
//! city, and street-number by an anchored grammar. City names vary in how
//! many administrative levels they carry, so three city tiers are tried in
//! priority order as separate full patterns — first tier whose complete
//! pattern matches from the start of the string wins:
//!
//! 1. A fixed allow-list of cities whose names would otherwise be cut short
//!    by the generic tier (e.g. `大町市` ends in a character the generic
//!    tier treats as a town suffix).
//! 2. District-plus-town/village names (`〜郡〜町` / `〜郡〜村`), with two
//!    district exceptions whose names embed a suffix character.
//! 3. Generic fallback: city-plus-ward (`〜市〜区`), or a single
//!    city/ward/town/village suffix matched lazily.
//!
//! The street number is everything from the first digit onward. Town text
//! between the city and the first digit (e.g. `神南`) is consumed but not
//! captured. An unmatched region yields empty parts — an irregular address
//! is a degradation, not an error.

use regex::Regex;

/// Prefecture: 2–3 characters ending in 都/道/府/県.
const PREFECTURE_PATTERN: &str = r"(...??[都道府県])";

/// Street number: first digit (ASCII or full-width) to end of string.
const STREET_PATTERN: &str = r"(\d.*)";

/// City tiers, highest priority first. Each is a capture group for the city
/// span only; trailing town text is matched outside the group.
const CITY_TIERS: [&str; 3] = [
    // Tier 1: allow-listed cities.
    r"((?:旭川|伊達|石狩|盛岡|奥州|田村|南相馬|那須塩原|東村山|武蔵村山|羽村|十日町|上越|富山|野々市|大町|蒲郡|四日市|姫路|大和郡山|廿日市|下松|岩国|田川|大村)市)",
    // Tier 2: district + town/village, with the 玉村/大町 exceptions.
    r"(.+?郡(?:玉村|大町|.+?)[町村])",
    // Tier 3: generic city+ward, or single-suffix fallback.
    r"(.+?市.+?区|.+?[市区町村])",
];

/// Prefecture / city / street split of one region string.
///
/// All fields default to empty when the grammar does not match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub prefecture: String,
    pub city: String,
    pub street: String,
}

/// Segments a raw region string into [`AddressParts`].
///
/// The string is expected to begin with a full address (no leading postal
/// code or separators); anything else fails every tier and returns the
/// defaulted parts.
#[must_use]
pub fn segment(region: &str) -> AddressParts {
    for city_tier in CITY_TIERS {
        let pattern = format!("^{PREFECTURE_PATTERN}{city_tier}.*?{STREET_PATTERN}");
        let re = Regex::new(&pattern).expect("valid regex");
        if let Some(caps) = re.captures(region) {
            return AddressParts {
                prefecture: caps[1].to_string(),
                city: caps[2].to_string(),
                street: caps[3].to_string(),
            };
        }
    }

    tracing::debug!(region, "region text did not match the address grammar");
    AddressParts::default()
}
