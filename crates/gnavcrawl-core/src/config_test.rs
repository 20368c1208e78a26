use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.listing_demand, 50);
    assert_eq!(cfg.page_size, 30);
    assert_eq!(cfg.tls_connect_timeout_secs, 5);
    assert!(cfg.search_base_url.ends_with("?p="));
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GNAVCRAWL_LISTING_DEMAND", "120");
    map.insert("GNAVCRAWL_PAGE_SIZE", "20");
    map.insert("GNAVCRAWL_OUTPUT_PATH", "/tmp/out.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.listing_demand, 120);
    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.output_path.to_str(), Some("/tmp/out.csv"));
}

#[test]
fn build_app_config_fails_with_invalid_demand() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GNAVCRAWL_LISTING_DEMAND", "many");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GNAVCRAWL_LISTING_DEMAND"),
        "expected InvalidEnvVar(GNAVCRAWL_LISTING_DEMAND), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GNAVCRAWL_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GNAVCRAWL_PAGE_SIZE"),
        "expected InvalidEnvVar(GNAVCRAWL_PAGE_SIZE), got: {result:?}"
    );
}
