use crate::config::{Config, DEFAULT_LEGACY_ADDRESS};
use crate::core::models::network::NetworkId;
use std::collections::HashMap;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]);

    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.cache_ttl, Duration::from_secs(60));
    assert_eq!(config.provider_timeout, Duration::from_secs(10));
    assert_eq!(config.legacy_address, DEFAULT_LEGACY_ADDRESS);
    let networks: Vec<&str> = config.networks.iter().map(NetworkId::as_str).collect();
    assert_eq!(networks, vec!["eth-sepolia", "opt-sepolia", "base-sepolia", "polygon-mumbai"]);
}

#[test]
fn test_rpc_urls_from_template_and_overrides() {
    let config = config_from(&[
        ("API_KEY", "k3y"),
        ("NETWORKS", "eth-sepolia, base-sepolia"),
        ("RPC_URL_BASE_SEPOLIA", "https://sepolia.base.org"),
    ]);

    assert_eq!(
        config.network_configs(),
        vec![
            (
                NetworkId::from("eth-sepolia"),
                "https://eth-sepolia.g.alchemy.com/v2/k3y".to_string()
            ),
            (NetworkId::from("base-sepolia"), "https://sepolia.base.org".to_string()),
        ]
    );
}

#[test]
fn test_custom_template() {
    let config = config_from(&[
        ("NETWORKS", "A"),
        ("RPC_URL_TEMPLATE", "http://node/{network}?key={api_key}"),
        ("API_KEY", "xyz"),
    ]);
    assert_eq!(config.rpc_url(&NetworkId::from("A")), "http://node/A?key=xyz");
}

#[test]
fn test_blank_networks_are_skipped() {
    let config = config_from(&[("NETWORKS", " A, ,B,, ")]);
    let networks: Vec<&str> = config.networks.iter().map(NetworkId::as_str).collect();
    assert_eq!(networks, vec!["A", "B"]);
}

#[test]
fn test_numeric_overrides_and_fallbacks() {
    let config = config_from(&[
        ("PORT", "not-a-port"),
        ("CACHE_TTL_SECS", "5"),
        ("PROVIDER_TIMEOUT_SECS", "-1"),
    ]);

    assert_eq!(config.port, 3000);
    let settings = config.balance_settings();
    assert_eq!(settings.freshness_window, Duration::from_secs(5));
    assert_eq!(settings.provider_timeout, Duration::from_secs(10));
}

#[test]
fn test_debug_redacts_api_key() {
    let config = config_from(&[("API_KEY", "super-secret-key")]);
    let debug = format!("{:?}", config);
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_env_suffix() {
    assert_eq!(NetworkId::from("polygon-mumbai").env_suffix(), "POLYGON_MUMBAI");
    assert_eq!(NetworkId::from("eth.sepolia").env_suffix(), "ETH_SEPOLIA");
}
