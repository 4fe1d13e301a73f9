use crate::core::models::network::NetworkId;
use crate::core::services::{BalanceSettings, DEFAULT_FRESHNESS_WINDOW, DEFAULT_PROVIDER_TIMEOUT};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_NETWORKS: &str = "eth-sepolia,opt-sepolia,base-sepolia,polygon-mumbai";
pub const DEFAULT_RPC_URL_TEMPLATE: &str = "https://{network}.g.alchemy.com/v2/{api_key}";
pub const DEFAULT_LEGACY_ADDRESS: &str = "0x3a92924f2c8aAA64E7AEF846f73C0463A2f54173";

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub api_key: String,
    pub networks: Vec<NetworkId>,
    pub rpc_url_template: String,
    /// Per-network URLs taken from `RPC_URL_<NETWORK>`.
    pub rpc_url_overrides: Vec<(NetworkId, String)>,
    pub cache_ttl: Duration,
    pub provider_timeout: Duration,
    pub legacy_address: String,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("api_key", &"<redacted>")
            .field("networks", &self.networks)
            .field("rpc_url_template", &self.rpc_url_template)
            .field("rpc_url_overrides", &"<redacted>")
            .field("cache_ttl", &self.cache_ttl)
            .field("provider_timeout", &self.provider_timeout)
            .field("legacy_address", &self.legacy_address)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or unparsable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let networks = parse_networks(&lookup("NETWORKS").unwrap_or_else(|| DEFAULT_NETWORKS.to_string()));
        let rpc_url_overrides = networks
            .iter()
            .filter_map(|network| {
                lookup(&format!("RPC_URL_{}", network.env_suffix())).map(|url| (network.clone(), url))
            })
            .collect();

        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            api_key: lookup("API_KEY").unwrap_or_default(),
            networks,
            rpc_url_template: lookup("RPC_URL_TEMPLATE").unwrap_or_else(|| DEFAULT_RPC_URL_TEMPLATE.to_string()),
            rpc_url_overrides,
            cache_ttl: lookup("CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_FRESHNESS_WINDOW),
            provider_timeout: lookup("PROVIDER_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_PROVIDER_TIMEOUT),
            legacy_address: lookup("LEGACY_ADDRESS").unwrap_or_else(|| DEFAULT_LEGACY_ADDRESS.to_string()),
        }
    }

    pub fn balance_settings(&self) -> BalanceSettings {
        BalanceSettings {
            freshness_window: self.cache_ttl,
            provider_timeout: self.provider_timeout,
        }
    }

    pub fn rpc_url(&self, network: &NetworkId) -> String {
        self.rpc_url_overrides
            .iter()
            .find(|(id, _)| id == network)
            .map(|(_, url)| url.clone())
            .unwrap_or_else(|| {
                self.rpc_url_template
                    .replace("{network}", network.as_str())
                    .replace("{api_key}", &self.api_key)
            })
    }

    /// `(network, rpc_url)` pairs in configured order.
    pub fn network_configs(&self) -> Vec<(NetworkId, String)> {
        self.networks
            .iter()
            .map(|network| (network.clone(), self.rpc_url(network)))
            .collect()
    }
}

fn parse_networks(raw: &str) -> Vec<NetworkId> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(NetworkId::from)
        .collect()
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
