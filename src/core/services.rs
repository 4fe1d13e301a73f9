use crate::core::errors::BalanceError;
use crate::core::models::balance::{BalanceResult, BalancesResponse};
use crate::core::models::network::NetworkId;
use crate::infrastructure::cache::BalanceCache;
use crate::infrastructure::providers::registry::NetworkRegistry;
use futures::future::join_all;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(60);
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSettings {
    /// Age after which a cached balance is treated as absent.
    pub freshness_window: Duration,
    /// Upper bound on a single provider call.
    pub provider_timeout: Duration,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        BalanceSettings {
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

pub struct BalanceService<C: BalanceCache> {
    registry: NetworkRegistry,
    cache: C,
    settings: BalanceSettings,
}

impl<C: BalanceCache> BalanceService<C> {
    pub fn new(registry: NetworkRegistry, cache: C, settings: BalanceSettings) -> Self {
        BalanceService {
            registry,
            cache,
            settings,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Configured networks in registry order.
    pub fn supported_networks(&self) -> Vec<NetworkId> {
        self.registry.network_ids().cloned().collect()
    }

    /// Queries one network directly, bypassing the cache. Never fails: an
    /// unknown network or a provider error yields a failed result.
    pub async fn fetch(&self, address: &str, network: &NetworkId) -> BalanceResult {
        match self.query_provider(address, network).await {
            Ok(raw) => BalanceResult::ok(network.clone(), raw.to_string()),
            Err(err) => {
                warn!(%network, address, error = %err, "Failed to fetch balance");
                BalanceResult::failed(network.clone())
            }
        }
    }

    async fn query_provider(&self, address: &str, network: &NetworkId) -> Result<u128, BalanceError> {
        let client = self
            .registry
            .resolve(network)
            .ok_or_else(|| BalanceError::UnknownNetwork(network.to_string()))?;
        let timeout = self.settings.provider_timeout;
        tokio::time::timeout(timeout, client.get_native_balance(address))
            .await
            .map_err(|_| BalanceError::Timeout(timeout))?
    }

    /// Serves a fresh cached balance when one exists, otherwise fetches and
    /// stores it. A failed fetch leaves any existing entry untouched.
    pub async fn fetch_with_cache(&self, address: &str, network: &NetworkId) -> BalanceResult {
        match self.cache.get(address, network).await {
            Ok(Some(entry)) if entry.is_fresh(Instant::now(), self.settings.freshness_window) => {
                debug!(%network, address, "Using cached balance");
                return BalanceResult::ok(network.clone(), entry.balance);
            }
            Ok(_) => debug!(%network, address, "Fetching new balance"),
            Err(err) => warn!(%network, address, error = %err, "Cache read failed, fetching"),
        }

        let result = self.fetch(address, network).await;
        if !result.failed {
            if let Err(err) = self.cache.put(address, network, &result.balance).await {
                warn!(%network, address, error = %err, "Failed to cache balance");
            }
        }
        result
    }

    /// Fetches `address` on every configured network concurrently and waits
    /// for all of them. Each network appears exactly once in the response.
    pub async fn aggregate_balances(&self, address: &str) -> BalancesResponse {
        let fetches = self
            .registry
            .network_ids()
            .map(|network| self.fetch_with_cache(address, network));
        let response: BalancesResponse = join_all(fetches).await.into_iter().collect();

        let failed = response.failed_networks();
        if !failed.is_empty() {
            debug!(address, failed = ?failed, "Some networks failed");
        }
        response
    }
}
