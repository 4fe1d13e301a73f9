pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::BalanceError;
use crate::core::models::network::NetworkId;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// Last observed balance for one (address, network) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub observed_at: Instant,
    pub balance: String,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        is_fresh(self, now, window)
    }
}

/// An entry is fresh while strictly younger than `window`.
pub fn is_fresh(entry: &CacheEntry, now: Instant, window: Duration) -> bool {
    now.saturating_duration_since(entry.observed_at) < window
}

#[async_trait]
pub trait BalanceCache: Send + Sync {
    /// Returns the stored entry regardless of its age.
    async fn get(&self, address: &str, network: &NetworkId) -> Result<Option<CacheEntry>, BalanceError>;

    /// Replaces any entry for the pair with `{observed_at: now, balance}`.
    async fn put(&self, address: &str, network: &NetworkId, balance: &str) -> Result<(), BalanceError>;
}
