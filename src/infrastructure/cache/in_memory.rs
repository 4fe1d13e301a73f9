use crate::core::errors::BalanceError;
use crate::core::models::network::NetworkId;
use crate::infrastructure::cache::cache_keys::BalanceKey;
use crate::infrastructure::cache::{BalanceCache, CacheEntry};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Process-wide balance cache. Entries are never evicted, only superseded.
#[derive(Clone, Default)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<BalanceKey, CacheEntry>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.read().await.is_empty()
    }
}

#[async_trait]
impl BalanceCache for InMemoryCache {
    async fn get(&self, address: &str, network: &NetworkId) -> Result<Option<CacheEntry>, BalanceError> {
        let cache = self.cache.read().await;
        Ok(cache.get(&BalanceKey::new(address, network)).cloned())
    }

    async fn put(&self, address: &str, network: &NetworkId, balance: &str) -> Result<(), BalanceError> {
        let mut cache = self.cache.write().await;
        cache.insert(
            BalanceKey::new(address, network),
            CacheEntry {
                observed_at: Instant::now(),
                balance: balance.to_string(),
            },
        );
        Ok(())
    }
}
