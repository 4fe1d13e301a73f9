mod config_tests;

use crate::core::errors::BalanceError;
use crate::core::services::{BalanceService, BalanceSettings};
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::providers::NetworkClient;
use crate::infrastructure::providers::registry::NetworkRegistry;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Scripted network client that records every call.
pub struct StubClient {
    response: Mutex<Result<u128, BalanceError>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    addresses: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn returning(balance: u128) -> Arc<Self> {
        Arc::new(Self::new(Ok(balance), None))
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::new(
            Err(BalanceError::ProviderError("upstream unavailable".to_string())),
            None,
        ))
    }

    pub fn delayed(balance: u128, delay: Duration) -> Arc<Self> {
        Arc::new(Self::new(Ok(balance), Some(delay)))
    }

    fn new(response: Result<u128, BalanceError>, delay: Option<Duration>) -> Self {
        StubClient {
            response: Mutex::new(response),
            delay,
            calls: AtomicUsize::new(0),
            addresses: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, response: Result<u128, BalanceError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.addresses.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkClient for StubClient {
    async fn get_native_balance(&self, address: &str) -> Result<u128, BalanceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.addresses.lock().unwrap().push(address.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.lock().unwrap().clone()
    }
}

pub fn create_test_registry(clients: &[(&str, Arc<StubClient>)]) -> NetworkRegistry {
    clients
        .iter()
        .fold(NetworkRegistry::builder(), |builder, (network, client)| {
            builder.with_client(*network, Arc::clone(client) as Arc<dyn NetworkClient>)
        })
        .build()
        .unwrap()
}

pub fn create_test_service(clients: &[(&str, Arc<StubClient>)]) -> BalanceService<InMemoryCache> {
    BalanceService::new(
        create_test_registry(clients),
        InMemoryCache::new(),
        BalanceSettings::default(),
    )
}
