use crate::core::services::BalanceService;
use crate::infrastructure::cache::in_memory::InMemoryCache;

/// Shared state behind every route.
pub struct ApiState {
    pub service: BalanceService<InMemoryCache>,
    /// Address served by the legacy `GET /api` route.
    pub legacy_address: String,
}

impl ApiState {
    pub fn new(service: BalanceService<InMemoryCache>, legacy_address: impl Into<String>) -> Self {
        ApiState {
            service,
            legacy_address: legacy_address.into(),
        }
    }
}
