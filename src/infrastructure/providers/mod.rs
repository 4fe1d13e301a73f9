pub mod json_rpc;
pub mod registry;

use crate::core::errors::BalanceError;
use async_trait::async_trait;

/// A handle able to read native balances on one network.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Native balance of `address` in the network's smallest unit.
    async fn get_native_balance(&self, address: &str) -> Result<u128, BalanceError>;
}
