//! Ethereum JSON-RPC balance client.

use crate::core::errors::BalanceError;
use crate::infrastructure::providers::NetworkClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

pub struct JsonRpcClient {
    client: reqwest::Client,
    url: String,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BalanceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BalanceError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(JsonRpcClient {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl NetworkClient for JsonRpcClient {
    async fn get_native_balance(&self, address: &str) -> Result<u128, BalanceError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "method": "eth_getBalance",
            "params": [address, "latest"],
            "id": 1
        });

        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(BalanceError::ProviderError(format!("{} (code {})", error.message, error.code)));
        }
        let quantity = response
            .result
            .ok_or_else(|| BalanceError::MalformedResponse("missing result".to_string()))?;
        parse_quantity(&quantity)
    }
}

/// Decodes a JSON-RPC hex quantity such as `0x1bc16d674ec80000`.
pub fn parse_quantity(quantity: &str) -> Result<u128, BalanceError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| BalanceError::MalformedResponse(format!("not a hex quantity: {}", quantity)))?;
    if digits.is_empty() {
        return Err(BalanceError::MalformedResponse(format!("empty hex quantity: {}", quantity)));
    }
    u128::from_str_radix(digits, 16)
        .map_err(|e| BalanceError::MalformedResponse(format!("invalid hex quantity {}: {}", quantity, e)))
}
