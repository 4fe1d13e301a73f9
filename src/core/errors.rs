use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// No client is registered for the network
    #[error("Network {0} is not configured")]
    UnknownNetwork(String),

    /// The provider answered with a JSON-RPC error object
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// The request never produced a usable HTTP response
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The provider answered, but not with a hex quantity
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The provider call exceeded the configured timeout
    #[error("Provider call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for BalanceError {
    fn from(err: reqwest::Error) -> Self {
        // Provider URLs embed the API key
        let err = err.without_url();
        if err.is_timeout() {
            BalanceError::TransportError(format!("request timed out: {}", err))
        } else if err.is_decode() {
            BalanceError::MalformedResponse(err.to_string())
        } else {
            BalanceError::TransportError(err.to_string())
        }
    }
}
