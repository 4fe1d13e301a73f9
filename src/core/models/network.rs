use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Identifier of a configured network, e.g. `eth-sepolia`.
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        NetworkId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix used for per-network environment overrides: `eth-sepolia` -> `ETH_SEPOLIA`.
    pub fn env_suffix(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        NetworkId(id.to_string())
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        NetworkId(id)
    }
}
