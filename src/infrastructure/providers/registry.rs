use crate::core::errors::BalanceError;
use crate::core::models::network::NetworkId;
use crate::infrastructure::providers::NetworkClient;
use crate::infrastructure::providers::json_rpc::JsonRpcClient;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Network to client mapping, fixed once built. Iteration follows
/// registration order.
#[derive(Clone)]
pub struct NetworkRegistry {
    clients: Vec<(NetworkId, Arc<dyn NetworkClient>)>,
}

impl NetworkRegistry {
    pub fn builder() -> NetworkRegistryBuilder {
        NetworkRegistryBuilder { clients: Vec::new() }
    }

    /// Builds one JSON-RPC client per `(network, rpc_url)` pair.
    pub fn from_configs(configs: &[(NetworkId, String)], timeout: Duration) -> Result<Self, BalanceError> {
        let mut builder = Self::builder();
        for (network, url) in configs {
            let client = JsonRpcClient::new(url.clone(), timeout)?;
            builder = builder.with_client(network.clone(), Arc::new(client));
        }
        builder.build()
    }

    pub fn resolve(&self, network: &NetworkId) -> Option<Arc<dyn NetworkClient>> {
        self.clients
            .iter()
            .find(|(id, _)| id == network)
            .map(|(_, client)| Arc::clone(client))
    }

    pub fn network_ids(&self) -> impl Iterator<Item = &NetworkId> {
        self.clients.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

pub struct NetworkRegistryBuilder {
    clients: Vec<(NetworkId, Arc<dyn NetworkClient>)>,
}

impl NetworkRegistryBuilder {
    pub fn with_client(mut self, network: impl Into<NetworkId>, client: Arc<dyn NetworkClient>) -> Self {
        self.clients.push((network.into(), client));
        self
    }

    pub fn build(self) -> Result<NetworkRegistry, BalanceError> {
        if self.clients.is_empty() {
            return Err(BalanceError::ConfigError("no networks configured".to_string()));
        }
        let mut seen = HashSet::new();
        if let Some((network, _)) = self.clients.iter().find(|(network, _)| !seen.insert(network.clone())) {
            return Err(BalanceError::ConfigError(format!("network {} configured twice", network)));
        }
        Ok(NetworkRegistry { clients: self.clients })
    }
}
