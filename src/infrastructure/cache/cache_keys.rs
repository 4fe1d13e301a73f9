use crate::core::models::network::NetworkId;

/// Composite key of the balance cache. The address is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BalanceKey {
    pub address: String,
    pub network: NetworkId,
}

impl BalanceKey {
    pub fn new(address: &str, network: &NetworkId) -> Self {
        BalanceKey {
            address: address.to_string(),
            network: network.clone(),
        }
    }
}
