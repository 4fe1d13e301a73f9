use crate::core::models::network::NetworkId;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Balance reported for a network whose fetch failed.
pub const SENTINEL_BALANCE: &str = "0";

/// Outcome of one fetch attempt for one (address, network) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResult {
    pub network: NetworkId,
    /// Decimal integer in the network's smallest unit.
    pub balance: String,
    pub failed: bool,
}

impl BalanceResult {
    pub fn ok(network: NetworkId, balance: String) -> Self {
        BalanceResult {
            network,
            balance,
            failed: false,
        }
    }

    pub fn failed(network: NetworkId) -> Self {
        BalanceResult {
            network,
            balance: SENTINEL_BALANCE.to_string(),
            failed: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq, Eq)]
pub struct NetworkBalance {
    pub balance: String,
    pub error: bool,
}

impl From<BalanceResult> for NetworkBalance {
    fn from(result: BalanceResult) -> Self {
        NetworkBalance {
            balance: result.balance,
            error: result.failed,
        }
    }
}

/// Balances for one address, one entry per registered network. Serializes
/// as a JSON object whose keys follow registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancesResponse {
    balances: Vec<(NetworkId, NetworkBalance)>,
}

impl BalancesResponse {
    pub fn get(&self, network: &NetworkId) -> Option<&NetworkBalance> {
        self.balances
            .iter()
            .find(|(id, _)| id == network)
            .map(|(_, balance)| balance)
    }

    pub fn networks(&self) -> impl Iterator<Item = &NetworkId> {
        self.balances.iter().map(|(network, _)| network)
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn failed_networks(&self) -> Vec<&NetworkId> {
        self.balances
            .iter()
            .filter(|(_, balance)| balance.error)
            .map(|(network, _)| network)
            .collect()
    }
}

impl Serialize for BalancesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.balances.len()))?;
        for (network, balance) in &self.balances {
            map.serialize_entry(network, balance)?;
        }
        map.end()
    }
}

impl FromIterator<BalanceResult> for BalancesResponse {
    fn from_iter<I: IntoIterator<Item = BalanceResult>>(results: I) -> Self {
        let balances = results
            .into_iter()
            .map(|result| (result.network.clone(), NetworkBalance::from(result)))
            .collect();
        BalancesResponse { balances }
    }
}
