use alloy_primitives::{Address, U256};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::primitives::{AccountId, Nonce};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub nonce: Nonce,
    #[serde(default)]
    pub balances: HashMap<String, U256>,
}

/// Account as seen by the provider. `id` is `None` until the account has been
/// registered by its first incoming operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub address: Address,
    pub id: Option<AccountId>,
    pub committed: AccountSnapshot,
    pub verified: AccountSnapshot,
}

impl AccountState {
    pub fn unregistered(address: Address) -> Self {
        Self {
            address,
            id: None,
            committed: AccountSnapshot::default(),
            verified: AccountSnapshot::default(),
        }
    }
}
