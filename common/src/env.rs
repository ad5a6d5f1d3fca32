use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    Mainnet,
    Rinkeby,
    Ropsten,
    Localhost,
}

impl Network {
    /// Default REST endpoint of the network's provider.
    pub fn default_provider_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.zksync.io/api/v0.2",
            Network::Rinkeby => "https://rinkeby-api.zksync.io/api/v0.2",
            Network::Ropsten => "https://ropsten-api.zksync.io/api/v0.2",
            Network::Localhost => "http://127.0.0.1:3001/api/v0.2",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Rinkeby => write!(f, "rinkeby"),
            Network::Ropsten => write!(f, "ropsten"),
            Network::Localhost => write!(f, "localhost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Network;

    #[test]
    fn test_network_deserialize() {
        let network: Network = serde_json::from_str("\"rinkeby\"").unwrap();
        assert_eq!(network, Network::Rinkeby);
        assert_eq!(network.to_string(), "rinkeby");
    }
}
