use common::env::Network;
use serde::{Deserialize, Serialize};

fn default_primary_token_symbol() -> String {
    "ETH".to_string()
}

fn default_notify_poll_interval() -> u64 {
    1
}

/// Client settings, read from `ZKWALLET_` prefixed environment variables
/// (`ZKWALLET_RESTRICTED_TOKENS=MLTT,PHNX`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub network: Network,
    /// Overrides the network's default provider endpoint.
    pub provider_url: Option<String>,
    pub l1_rpc_url: Option<String>,
    /// Symbols that can never be selected as the fee token.
    #[serde(default)]
    pub restricted_tokens: Vec<String>,
    #[serde(default = "default_primary_token_symbol")]
    pub primary_token_symbol: String,
    /// Seconds between receipt polls while waiting for commit or verify.
    #[serde(default = "default_notify_poll_interval")]
    pub notify_poll_interval: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: Network::Localhost,
            provider_url: None,
            l1_rpc_url: None,
            restricted_tokens: Vec::new(),
            primary_token_symbol: default_primary_token_symbol(),
            notify_poll_interval: default_notify_poll_interval(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("ZKWALLET_").from_env::<Self>()
    }

    pub fn provider_url(&self) -> String {
        self.provider_url
            .clone()
            .unwrap_or_else(|| self.network.default_provider_url().to_string())
    }

    /// Whether `symbol` is in the restricted set. Symbols are compared exactly.
    pub fn is_restricted_token(&self, symbol: &str) -> bool {
        self.restricted_tokens.iter().any(|restricted| restricted == symbol)
    }
}
