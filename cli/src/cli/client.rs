use std::sync::Arc;

use zkwallet_client_sdk::{
    client::config::ClientConfig,
    external_api::{gas_oracle::GasOracleClient, provider::ProviderClient},
};

use super::error::CliError;

pub fn get_config() -> Result<ClientConfig, CliError> {
    let config = ClientConfig::from_env()?;
    log::debug!("using {} network", config.network);
    Ok(config)
}

pub fn get_provider(config: &ClientConfig) -> Arc<ProviderClient> {
    Arc::new(ProviderClient::new(
        &config.provider_url(),
        config.notify_poll_interval,
    ))
}

pub fn get_gas_oracle(config: &ClientConfig) -> Result<GasOracleClient, CliError> {
    let rpc_url = config
        .l1_rpc_url
        .as_deref()
        .ok_or_else(|| CliError::ConfigError("ZKWALLET_L1_RPC_URL is not set".to_string()))?;
    Ok(GasOracleClient::new(rpc_url))
}
