use envy::Error as EnvyError;
use zkwallet_client_sdk::client::error::ClientError;
use zkwallet_interfaces::{
    api::{error::ServerError, signer::interface::SignerError},
    data::error::DataError,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Env error:{0}")]
    EnvError(#[from] EnvyError),

    #[error("Client error: {0}")]
    ClientError(#[from] ClientError),

    #[error("Server error: {0}")]
    ServerError(#[from] ServerError),

    #[error("Signer error: {0}")]
    SignerError(#[from] SignerError),

    #[error("Parse error: {0}")]
    ParseError(#[from] DataError),

    #[error("Config error: {0}")]
    ConfigError(String),
}
