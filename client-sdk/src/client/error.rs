use zkwallet_interfaces::{
    api::{error::ServerError, signer::interface::SignerError},
    data::receipt::TransactionReceipt,
};

/// A transaction the network reported as failed, together with its receipt.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TxFailedError {
    pub message: String,
    pub receipt: TransactionReceipt,
}

impl TxFailedError {
    pub fn new(receipt: TransactionReceipt) -> Self {
        let reason = receipt.fail_reason.as_deref().unwrap_or("unknown reason");
        Self {
            message: format!("zkSync transaction failed: {}", reason),
            receipt,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Server error: {0}")]
    ServerError(#[from] ServerError),

    #[error("Signer error: {0}")]
    SignerError(#[from] SignerError),

    #[error("ZKSync signer is required for sending zksync transactions.")]
    SignerRequired,

    #[error("Failed to {0}: Account does not exist in the zkSync network")]
    AccountNotFound(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(#[from] TxFailedError),

    #[error("Batch error: {0}")]
    BatchError(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
