use alloy_primitives::Address;
use async_trait::async_trait;

use crate::data::tx::{Transfer, TxEthSignature, Withdraw};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignerError {
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Signer unavailable: {0}")]
    Unavailable(String),
}

/// Signs Layer-2 transactions. The returned body carries the signature.
#[async_trait(?Send)]
pub trait ZkSignerInterface {
    async fn sign_withdraw(&self, withdraw: Withdraw) -> Result<Withdraw, SignerError>;

    async fn sign_transfer(&self, transfer: Transfer) -> Result<Transfer, SignerError>;
}

/// Signs human readable messages with the account's L1 key.
#[async_trait(?Send)]
pub trait EthSignerInterface {
    fn address(&self) -> Address;

    async fn sign_message(&self, message: &[u8]) -> Result<TxEthSignature, SignerError>;
}
