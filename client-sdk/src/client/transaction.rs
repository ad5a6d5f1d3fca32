use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use zkwallet_interfaces::{
    api::provider::interface::ProviderClientInterface,
    data::{
        primitives::TxHash,
        receipt::{ActionType, TransactionReceipt},
        tx::SignedZkSyncTx,
    },
};

use super::error::{ClientError, TxFailedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TxState {
    Sent,
    Committed,
    Verified,
    Failed,
}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxState::Sent => write!(f, "sent"),
            TxState::Committed => write!(f, "committed"),
            TxState::Verified => write!(f, "verified"),
            TxState::Failed => write!(f, "failed"),
        }
    }
}

/// Handle to a submitted transaction that follows it until finality.
pub struct Transaction {
    pub tx: Option<SignedZkSyncTx>,
    pub hash: TxHash,

    state: TxState,
    error: Option<TxFailedError>,
    commit_receipt: Option<TransactionReceipt>,
    verify_receipt: Option<TransactionReceipt>,
    provider: Arc<dyn ProviderClientInterface>,
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("hash", &self.hash)
            .field("state", &self.state)
            .field("error", &self.error)
            .finish()
    }
}

impl Transaction {
    pub fn new(
        tx: SignedZkSyncTx,
        hash: TxHash,
        provider: Arc<dyn ProviderClientInterface>,
    ) -> Self {
        Self {
            tx: Some(tx),
            hash,
            state: TxState::Sent,
            error: None,
            commit_receipt: None,
            verify_receipt: None,
            provider,
        }
    }

    /// Track a transaction known only by its hash.
    pub fn from_hash(provider: Arc<dyn ProviderClientInterface>, hash: TxHash) -> Self {
        Self {
            tx: None,
            hash,
            state: TxState::Sent,
            error: None,
            commit_receipt: None,
            verify_receipt: None,
            provider,
        }
    }

    pub fn state(&self) -> TxState {
        self.state
    }

    pub fn error(&self) -> Option<&TxFailedError> {
        self.error.as_ref()
    }

    fn error_if_failed(&self) -> Result<(), ClientError> {
        match &self.error {
            Some(error) => Err(ClientError::TransactionFailed(error.clone())),
            None => Ok(()),
        }
    }

    fn set_error_state(&mut self, receipt: TransactionReceipt) -> ClientError {
        let error = TxFailedError::new(receipt);
        log::warn!("transaction {} failed: {}", self.hash, error);
        self.state = TxState::Failed;
        self.error = Some(error.clone());
        ClientError::TransactionFailed(error)
    }

    /// Wait until the transaction is included in a committed block.
    pub async fn await_receipt(&mut self) -> Result<TransactionReceipt, ClientError> {
        self.error_if_failed()?;
        if self.state != TxState::Sent {
            return self.commit_receipt.clone().ok_or_else(|| {
                ClientError::UnexpectedError(format!("no commit receipt for {}", self.hash))
            });
        }

        let receipt = self
            .provider
            .notify_transaction(self.hash, ActionType::Commit)
            .await?;
        if receipt.is_failed() {
            return Err(self.set_error_state(receipt));
        }
        log::info!("transaction {} committed", self.hash);
        self.state = TxState::Committed;
        self.commit_receipt = Some(receipt.clone());
        Ok(receipt)
    }

    /// Wait until the block containing the transaction is verified.
    pub async fn await_verify_receipt(&mut self) -> Result<TransactionReceipt, ClientError> {
        self.await_receipt().await?;
        if let Some(receipt) = &self.verify_receipt {
            return Ok(receipt.clone());
        }

        let receipt = self
            .provider
            .notify_transaction(self.hash, ActionType::Verify)
            .await?;
        log::info!("transaction {} verified", self.hash);
        self.state = TxState::Verified;
        self.verify_receipt = Some(receipt.clone());
        Ok(receipt)
    }
}
