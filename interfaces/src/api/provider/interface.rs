use alloy_primitives::Address;
use async_trait::async_trait;

use crate::{
    api::error::ServerError,
    data::{
        account::AccountState,
        fee::{Fee, TxFeeType},
        primitives::TxHash,
        receipt::{ActionType, TransactionReceipt},
        tx::{SignedZkSyncTx, TxEthSignature},
    },
};

#[async_trait(?Send)]
pub trait ProviderClientInterface {
    // Get the committed and verified state of an account
    async fn get_state(&self, address: Address) -> Result<AccountState, ServerError>;

    // Submit signed transactions as one atomic batch, returns hashes in input order
    async fn submit_txs_batch(
        &self,
        txs: &[SignedZkSyncTx],
        eth_signatures: &[TxEthSignature],
    ) -> Result<Vec<TxHash>, ServerError>;

    // Get the current receipt of a transaction
    async fn get_tx_receipt(&self, hash: TxHash) -> Result<TransactionReceipt, ServerError>;

    // Resolve once the transaction reached the requested action or failed
    async fn notify_transaction(
        &self,
        hash: TxHash,
        action: ActionType,
    ) -> Result<TransactionReceipt, ServerError>;

    // Quote the fee of a transaction type paid in `token`
    async fn get_transaction_fee(
        &self,
        fee_type: TxFeeType,
        address: Address,
        token: &str,
    ) -> Result<Fee, ServerError>;
}
