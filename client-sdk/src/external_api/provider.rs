use alloy_primitives::Address;
use async_trait::async_trait;
use zkwallet_interfaces::{
    api::{
        error::ServerError,
        provider::{
            interface::ProviderClientInterface,
            types::{
                ApiResponse, FeeRequest, FeeResponse, SubmitBatchRequest, SubmitBatchResponse,
            },
        },
    },
    data::{
        account::AccountState,
        fee::{Fee, TxFeeType},
        primitives::TxHash,
        receipt::{ActionType, TransactionReceipt},
        tx::{SignedZkSyncTx, TxEthSignature},
    },
};

use super::utils::{
    query::{get_request, into_result, post_request},
    time::sleep_for,
};

/// REST client of the Layer-2 provider.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    base_url: String,
    poll_interval: u64,
    client: reqwest::Client,
}

impl ProviderClient {
    pub fn new(base_url: &str, poll_interval: u64) -> Self {
        ProviderClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl ProviderClientInterface for ProviderClient {
    async fn get_state(&self, address: Address) -> Result<AccountState, ServerError> {
        let response: ApiResponse<AccountState> = get_request(
            &self.client,
            &self.base_url,
            &format!("/accounts/{:#x}", address),
        )
        .await?;
        let state = into_result(response)?.unwrap_or_else(|| AccountState::unregistered(address));
        Ok(state)
    }

    async fn submit_txs_batch(
        &self,
        txs: &[SignedZkSyncTx],
        eth_signatures: &[TxEthSignature],
    ) -> Result<Vec<TxHash>, ServerError> {
        let request = SubmitBatchRequest {
            txs: txs.to_vec(),
            signature: eth_signatures.to_vec(),
        };
        let response: ApiResponse<SubmitBatchResponse> = post_request(
            &self.client,
            &self.base_url,
            "/transactions/batches",
            &request,
        )
        .await?;
        let response = into_result(response)?.ok_or_else(|| {
            ServerError::InvalidResponse("batch submission returned no result".to_string())
        })?;
        if response.transaction_hashes.len() != txs.len() {
            return Err(ServerError::InvalidResponse(format!(
                "expected {} hashes, got {}",
                txs.len(),
                response.transaction_hashes.len()
            )));
        }
        Ok(response.transaction_hashes)
    }

    async fn get_tx_receipt(&self, hash: TxHash) -> Result<TransactionReceipt, ServerError> {
        let response: ApiResponse<TransactionReceipt> = get_request(
            &self.client,
            &self.base_url,
            &format!("/transactions/{}", hash),
        )
        .await?;
        // an unknown hash has not been executed yet
        Ok(into_result(response)?.unwrap_or_default())
    }

    async fn notify_transaction(
        &self,
        hash: TxHash,
        action: ActionType,
    ) -> Result<TransactionReceipt, ServerError> {
        loop {
            let receipt = self.get_tx_receipt(hash).await?;
            if receipt.satisfies(action) {
                return Ok(receipt);
            }
            log::debug!(
                "transaction {} not yet {:?}, polling again in {} seconds",
                hash,
                action,
                self.poll_interval
            );
            sleep_for(self.poll_interval).await;
        }
    }

    async fn get_transaction_fee(
        &self,
        fee_type: TxFeeType,
        address: Address,
        token: &str,
    ) -> Result<Fee, ServerError> {
        let request = FeeRequest {
            tx_type: fee_type,
            address,
            token_like: token.to_string(),
        };
        let response: ApiResponse<FeeResponse> =
            post_request(&self.client, &self.base_url, "/fee", &request).await?;
        let fee = into_result(response)?.ok_or_else(|| {
            ServerError::InvalidResponse(format!("no {} fee quoted for {}", fee_type, token))
        })?;
        Ok(Fee {
            fee_type,
            gas_fee: fee.gas_fee,
            zkp_fee: fee.zkp_fee,
            total_fee: fee.total_fee,
        })
    }
}
