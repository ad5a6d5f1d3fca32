use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::data::{
    fee::TxFeeType,
    primitives::TxHash,
    tx::{SignedZkSyncTx, TxEthSignature},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error_type: String,
    pub code: u32,
    pub message: String,
}

/// Envelope wrapping every provider response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub result: Option<T>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBatchRequest {
    pub txs: Vec<SignedZkSyncTx>,
    pub signature: Vec<TxEthSignature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBatchResponse {
    pub transaction_hashes: Vec<TxHash>,
    pub batch_hash: Option<TxHash>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRequest {
    pub tx_type: TxFeeType,
    pub address: Address,
    pub token_like: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeResponse {
    pub gas_fee: U256,
    pub zkp_fee: U256,
    pub total_fee: U256,
}
