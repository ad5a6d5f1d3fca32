use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::{
    primitives::{AccountId, Nonce, TokenId},
    token::Token,
};

/// Withdrawal from the Layer-2 network to an L1 address, as requested by the
/// caller. The nonce is optional; the batch builder assigns one when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub to: Address,
    pub token: Token,
    pub amount: U256,
    pub fee: U256,
    pub nonce: Option<Nonce>,
    #[serde(default)]
    pub fast_processing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to: Address,
    pub token: Token,
    pub amount: U256,
    pub fee: U256,
    pub nonce: Option<Nonce>,
}

/// Layer-2 signature produced by the network signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSignature {
    pub pub_key: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw {
    pub account_id: AccountId,
    pub from: Address,
    pub to: Address,
    pub token: TokenId,
    pub amount: U256,
    pub fee: U256,
    pub nonce: Nonce,
    pub fast_processing: bool,
    pub signature: Option<TxSignature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub account_id: AccountId,
    pub from: Address,
    pub to: Address,
    pub token: TokenId,
    pub amount: U256,
    pub fee: U256,
    pub nonce: Nonce,
    pub signature: Option<TxSignature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ZkSyncTx {
    Withdraw(Box<Withdraw>),
    Transfer(Box<Transfer>),
}

impl ZkSyncTx {
    pub fn nonce(&self) -> Nonce {
        match self {
            ZkSyncTx::Withdraw(tx) => tx.nonce,
            ZkSyncTx::Transfer(tx) => tx.nonce,
        }
    }

    pub fn account_id(&self) -> AccountId {
        match self {
            ZkSyncTx::Withdraw(tx) => tx.account_id,
            ZkSyncTx::Transfer(tx) => tx.account_id,
        }
    }

    pub fn is_signed(&self) -> bool {
        match self {
            ZkSyncTx::Withdraw(tx) => tx.signature.is_some(),
            ZkSyncTx::Transfer(tx) => tx.signature.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EthSignatureType {
    EthereumSignature,
    #[serde(rename = "EIP1271Signature")]
    Eip1271Signature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxEthSignature {
    #[serde(rename = "type")]
    pub kind: EthSignatureType,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedZkSyncTx {
    pub tx: ZkSyncTx,
    pub eth_signature: Option<TxEthSignature>,
}

impl From<ZkSyncTx> for SignedZkSyncTx {
    fn from(tx: ZkSyncTx) -> Self {
        Self {
            tx,
            eth_signature: None,
        }
    }
}
