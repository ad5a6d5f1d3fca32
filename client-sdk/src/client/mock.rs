//! In-memory implementations of the external service traits for unit tests.

use std::sync::Mutex;

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use hashbrown::{HashMap, HashSet};
use zkwallet_interfaces::{
    api::{
        error::ServerError,
        gas_oracle::interface::GasPriceOracleInterface,
        provider::interface::ProviderClientInterface,
        signer::interface::{EthSignerInterface, SignerError, ZkSignerInterface},
    },
    data::{
        account::{AccountSnapshot, AccountState},
        fee::{Fee, TxFeeType},
        primitives::{AccountId, BlockNumber, Nonce, TokenId, TxHash},
        receipt::{ActionType, BlockInfo, TransactionReceipt},
        token::Token,
        tx::{EthSignatureType, SignedZkSyncTx, Transfer, TxEthSignature, TxSignature, Withdraw},
    },
};

pub fn eth_token() -> Token {
    Token {
        id: TokenId(0),
        symbol: "ETH".to_string(),
        address: Address::ZERO,
        decimals: 18,
    }
}

pub fn usdc_token() -> Token {
    Token {
        id: TokenId(2),
        symbol: "USDC".to_string(),
        address: Address::repeat_byte(0xaa),
        decimals: 6,
    }
}

pub fn hash_for_nonce(nonce: Nonce) -> TxHash {
    TxHash(B256::left_padding_from(&nonce.0.to_be_bytes()))
}

pub fn committed_receipt(verified: bool) -> TransactionReceipt {
    TransactionReceipt {
        executed: true,
        success: Some(true),
        fail_reason: None,
        block: Some(BlockInfo {
            block_number: BlockNumber(12),
            committed: true,
            verified,
        }),
    }
}

pub fn failed_receipt(reason: &str) -> TransactionReceipt {
    TransactionReceipt {
        executed: true,
        success: Some(false),
        fail_reason: Some(reason.to_string()),
        block: None,
    }
}

pub struct MockProvider {
    pub state: Mutex<AccountState>,
    pub submitted: Mutex<Vec<(Vec<SignedZkSyncTx>, Vec<TxEthSignature>)>>,
    pub failing: Mutex<HashSet<TxHash>>,
    pub notifications: Mutex<Vec<(TxHash, ActionType)>>,
    pub fees: Mutex<HashMap<(TxFeeType, String), U256>>,
    pub state_calls: Mutex<usize>,
}

impl MockProvider {
    pub fn new(address: Address, id: Option<AccountId>, nonce: Nonce) -> Self {
        let state = AccountState {
            address,
            id,
            committed: AccountSnapshot {
                nonce,
                balances: HashMap::new(),
            },
            verified: AccountSnapshot::default(),
        };
        Self {
            state: Mutex::new(state),
            submitted: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            notifications: Mutex::new(Vec::new()),
            fees: Mutex::new(HashMap::new()),
            state_calls: Mutex::new(0),
        }
    }

    pub fn fail_tx(&self, hash: TxHash) {
        self.failing.lock().unwrap().insert(hash);
    }

    pub fn set_fee(&self, fee_type: TxFeeType, token: &str, amount: U256) {
        self.fees
            .lock()
            .unwrap()
            .insert((fee_type, token.to_string()), amount);
    }

    pub fn submitted_batches(&self) -> Vec<(Vec<SignedZkSyncTx>, Vec<TxEthSignature>)> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn state_calls(&self) -> usize {
        *self.state_calls.lock().unwrap()
    }
}

#[async_trait(?Send)]
impl ProviderClientInterface for MockProvider {
    async fn get_state(&self, _address: Address) -> Result<AccountState, ServerError> {
        *self.state_calls.lock().unwrap() += 1;
        Ok(self.state.lock().unwrap().clone())
    }

    async fn submit_txs_batch(
        &self,
        txs: &[SignedZkSyncTx],
        eth_signatures: &[TxEthSignature],
    ) -> Result<Vec<TxHash>, ServerError> {
        self.submitted
            .lock()
            .unwrap()
            .push((txs.to_vec(), eth_signatures.to_vec()));
        Ok(txs.iter().map(|tx| hash_for_nonce(tx.tx.nonce())).collect())
    }

    async fn get_tx_receipt(&self, hash: TxHash) -> Result<TransactionReceipt, ServerError> {
        if self.failing.lock().unwrap().contains(&hash) {
            return Ok(failed_receipt("Not enough balance"));
        }
        Ok(committed_receipt(false))
    }

    async fn notify_transaction(
        &self,
        hash: TxHash,
        action: ActionType,
    ) -> Result<TransactionReceipt, ServerError> {
        self.notifications.lock().unwrap().push((hash, action));
        if self.failing.lock().unwrap().contains(&hash) {
            return Ok(failed_receipt("Not enough balance"));
        }
        Ok(committed_receipt(action == ActionType::Verify))
    }

    async fn get_transaction_fee(
        &self,
        fee_type: TxFeeType,
        _address: Address,
        token: &str,
    ) -> Result<Fee, ServerError> {
        let total_fee = self
            .fees
            .lock()
            .unwrap()
            .get(&(fee_type, token.to_string()))
            .copied()
            .ok_or_else(|| ServerError::ApiError(format!("no fee for {token}")))?;
        Ok(Fee {
            fee_type,
            gas_fee: total_fee,
            zkp_fee: U256::ZERO,
            total_fee,
        })
    }
}

#[derive(Default)]
pub struct MockZkSigner {
    pub fail_on_nonce: Option<Nonce>,
    pub signed: Mutex<Vec<Nonce>>,
}

impl MockZkSigner {
    pub fn failing_on(nonce: Nonce) -> Self {
        Self {
            fail_on_nonce: Some(nonce),
            signed: Mutex::new(Vec::new()),
        }
    }

    fn sign(&self, nonce: Nonce) -> Result<TxSignature, SignerError> {
        if self.fail_on_nonce == Some(nonce) {
            return Err(SignerError::SigningFailed(format!("nonce {nonce}")));
        }
        self.signed.lock().unwrap().push(nonce);
        Ok(TxSignature {
            pub_key: "mock".to_string(),
            signature: format!("sig-{nonce}"),
        })
    }
}

#[async_trait(?Send)]
impl ZkSignerInterface for MockZkSigner {
    async fn sign_withdraw(&self, mut withdraw: Withdraw) -> Result<Withdraw, SignerError> {
        withdraw.signature = Some(self.sign(withdraw.nonce)?);
        Ok(withdraw)
    }

    async fn sign_transfer(&self, mut transfer: Transfer) -> Result<Transfer, SignerError> {
        transfer.signature = Some(self.sign(transfer.nonce)?);
        Ok(transfer)
    }
}

pub struct MockEthSigner {
    pub address: Address,
    pub messages: Mutex<Vec<String>>,
}

impl MockEthSigner {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl EthSignerInterface for MockEthSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, message: &[u8]) -> Result<TxEthSignature, SignerError> {
        self.messages
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(message).to_string());
        Ok(TxEthSignature {
            kind: EthSignatureType::EthereumSignature,
            signature: format!("0x{:02x}", message.len()),
        })
    }
}

pub struct MockGasOracle {
    pub result: Result<U256, ServerError>,
}

impl MockGasOracle {
    pub fn new(result: Result<U256, ServerError>) -> Self {
        Self { result }
    }
}

#[async_trait(?Send)]
impl GasPriceOracleInterface for MockGasOracle {
    async fn get_gas_price(&self) -> Result<U256, ServerError> {
        self.result.clone()
    }
}
