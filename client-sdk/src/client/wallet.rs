use std::sync::Arc;

use alloy_primitives::Address;
use zkwallet_interfaces::{
    api::{
        provider::interface::ProviderClientInterface,
        signer::interface::{EthSignerInterface, ZkSignerInterface},
    },
    data::{
        account::AccountState,
        primitives::{AccountId, Nonce},
        tx::{Transfer, TransferRequest, TxEthSignature, Withdraw, WithdrawRequest, ZkSyncTx},
    },
};

use super::error::ClientError;

/// A Layer-2 account bound to its provider and signers.
pub struct Wallet {
    pub address: Address,
    pub provider: Arc<dyn ProviderClientInterface>,
    pub eth_signer: Arc<dyn EthSignerInterface>,
    pub zk_signer: Option<Arc<dyn ZkSignerInterface>>,

    account_id: Option<AccountId>,
}

impl Wallet {
    pub fn new(
        provider: Arc<dyn ProviderClientInterface>,
        eth_signer: Arc<dyn EthSignerInterface>,
        zk_signer: Option<Arc<dyn ZkSignerInterface>>,
    ) -> Self {
        Self {
            address: eth_signer.address(),
            provider,
            eth_signer,
            zk_signer,
            account_id: None,
        }
    }

    pub fn has_signer(&self) -> bool {
        self.zk_signer.is_some()
    }

    /// Cached account id, if it was resolved before.
    pub fn account_id(&self) -> Option<AccountId> {
        self.account_id
    }

    pub async fn get_account_state(&self) -> Result<AccountState, ClientError> {
        let state = self.provider.get_state(self.address).await?;
        Ok(state)
    }

    /// The explicit nonce when given, otherwise the committed nonce.
    pub async fn get_nonce(&self, explicit: Option<Nonce>) -> Result<Nonce, ClientError> {
        if let Some(nonce) = explicit {
            return Ok(nonce);
        }
        let state = self.get_account_state().await?;
        Ok(state.committed.nonce)
    }

    pub async fn get_account_id(&self) -> Result<Option<AccountId>, ClientError> {
        let state = self.get_account_state().await?;
        Ok(state.id)
    }

    pub async fn set_required_account_id_from_server(
        &mut self,
        action: &str,
    ) -> Result<AccountId, ClientError> {
        if let Some(account_id) = self.account_id {
            return Ok(account_id);
        }
        let account_id = self
            .get_account_id()
            .await?
            .ok_or_else(|| ClientError::AccountNotFound(action.to_string()))?;
        log::debug!("resolved account id {} for {}", account_id, self.address);
        self.account_id = Some(account_id);
        Ok(account_id)
    }

    fn zk_signer(&self) -> Result<&Arc<dyn ZkSignerInterface>, ClientError> {
        self.zk_signer.as_ref().ok_or(ClientError::SignerRequired)
    }

    fn required_account_id(&self) -> Result<AccountId, ClientError> {
        self.account_id.ok_or_else(|| {
            ClientError::UnexpectedError("account id is not resolved".to_string())
        })
    }

    pub async fn build_withdraw(
        &self,
        request: &WithdrawRequest,
        nonce: Nonce,
    ) -> Result<ZkSyncTx, ClientError> {
        let withdraw = Withdraw {
            account_id: self.required_account_id()?,
            from: self.address,
            to: request.to,
            token: request.token.id,
            amount: request.amount,
            fee: request.fee,
            nonce,
            fast_processing: request.fast_processing,
            signature: None,
        };
        let signed = self.zk_signer()?.sign_withdraw(withdraw).await?;
        Ok(ZkSyncTx::Withdraw(Box::new(signed)))
    }

    pub async fn build_transfer(
        &self,
        request: &TransferRequest,
        nonce: Nonce,
    ) -> Result<ZkSyncTx, ClientError> {
        let transfer = Transfer {
            account_id: self.required_account_id()?,
            from: self.address,
            to: request.to,
            token: request.token.id,
            amount: request.amount,
            fee: request.fee,
            nonce,
            signature: None,
        };
        let signed = self.zk_signer()?.sign_transfer(transfer).await?;
        Ok(ZkSyncTx::Transfer(Box::new(signed)))
    }

    pub async fn sign_batch_message(&self, message: &str) -> Result<TxEthSignature, ClientError> {
        let signature = self.eth_signer.sign_message(message.as_bytes()).await?;
        Ok(signature)
    }
}
