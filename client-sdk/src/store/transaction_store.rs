use alloy_primitives::{Address, U256};
use tokio::sync::watch;
use zkwallet_interfaces::{
    api::{
        gas_oracle::interface::GasPriceOracleInterface,
        provider::interface::ProviderClientInterface,
    },
    data::fee::TxFeeType,
};

use crate::client::{config::ClientConfig, error::ClientError, gas::fetch_gas_price};

use super::form_state::TransactionFormState;

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Observable state of the transfer/withdrawal screen. Subscribers are woken
/// only by writes that change the record.
pub struct TransactionStore {
    state: watch::Sender<TransactionFormState>,
    config: ClientConfig,
}

impl TransactionStore {
    pub fn new(config: &ClientConfig) -> Self {
        let (state, _) = watch::channel(TransactionFormState::default());
        Self {
            state,
            config: config.clone(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<TransactionFormState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> TransactionFormState {
        self.state.borrow().clone()
    }

    fn update(&self, modify: impl FnOnce(&mut TransactionFormState) -> bool) -> bool {
        self.state.send_if_modified(modify)
    }

    pub fn set_amount(&self, amount: &str) {
        self.update(|s| replace(&mut s.amount, amount.to_string()));
    }

    pub fn set_recipient(&self, recipient: &str) {
        self.update(|s| replace(&mut s.recipient, recipient.to_string()));
    }

    pub fn set_symbol_name(&self, symbol: Option<&str>) {
        self.update(|s| replace(&mut s.symbol_name, symbol.map(str::to_string)));
    }

    pub fn set_fee(&self, symbol: &str, amount: U256) {
        self.update(|s| s.fee.insert(symbol.to_string(), amount) != Some(amount));
    }

    pub fn set_fast_fee(&self, fast_fee: Option<U256>) {
        self.update(|s| replace(&mut s.fast_fee, fast_fee));
    }

    pub fn set_fast_withdrawal(&self, fast_withdrawal: bool) {
        self.update(|s| replace(&mut s.fast_withdrawal, fast_withdrawal));
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.update(|s| replace(&mut s.is_loading, is_loading));
    }

    pub fn open_modal(&self) {
        self.update(|s| replace(&mut s.is_modal_open, true));
    }

    pub fn close_modal(&self) {
        self.update(|s| replace(&mut s.is_modal_open, false));
    }

    pub fn set_transaction_closed(&self, closed: bool) {
        self.update(|s| replace(&mut s.is_transaction_closed, closed));
    }

    fn set_error(&self, error: Option<String>) {
        self.update(|s| replace(&mut s.last_error, error));
    }

    /// Clear the form back to its initial state.
    pub fn reset(&self) {
        self.update(|s| replace(s, TransactionFormState::default()));
    }

    pub fn is_restricted(&self, symbol: &str) -> bool {
        self.config.is_restricted_token(symbol)
    }

    /// Resolve `symbol` as the fee token, using `fallback` (or `""`) when the
    /// symbol is restricted. The result is cached as the current fee token.
    pub fn set_transfer_fee_token(&self, symbol: &str, fallback: Option<&str>) -> String {
        let resolved = if self.is_restricted(symbol) {
            fallback.unwrap_or_default().to_string()
        } else {
            symbol.to_string()
        };
        let cached = (!resolved.is_empty()).then(|| resolved.clone());
        self.update(|s| replace(&mut s.fee_token, cached));
        resolved
    }

    pub fn get_fee_token(&self) -> String {
        let (fee_token, symbol_name) = {
            let state = self.state.borrow();
            (state.fee_token.clone(), state.symbol_name.clone())
        };
        if let Some(fee_token) = fee_token.filter(|token| !token.is_empty()) {
            return fee_token;
        }
        match symbol_name {
            Some(symbol) => self.set_transfer_fee_token(&symbol, None),
            None => self.set_transfer_fee_token(&self.config.primary_token_symbol, None),
        }
    }

    /// Fee for the current form: the fast fee for fast withdrawals, otherwise
    /// the quoted fee of the fee token.
    pub fn get_fee_based_on_type(&self) -> Option<U256> {
        let fast_withdrawal = self.state.borrow().fast_withdrawal;
        if fast_withdrawal {
            return self.state.borrow().fast_fee;
        }
        let fee_token = self.get_fee_token();
        self.state.borrow().fee.get(&fee_token).copied()
    }

    /// Fetch the gas price into the gas cache.
    pub async fn refresh_gas_price(
        &self,
        oracle: &dyn GasPriceOracleInterface,
    ) -> Result<U256, ClientError> {
        self.set_loading(true);
        let result = fetch_gas_price(oracle).await;
        match &result {
            Ok(gas_price) => {
                let gas_price = *gas_price;
                self.update(|s| replace(&mut s.gas_price, Some(gas_price)));
                self.set_error(None);
            }
            Err(e) => self.set_error(Some(e.to_string())),
        }
        self.set_loading(false);
        result
    }

    /// Quote the transfer fee of every token and the fast withdrawal fee of the
    /// current fee token.
    pub async fn load_fees(
        &self,
        provider: &dyn ProviderClientInterface,
        address: Address,
        tokens: &[String],
    ) -> Result<(), ClientError> {
        self.set_loading(true);
        let result = self.load_fees_inner(provider, address, tokens).await;
        if let Err(e) = &result {
            log::warn!("failed to load fees: {}", e);
            self.set_error(Some(e.to_string()));
        }
        self.set_loading(false);
        result
    }

    async fn load_fees_inner(
        &self,
        provider: &dyn ProviderClientInterface,
        address: Address,
        tokens: &[String],
    ) -> Result<(), ClientError> {
        for token in tokens {
            let fee = provider
                .get_transaction_fee(TxFeeType::Transfer, address, token)
                .await?;
            self.set_fee(token, fee.total_fee);
        }
        let fee_token = self.get_fee_token();
        if !fee_token.is_empty() {
            let fast_fee = provider
                .get_transaction_fee(TxFeeType::FastWithdraw, address, &fee_token)
                .await?;
            self.set_fast_fee(Some(fast_fee.total_fee));
        }
        Ok(())
    }
}
