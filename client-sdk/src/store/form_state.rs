use alloy_primitives::U256;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Fields of the transfer and withdrawal form, as rendered by the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFormState {
    pub amount: String,
    pub recipient: String,
    pub symbol_name: Option<String>,
    /// Resolved fee token, never a restricted symbol.
    pub fee_token: Option<String>,
    pub fee: HashMap<String, U256>,
    pub fast_fee: Option<U256>,
    pub fast_withdrawal: bool,
    pub gas_price: Option<U256>,
    pub is_loading: bool,
    pub is_modal_open: bool,
    pub is_transaction_closed: bool,
    pub last_error: Option<String>,
}
