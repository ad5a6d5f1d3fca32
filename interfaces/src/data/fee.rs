use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxFeeType {
    Transfer,
    Withdraw,
    FastWithdraw,
}

impl fmt::Display for TxFeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxFeeType::Transfer => write!(f, "transfer"),
            TxFeeType::Withdraw => write!(f, "withdraw"),
            TxFeeType::FastWithdraw => write!(f, "fast-withdraw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub fee_type: TxFeeType,
    pub gas_fee: U256,
    pub zkp_fee: U256,
    pub total_fee: U256,
}
