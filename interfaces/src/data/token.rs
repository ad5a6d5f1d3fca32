use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::primitives::TokenId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: TokenId,
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
}

impl Token {
    pub fn format_amount(&self, amount: U256) -> String {
        format_token_amount(amount, self.decimals)
    }
}

/// Renders a base-unit amount as a decimal string, e.g. `1500000` with 6
/// decimals becomes `1.5`. Whole amounts keep a single `.0`.
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return format!("{amount}.0");
    }
    let unit = U256::from(10u64).pow(U256::from(decimals));
    let integer = amount / unit;
    let fraction = amount % unit;
    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{integer}.0")
    } else {
        format!("{integer}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::format_token_amount;

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_token_amount(U256::from(2_000_000u64), 6), "2.0");
        assert_eq!(format_token_amount(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_token_amount(U256::ZERO, 18), "0.0");
        assert_eq!(format_token_amount(U256::from(42u64), 0), "42.0");
    }
}
