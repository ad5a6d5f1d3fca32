use alloy_primitives::U256;
use zkwallet_interfaces::api::gas_oracle::interface::GasPriceOracleInterface;

use super::error::ClientError;

/// Fetch the current L1 gas price. Failures keep the oracle's structured error.
pub async fn fetch_gas_price(oracle: &dyn GasPriceOracleInterface) -> Result<U256, ClientError> {
    let gas_price = oracle.get_gas_price().await.inspect_err(|e| {
        log::warn!("failed to fetch gas price: {}", e);
    })?;
    log::debug!("gas price: {} wei", gas_price);
    Ok(gas_price)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use zkwallet_interfaces::api::error::ServerError;

    use super::fetch_gas_price;
    use crate::client::{error::ClientError, mock::MockGasOracle};

    #[tokio::test]
    async fn test_fetch_gas_price() {
        let oracle = MockGasOracle::new(Ok(U256::from(42_000_000_000u64)));
        let price = fetch_gas_price(&oracle).await.unwrap();
        assert_eq!(price, U256::from(42_000_000_000u64));
    }

    #[tokio::test]
    async fn test_fetch_gas_price_keeps_structured_error() {
        let oracle = MockGasOracle::new(Err(ServerError::NetworkError("timeout".to_string())));
        let err = fetch_gas_price(&oracle).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::ServerError(ServerError::NetworkError(ref msg)) if msg == "timeout"
        ));
    }
}
