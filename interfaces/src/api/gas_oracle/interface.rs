use alloy_primitives::U256;
use async_trait::async_trait;

use crate::api::error::ServerError;

#[async_trait(?Send)]
pub trait GasPriceOracleInterface {
    // Current L1 gas price in wei
    async fn get_gas_price(&self) -> Result<U256, ServerError>;
}
