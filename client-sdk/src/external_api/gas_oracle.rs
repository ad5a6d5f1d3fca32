use alloy_primitives::U256;
use async_trait::async_trait;
use zkwallet_interfaces::api::{
    error::ServerError,
    gas_oracle::{
        interface::GasPriceOracleInterface,
        types::{JsonRpcRequest, JsonRpcResponse},
    },
};

use super::utils::query::post_request;

/// Reads the gas price from an Ethereum JSON-RPC node.
#[derive(Debug, Clone)]
pub struct GasOracleClient {
    rpc_url: String,
    client: reqwest::Client,
}

impl GasOracleClient {
    pub fn new(rpc_url: &str) -> Self {
        GasOracleClient {
            rpc_url: rpc_url.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl GasPriceOracleInterface for GasOracleClient {
    async fn get_gas_price(&self) -> Result<U256, ServerError> {
        let request = JsonRpcRequest::new(1, "eth_gasPrice", Vec::<()>::new());
        let response: JsonRpcResponse<U256> =
            post_request(&self.client, &self.rpc_url, "", &request).await?;
        if let Some(error) = response.error {
            return Err(ServerError::ApiError(format!(
                "eth_gasPrice failed ({}): {}",
                error.code, error.message
            )));
        }
        response
            .result
            .ok_or_else(|| ServerError::InvalidResponse("eth_gasPrice returned no result".into()))
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use zkwallet_interfaces::api::{
        error::ServerError, gas_oracle::interface::GasPriceOracleInterface,
    };

    use super::GasOracleClient;

    #[tokio::test]
    async fn test_get_gas_price() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({ "method": "eth_gasPrice" })))
            .with_status(200)
            .with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": "0x3b9aca00" }).to_string())
            .create_async()
            .await;

        let oracle = GasOracleClient::new(&format!("{}/", server.url()));
        let price = oracle.get_gas_price().await.unwrap();
        assert_eq!(price, U256::from(1_000_000_000u64));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_gas_price_rpc_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": { "code": -32000, "message": "header not found" }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let oracle = GasOracleClient::new(&format!("{}/", server.url()));
        let err = oracle.get_gas_price().await.unwrap_err();
        assert!(matches!(err, ServerError::ApiError(ref msg) if msg.contains("header not found")));
        mock.assert_async().await;
    }
}
