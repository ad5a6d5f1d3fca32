use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use zkwallet_interfaces::api::{
    error::ServerError,
    provider::types::{ApiResponse, ResponseStatus},
};

use super::retry::with_retry;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

pub async fn post_request<B: Serialize, R: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &str,
    body: &B,
) -> Result<R, ServerError> {
    let url = format!("{}{}", base_url, endpoint);
    let body_str =
        serde_json::to_string(body).map_err(|e| ServerError::SerializeError(e.to_string()))?;
    log::debug!("POST {} {}", url, body_str);
    let response = with_retry(|| async { client.post(&url).json(body).send().await })
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url, &body_str).await
}

pub async fn get_request<R: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &str,
) -> Result<R, ServerError> {
    let url = format!("{}{}", base_url, endpoint);
    log::debug!("GET {}", url);
    let response = with_retry(|| async { client.get(&url).send().await })
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, &url, "").await
}

async fn handle_response<R: DeserializeOwned>(
    response: Response,
    url: &str,
    request_str: &str,
) -> Result<R, ServerError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<R>()
            .await
            .map_err(|e| ServerError::DeserializationError(e.to_string()));
    }
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} answered {}: {}", url, status, body);
    Err(ServerError::ServerError(
        status.as_u16(),
        error_message(body),
        url.to_string(),
        request_str.to_string(),
    ))
}

/// Message of a non-2xx body: `message`, then `error` of a JSON error body,
/// otherwise the raw text.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(ErrorResponse {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorResponse { error, .. }) => error,
        Err(_) if body.is_empty() => "empty error response".to_string(),
        Err(_) => body,
    }
}

/// Open the provider's `{ status, result, error }` envelope. A successful
/// envelope may carry no result (e.g. unknown account).
pub fn into_result<T>(response: ApiResponse<T>) -> Result<Option<T>, ServerError> {
    match response.status {
        ResponseStatus::Success => Ok(response.result),
        ResponseStatus::Error => {
            let message = response
                .error
                .map(|e| format!("{} ({}): {}", e.error_type, e.code, e.message))
                .unwrap_or_else(|| "unknown api error".to_string());
            Err(ServerError::ApiError(message))
        }
    }
}
