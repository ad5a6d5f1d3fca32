#[derive(Debug, Clone, thiserror::Error)]
pub enum ServerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error status={0}, message={1}, url={2}, query={3}")]
    ServerError(u16, String, String, String),

    #[error("Api error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializeError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
