#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Parse error: {0}")]
    ParseError(String),
}
