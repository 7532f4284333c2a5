/// Everything that can go wrong while taking an order. All variants end up as the
/// same 500 response, only the message differs.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid request: {0}")]
    InvalidInput(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for OrderError {
    fn from(e: serde_json::Error) -> Self {
        OrderError::InvalidInput(e.to_string())
    }
}
