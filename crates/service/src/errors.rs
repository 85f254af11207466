use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed storage data: {0}")]
    Serde(#[from] serde_json::Error),
}
