use thiserror::Error;

/// Failures surfaced by the API client and by storage writes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("could not save to browser storage: {0}")]
    Storage(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<gloo_storage::errors::StorageError> for ClientError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        ClientError::Storage(err.to_string())
    }
}
