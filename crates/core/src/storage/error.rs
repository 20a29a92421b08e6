use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("main key not found: {main_key}")]
    MainKeyNotFound { main_key: String },
    #[error("data key not found: {data_key} (main key {main_key})")]
    DataKeyNotFound { main_key: String, data_key: String },
    #[error("client error: {0}")]
    Client(String),
    #[error("invalid stored data: {0}")]
    InvalidData(String),
    #[error("timeout waiting for table '{table_name}' to become active")]
    TableActivationTimeout { table_name: String },
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
