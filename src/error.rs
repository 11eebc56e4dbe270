use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown order: {0}")]
    UnknownOrder(String),
    #[error("Payment {0} is already recorded")]
    DuplicatePayment(String),
    #[error("Internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for LedgerError {
    fn from(e: rocksdb::Error) -> Self {
        LedgerError::Internal(Box::new(e))
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Internal(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
