// trolley/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrolleyError {
  #[error("Storage read failed for key '{key}'. Source: {source}")]
  StorageRead {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Storage write failed for key '{key}'. Source: {source}")]
  StorageWrite {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Malformed persisted payload under key '{key}'. Source: {source}")]
  MalformedPayload {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration error: {message}")]
  Configuration { message: String },

  #[error("Internal trolley error: {0}")]
  Internal(String),
}

// Conversion for external errors surfaced through anyhow (e.g. from a
// custom StorageBackend implementation that uses `?` internally).
impl From<AnyhowError> for TrolleyError {
  fn from(err: AnyhowError) -> Self {
    TrolleyError::Internal(err.to_string())
  }
}

pub type TrolleyResult<T, E = TrolleyError> = std::result::Result<T, E>;
