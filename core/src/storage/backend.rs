// trolley/src/storage/backend.rs

//! The storage seam. Everything the engine persists goes through this
//! trait, which keeps the store instances constructible and testable in
//! isolation — no ambient singleton, the backend is always injected.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::TrolleyResult;

/// A string-keyed, string-valued persistence surface: the same contract a
/// browser's local storage offers. Implementations must be safe to share
/// across threads; the engine itself never retries a failed call.
pub trait StorageBackend: Send + Sync {
  /// Returns the stored value for `key`, or `None` when absent.
  fn get(&self, key: &str) -> TrolleyResult<Option<String>>;

  /// Stores `value` under `key`, replacing any previous value.
  fn put(&self, key: &str, value: &str) -> TrolleyResult<()>;

  /// Deletes `key`. Removing an absent key is not an error.
  fn remove(&self, key: &str) -> TrolleyResult<()>;
}

/// An in-process backend over a HashMap. Never fails. The default choice
/// for tests and for sessions that don't need to outlive the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StorageBackend for MemoryBackend {
  fn get(&self, key: &str) -> TrolleyResult<Option<String>> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn put(&self, key: &str, value: &str) -> TrolleyResult<()> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> TrolleyResult<()> {
    self.entries.write().remove(key);
    Ok(())
  }
}
