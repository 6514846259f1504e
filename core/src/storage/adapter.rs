// trolley/src/storage/adapter.rs

//! Per-key persistence lifecycle: hydrate once on open, then mirror every
//! state change back to the backend, best-effort.
//!
//! The adapter owns a one-way `Loading -> Ready` phase machine. Writes are
//! only permitted in `Ready`, which prevents an early dispatch from
//! clobbering a snapshot that has not been loaded yet.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, event, instrument, warn, Level};

use crate::error::{TrolleyError, TrolleyResult};
use crate::storage::backend::StorageBackend;

/// Current version of the persisted envelope. Bump when the payload shape
/// changes; loading an unknown version degrades to an empty collection.
pub(crate) const ENVELOPE_VERSION: u32 = 1;

/// The adapter's lifecycle phase. One-way: `Loading -> Ready`, transitioned
/// exactly once when the initial hydration attempt finishes (successfully
/// or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
  Loading,
  Ready,
}

#[derive(Deserialize)]
struct Envelope<T> {
  version: u32,
  items: Vec<T>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T: Serialize> {
  version: u32,
  items: &'a [T],
}

pub struct StoreAdapter {
  backend: Arc<dyn StorageBackend>,
  key: String,
  ready: AtomicBool,
}

impl StoreAdapter {
  pub fn new(backend: Arc<dyn StorageBackend>, key: &str) -> Self {
    Self {
      backend,
      key: key.to_string(),
      ready: AtomicBool::new(false),
    }
  }

  pub fn phase(&self) -> LoadPhase {
    if self.ready.load(Ordering::SeqCst) {
      LoadPhase::Ready
    } else {
      LoadPhase::Loading
    }
  }

  pub fn is_loading(&self) -> bool {
    self.phase() == LoadPhase::Loading
  }

  /// Reads and parses the persisted collection. Any failure — missing key,
  /// backend error, malformed JSON, unknown envelope version — is logged
  /// and degrades to an empty collection; hydration never blocks or fails.
  /// Always transitions the adapter to `Ready`.
  #[instrument(name = "StoreAdapter::load", skip(self), fields(key = %self.key))]
  pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
    let items = match self.backend.get(&self.key) {
      Ok(Some(raw)) => self.parse(&raw),
      Ok(None) => {
        event!(Level::DEBUG, "No persisted snapshot; starting empty.");
        Vec::new()
      }
      Err(e) => {
        warn!(error = %e, "Storage read failed; starting empty.");
        Vec::new()
      }
    };
    self.ready.store(true, Ordering::SeqCst);
    items
  }

  fn parse<T: DeserializeOwned>(&self, raw: &str) -> Vec<T> {
    match serde_json::from_str::<Envelope<T>>(raw) {
      Ok(envelope) if envelope.version == ENVELOPE_VERSION => {
        debug!(count = envelope.items.len(), "Hydrated persisted snapshot.");
        envelope.items
      }
      Ok(envelope) => {
        warn!(
          found_version = envelope.version,
          expected_version = ENVELOPE_VERSION,
          "Unknown envelope version; starting empty."
        );
        Vec::new()
      }
      // Pre-envelope snapshots were bare top-level arrays; accept them.
      Err(envelope_err) => match serde_json::from_str::<Vec<T>>(raw) {
        Ok(items) => {
          debug!(count = items.len(), "Hydrated legacy (bare array) snapshot.");
          items
        }
        Err(_) => {
          let err = TrolleyError::MalformedPayload {
            key: self.key.clone(),
            source: anyhow::Error::new(envelope_err),
          };
          warn!(error = %err, "Persisted payload unusable; starting empty.");
          Vec::new()
        }
      },
    }
  }

  /// Best-effort mirror of the in-memory collection. Failures are logged
  /// and swallowed: memory is the source of truth, storage is a cache.
  /// Silently skipped while still in `Loading`.
  #[instrument(name = "StoreAdapter::persist", skip(self, items), fields(key = %self.key))]
  pub fn persist<T: Serialize>(&self, items: &[T]) {
    if self.is_loading() {
      debug!("Skipping persist during initial load window.");
      return;
    }
    if let Err(e) = self.try_persist(items) {
      warn!(error = %e, "Best-effort persist failed; in-memory state unaffected.");
    }
  }

  /// Strict variant backing the façades' explicit `flush()`: same write,
  /// but the outcome is reported to the caller instead of swallowed.
  pub fn try_persist<T: Serialize>(&self, items: &[T]) -> TrolleyResult<()> {
    if self.is_loading() {
      return Err(TrolleyError::Internal(format!(
        "store for key '{}' is still loading; writes are not permitted yet",
        self.key
      )));
    }
    let payload = serde_json::to_string(&EnvelopeRef {
      version: ENVELOPE_VERSION,
      items,
    })
    .map_err(|e| TrolleyError::Internal(format!("serializing snapshot for '{}': {}", self.key, e)))?;
    self.backend.put(&self.key, &payload)
  }
}
