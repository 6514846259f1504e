// trolley/src/store/compare_store.rs

//! The comparison-set façade. The reducer underneath never errors — a
//! rejected add is a silent no-op — so this layer is where rejection
//! becomes observable: `add_item` returns `false` for a full set or a
//! duplicate id, and the caller decides how to surface that.

use std::sync::Arc;
use tracing::{debug, event, instrument, Level};

use crate::compare::{self, CompareAction};
use crate::core::product::ProductSnapshot;
use crate::core::state_cell::StateCell;
use crate::error::TrolleyResult;
use crate::storage::adapter::StoreAdapter;
use crate::storage::backend::StorageBackend;

pub struct CompareStore {
  entries: StateCell<Vec<ProductSnapshot>>,
  adapter: StoreAdapter,
  capacity: usize,
}

impl CompareStore {
  /// Opens the comparison set over `backend`, hydrating any persisted
  /// entries under `key`. An oversized persisted snapshot is clamped to
  /// `capacity` during hydration.
  #[instrument(name = "CompareStore::open", skip(backend))]
  pub fn open(backend: Arc<dyn StorageBackend>, key: &str, capacity: usize) -> Self {
    let adapter = StoreAdapter::new(backend, key);
    let loaded = adapter.load::<ProductSnapshot>();
    event!(Level::DEBUG, entries = loaded.len(), capacity, "Compare store opened.");
    let entries = compare::reduce(Vec::new(), CompareAction::SetItems(loaded), capacity);
    Self {
      entries: StateCell::new(entries),
      adapter,
      capacity,
    }
  }

  fn dispatch(&self, action: CompareAction) {
    let snapshot = {
      let mut guard = self.entries.write();
      let current = std::mem::take(&mut *guard);
      *guard = compare::reduce(current, action, self.capacity);
      guard.clone()
    };
    self.adapter.persist(&snapshot);
  }

  // --- Action methods ---

  /// Attempts to add `entity` to the set. Returns `false` — leaving the
  /// set untouched — when the set is at capacity or already holds an entry
  /// with the same id.
  pub fn add_item(&self, entity: ProductSnapshot) -> bool {
    // Check and transition under one write lock so the returned flag and
    // the state change cannot disagree.
    let snapshot = {
      let mut guard = self.entries.write();
      if guard.len() >= self.capacity {
        debug!(id = %entity.id, capacity = self.capacity, "Compare add rejected: set is full.");
        return false;
      }
      if guard.iter().any(|e| e.id == entity.id) {
        debug!(id = %entity.id, "Compare add rejected: already in set.");
        return false;
      }
      let current = std::mem::take(&mut *guard);
      *guard = compare::reduce(current, CompareAction::AddItem(entity), self.capacity);
      guard.clone()
    };
    self.adapter.persist(&snapshot);
    true
  }

  /// Removes the entry with `id`; no-op if absent.
  pub fn remove_item(&self, id: &str) {
    self.dispatch(CompareAction::RemoveItem { id: id.to_string() });
  }

  /// Empties the set.
  pub fn clear_all(&self) {
    self.dispatch(CompareAction::ClearAll);
  }

  // --- Reads and derived values ---

  /// A snapshot of the current entries, in insertion order.
  pub fn items(&self) -> Vec<ProductSnapshot> {
    self.entries.read().clone()
  }

  /// True only during the initial hydration window.
  pub fn is_loading(&self) -> bool {
    self.adapter.is_loading()
  }

  pub fn count(&self) -> usize {
    self.entries.read().len()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Whether the set has room for another entry.
  pub fn can_add(&self) -> bool {
    self.entries.read().len() < self.capacity
  }

  /// Whether an entry with `id` is already in the set.
  pub fn is_in_compare(&self, id: &str) -> bool {
    self.entries.read().iter().any(|e| e.id == id)
  }

  /// Acknowledged write-through; see [`crate::store::CartStore::flush`].
  pub fn flush(&self) -> TrolleyResult<()> {
    let snapshot = self.entries.read().clone();
    self.adapter.try_persist(&snapshot)
  }
}
