// trolley/src/core/state_cell.rs
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A wrapper for store state providing shared ownership and interior
/// mutability using parking_lot::RwLock.
///
/// All mutation in the engine flows through the write lock of one of these
/// cells, which serializes dispatches the same way a UI framework's state
/// update queue would: transitions are applied one at a time, never
/// interleaved.
#[derive(Debug)]
pub struct StateCell<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> StateCell<T> {
  pub fn new(data: T) -> Self {
    StateCell(Arc::new(RwLock::new(data)))
  }

  /// Acquires a read lock.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires a write lock.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Helper for projecting a part of the state under a read lock, e.g. a
  /// single field of a larger snapshot.
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&T) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }
}

impl<T: Send + Sync + 'static> Clone for StateCell<T> {
  fn clone(&self) -> Self {
    StateCell(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for StateCell<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
