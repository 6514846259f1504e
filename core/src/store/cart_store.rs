// trolley/src/store/cart_store.rs

//! The cart façade. Every mutating call dispatches a `CartAction` through
//! the pure reducer under the state cell's write lock, then mirrors the new
//! state to storage best-effort. Derived values (item count, subtotal,
//! total) are recomputed from the authoritative collection on every read,
//! never cached, so they can never drift.

use std::sync::Arc;
use tracing::{event, instrument, Level};

use crate::cart::{self, CartAction};
use crate::core::line_item::LineItem;
use crate::core::product::{ProductKind, ProductSnapshot};
use crate::core::state_cell::StateCell;
use crate::error::TrolleyResult;
use crate::storage::adapter::StoreAdapter;
use crate::storage::backend::StorageBackend;

pub struct CartStore {
  items: StateCell<Vec<LineItem>>,
  adapter: StoreAdapter,
}

impl CartStore {
  /// Opens the cart over `backend`, hydrating any persisted rows under
  /// `key`. Hydration is best-effort: a missing or malformed snapshot
  /// yields an empty cart, never an error.
  #[instrument(name = "CartStore::open", skip(backend))]
  pub fn open(backend: Arc<dyn StorageBackend>, key: &str) -> Self {
    let adapter = StoreAdapter::new(backend, key);
    let loaded = adapter.load::<LineItem>();
    event!(Level::DEBUG, rows = loaded.len(), "Cart store opened.");
    let items = cart::reduce(Vec::new(), CartAction::SetItems(loaded));
    Self {
      items: StateCell::new(items),
      adapter,
    }
  }

  /// Runs one action through the reducer under the write lock, then
  /// mirrors the result to storage.
  fn dispatch(&self, action: CartAction) {
    let snapshot = {
      let mut guard = self.items.write();
      let current = std::mem::take(&mut *guard);
      *guard = cart::reduce(current, action);
      guard.clone()
    };
    self.adapter.persist(&snapshot);
  }

  // --- Action methods ---

  /// Adds `quantity` of `product` to the cart. A repeated add of the same
  /// `(product, kind)` pair merges into the existing row. Quantities below
  /// one are floored to one — adding is always observable.
  pub fn add_item(&self, product: ProductSnapshot, kind: ProductKind, quantity: u32) {
    let item = LineItem::new(product, kind, quantity.max(1));
    self.dispatch(CartAction::AddItem(item));
  }

  /// Sets the quantity of the row with composite id `id` absolutely. Zero
  /// or negative removes the row; an unknown id is a no-op.
  pub fn update_quantity(&self, id: &str, quantity: i64) {
    self.dispatch(CartAction::UpdateQuantity {
      id: id.to_string(),
      quantity,
    });
  }

  /// Removes the row with composite id `id`; no-op if absent.
  pub fn remove_item(&self, id: &str) {
    self.dispatch(CartAction::RemoveItem { id: id.to_string() });
  }

  /// Empties the cart.
  pub fn clear(&self) {
    self.dispatch(CartAction::Clear);
  }

  // --- Reads and derived values ---

  /// A snapshot of the current rows, in insertion order.
  pub fn items(&self) -> Vec<LineItem> {
    self.items.read().clone()
  }

  /// True only during the initial hydration window.
  pub fn is_loading(&self) -> bool {
    self.adapter.is_loading()
  }

  /// Sum of quantities across all rows.
  pub fn item_count(&self) -> u64 {
    self.items.read().iter().map(|i| u64::from(i.quantity)).sum()
  }

  /// Sum over rows of `price_cents * quantity`.
  pub fn subtotal_cents(&self) -> i64 {
    self.items.read().iter().map(LineItem::line_subtotal_cents).sum()
  }

  /// Currently equal to the subtotal. Extension point for shipping/tax.
  pub fn total_cents(&self) -> i64 {
    self.subtotal_cents()
  }

  /// Quantity of the first row matching `product_id`, 0 when absent.
  pub fn item_quantity(&self, product_id: &str) -> u32 {
    self
      .items
      .read()
      .iter()
      .find(|i| i.product_id == product_id)
      .map(|i| i.quantity)
      .unwrap_or(0)
  }

  /// Writes the current state through to the backend and reports the
  /// outcome — the acknowledged counterpart to the automatic best-effort
  /// mirroring.
  pub fn flush(&self) -> TrolleyResult<()> {
    let snapshot = self.items.read().clone();
    self.adapter.try_persist(&snapshot)
  }
}
