// src/lib.rs

//! Trolley: a storage-backed shopping-cart and comparison-set state engine.
//!
//! Trolley models client-side shopping state the way a UI reducer would:
//!  - Pure, total reducers over tagged action unions (cart and compare).
//!  - Idempotent merge-adds keyed by a composite `{KIND}-{product_id}` id.
//!  - A capacity-bounded, de-duplicated comparison set.
//!  - Best-effort JSON persistence through an injectable storage backend.
//!  - Store façades exposing derived values (item count, subtotal, total)
//!    recomputed fresh from the authoritative collection on every read.

// Declare modules according to the planned structure
pub mod core;
pub mod cart;
pub mod compare;
pub mod storage;
pub mod store;
pub mod marketplace;
pub mod error;

// --- Re-exports for the Public API ---

// Domain primitives users will interact with frequently
pub use crate::core::line_item::LineItem;
pub use crate::core::product::{ProductKind, ProductSnapshot};
pub use crate::core::state_cell::StateCell;

// The tagged action unions and their reducers
pub use crate::cart::action::CartAction;
pub use crate::compare::action::CompareAction;
pub use crate::compare::DEFAULT_COMPARE_CAPACITY;

// Storage seam: the backend trait plus the bundled implementations
pub use crate::storage::adapter::LoadPhase;
pub use crate::storage::backend::{MemoryBackend, StorageBackend};
pub use crate::storage::file::FileBackend;

// The store façades and the application-context object that bundles them
pub use crate::marketplace::{Marketplace, StoreConfig};
pub use crate::store::cart_store::CartStore;
pub use crate::store::compare_store::CompareStore;

pub use crate::error::{TrolleyError, TrolleyResult};
