// trolley/src/marketplace.rs

//! The explicit application-context object: owns the cart and comparison
//! stores over a shared backend. Consumers receive accessors to the stores
//! instead of reaching for an ambient singleton, so every handle is backed
//! by a live, fully-hydrated store by construction.

use std::sync::Arc;
use tracing::{event, instrument, Level};

use crate::compare::DEFAULT_COMPARE_CAPACITY;
use crate::error::{TrolleyError, TrolleyResult};
use crate::storage::backend::StorageBackend;
use crate::store::cart_store::CartStore;
use crate::store::compare_store::CompareStore;

/// Storage keys and limits for one marketplace session.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub cart_key: String,
  pub compare_key: String,
  pub compare_capacity: usize,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      cart_key: "marketplace_cart".to_string(),
      compare_key: "marketplace_compare".to_string(),
      compare_capacity: DEFAULT_COMPARE_CAPACITY,
    }
  }
}

impl StoreConfig {
  fn validate(&self) -> TrolleyResult<()> {
    if self.compare_capacity == 0 {
      return Err(TrolleyError::Configuration {
        message: "compare_capacity must be at least 1".to_string(),
      });
    }
    if self.cart_key == self.compare_key {
      return Err(TrolleyError::Configuration {
        message: format!(
          "cart_key and compare_key must be distinct, both are '{}'",
          self.cart_key
        ),
      });
    }
    Ok(())
  }
}

pub struct Marketplace {
  cart: CartStore,
  compare: CompareStore,
}

// `StoreAdapter` holds an `Arc<dyn StorageBackend>`, so Debug cannot be
// derived through the stores; summarize instead.
impl std::fmt::Debug for Marketplace {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Marketplace").finish_non_exhaustive()
  }
}

impl Marketplace {
  /// Validates `config`, then opens both stores over the shared `backend`.
  /// The only fallible part is configuration; hydration itself is
  /// best-effort and cannot fail.
  #[instrument(name = "Marketplace::open", skip(backend, config), fields(cart_key = %config.cart_key, compare_key = %config.compare_key))]
  pub fn open(backend: Arc<dyn StorageBackend>, config: StoreConfig) -> TrolleyResult<Self> {
    config.validate()?;
    let cart = CartStore::open(Arc::clone(&backend), &config.cart_key);
    let compare = CompareStore::open(backend, &config.compare_key, config.compare_capacity);
    event!(Level::DEBUG, "Marketplace session opened.");
    Ok(Self { cart, compare })
  }

  /// Opens with the default keys and capacity.
  pub fn open_default(backend: Arc<dyn StorageBackend>) -> TrolleyResult<Self> {
    Self::open(backend, StoreConfig::default())
  }

  pub fn cart(&self) -> &CartStore {
    &self.cart
  }

  pub fn compare(&self) -> &CompareStore {
    &self.compare
  }
}
