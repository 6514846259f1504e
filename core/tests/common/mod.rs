// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use trolley::{LineItem, MemoryBackend, ProductKind, ProductSnapshot, StorageBackend, TrolleyError, TrolleyResult};

// --- Fixtures ---

pub fn sample_product(id: &str, price_cents: i64) -> ProductSnapshot {
  ProductSnapshot {
    id: id.to_string(),
    name: format!("Product {}", id),
    price_cents,
    original_price_cents: None,
    images: vec![format!("/images/{}.jpg", id)],
    stock: 10,
  }
}

pub fn sample_line_item(id: &str, price_cents: i64, quantity: u32) -> LineItem {
  LineItem::new(sample_product(id, price_cents), ProductKind::Equipment, quantity)
}

// --- Failure-injecting backend for best-effort persistence tests ---

/// Wraps a MemoryBackend and fails reads/writes on demand. Also counts
/// writes so tests can assert when the engine does (or does not) persist.
#[derive(Default)]
pub struct FlakyBackend {
  inner: MemoryBackend,
  pub fail_reads: AtomicBool,
  pub fail_writes: AtomicBool,
  pub write_count: AtomicUsize,
}

impl FlakyBackend {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_fail_reads(&self, fail: bool) {
    self.fail_reads.store(fail, Ordering::SeqCst);
  }

  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  pub fn writes(&self) -> usize {
    self.write_count.load(Ordering::SeqCst)
  }

  /// Seeds a raw payload directly, bypassing failure injection.
  pub fn seed(&self, key: &str, payload: &str) {
    self.inner.put(key, payload).expect("MemoryBackend::put cannot fail");
  }

  /// Reads the raw payload directly, bypassing failure injection.
  pub fn raw(&self, key: &str) -> Option<String> {
    self.inner.get(key).expect("MemoryBackend::get cannot fail")
  }
}

impl StorageBackend for FlakyBackend {
  fn get(&self, key: &str) -> TrolleyResult<Option<String>> {
    if self.fail_reads.load(Ordering::SeqCst) {
      return Err(TrolleyError::StorageRead {
        key: key.to_string(),
        source: anyhow::anyhow!("injected read failure"),
      });
    }
    self.inner.get(key)
  }

  fn put(&self, key: &str, value: &str) -> TrolleyResult<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(TrolleyError::StorageWrite {
        key: key.to_string(),
        source: anyhow::anyhow!("injected write failure"),
      });
    }
    self.write_count.fetch_add(1, Ordering::SeqCst);
    self.inner.put(key, value)
  }

  fn remove(&self, key: &str) -> TrolleyResult<()> {
    self.inner.remove(key)
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
