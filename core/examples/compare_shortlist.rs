// examples/compare_shortlist.rs

//! Building a comparison shortlist: bounded capacity, duplicate rejection,
//! and persistence across sessions through a file backend.
//!
//! Run with: `cargo run --example compare_shortlist`

use std::sync::Arc;

use trolley::{FileBackend, Marketplace, ProductSnapshot, StorageBackend, TrolleyResult};

fn main() -> TrolleyResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  let dir = std::env::temp_dir().join("trolley_compare_shortlist");
  let backend: Arc<dyn StorageBackend> = Arc::new(FileBackend::open(&dir)?);

  let marketplace = Marketplace::open_default(backend.clone())?;
  let compare = marketplace.compare();

  for i in 1i64..=5 {
    let product = ProductSnapshot::new(format!("saw-{:02}", i), format!("Table Saw {}", i), 35_000 + i * 1_000);
    let added = compare.add_item(product);
    println!("add saw-{:02}: {}", i, if added { "added" } else { "rejected" });
  }

  println!("shortlist size: {} (capacity {})", compare.count(), compare.capacity());
  println!("can add more: {}", compare.can_add());

  // A second session over the same backend sees the same shortlist.
  let next_session = Marketplace::open_default(backend)?;
  println!("reloaded size: {}", next_session.compare().count());

  Ok(())
}
