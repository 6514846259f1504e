// examples/basic_cart.rs

//! A minimal cart session: add, merge, update, and inspect derived values.
//!
//! Run with: `cargo run --example basic_cart`

use std::sync::Arc;

use trolley::{Marketplace, MemoryBackend, ProductKind, ProductSnapshot, StorageBackend, TrolleyResult};

fn main() -> TrolleyResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
  let marketplace = Marketplace::open_default(backend)?;
  let cart = marketplace.cart();

  let drill = ProductSnapshot::new("drill-01", "Cordless Drill", 12_900);
  let starter_kit = ProductSnapshot::new("kit-01", "Workshop Starter Kit", 49_900);

  cart.add_item(drill.clone(), ProductKind::Equipment, 1);
  cart.add_item(starter_kit, ProductKind::Bundle, 1);
  // Adding the same product again merges into the existing row.
  cart.add_item(drill, ProductKind::Equipment, 2);

  println!("rows: {}", cart.items().len());
  println!("item count: {}", cart.item_count());
  println!("subtotal: {} cents", cart.subtotal_cents());

  cart.update_quantity("EQUIPMENT-drill-01", 1);
  println!("after update, subtotal: {} cents", cart.subtotal_cents());

  cart.flush()?;
  Ok(())
}
