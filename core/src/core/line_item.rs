// trolley/src/core/line_item.rs

//! One row of the cart: product identity, kind, quantity, and the frozen
//! product snapshot, keyed by a deterministic composite id.

use serde::{Deserialize, Serialize};

use crate::core::product::{ProductKind, ProductSnapshot};

/// A cart line item. At most one row exists per `(product_id, kind)` pair;
/// the composite `id` is that pair rendered as `{KIND}-{product_id}`, which
/// is what makes repeated adds merge instead of duplicating rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
  pub id: String,
  pub product_id: String,
  pub kind: ProductKind,
  /// Always >= 1 while the row exists; an update driving it to 0 or below
  /// removes the row instead.
  pub quantity: u32,
  pub product: ProductSnapshot,
}

impl LineItem {
  /// Builds a line item from a product snapshot. The composite id is
  /// derived, never supplied by the caller.
  pub fn new(product: ProductSnapshot, kind: ProductKind, quantity: u32) -> Self {
    Self {
      id: Self::composite_id(kind, &product.id),
      product_id: product.id.clone(),
      kind,
      quantity,
      product,
    }
  }

  /// The stable merge key: `{KIND}-{product_id}`.
  pub fn composite_id(kind: ProductKind, product_id: &str) -> String {
    format!("{}-{}", kind, product_id)
  }

  /// Price contribution of this row, in cents.
  pub fn line_subtotal_cents(&self) -> i64 {
    self.product.price_cents * i64::from(self.quantity)
  }
}
