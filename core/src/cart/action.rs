// trolley/src/cart/action.rs

//! The cart's tagged action union. Every state transition the cart can
//! undergo is one of these variants; the reducer handles all of them.

use crate::core::line_item::LineItem;

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
  /// Merge-add: an existing row with the same composite id gains the
  /// incoming quantity; otherwise the item is appended at the end.
  AddItem(LineItem),
  /// Absolute set, not a delta. A quantity of zero or below removes the
  /// row; an unknown id leaves the cart unchanged.
  UpdateQuantity { id: String, quantity: i64 },
  /// Filters the row out; no-op when absent.
  RemoveItem { id: String },
  /// Empties the cart unconditionally.
  Clear,
  /// Wholesale replacement. Used only when hydrating from storage.
  SetItems(Vec<LineItem>),
}
