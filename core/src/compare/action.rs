// trolley/src/compare/action.rs

//! The comparison set's tagged action union.

use crate::core::product::ProductSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum CompareAction {
  /// Appended unless the set is at capacity or an entry with the same id
  /// is already present; in either case the state is left unchanged.
  AddItem(ProductSnapshot),
  /// Filters the entry out; no-op when absent.
  RemoveItem { id: String },
  /// Empties the set.
  ClearAll,
  /// Wholesale replacement, used when hydrating from storage. Clamped to
  /// capacity and de-duplicated by id as a defense against oversized or
  /// corrupted persisted snapshots.
  SetItems(Vec<ProductSnapshot>),
}
