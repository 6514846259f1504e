// trolley/src/compare/reducer.rs

//! Pure state transitions for the comparison set. Like the cart reducer,
//! `reduce` is total; rejection (full set, duplicate id) is expressed as an
//! unchanged state, never an error. The façade layer is responsible for
//! turning that silent no-op into an observable signal.

use crate::compare::action::CompareAction;
use crate::core::product::ProductSnapshot;

/// Computes the next comparison-set state. `capacity` is the hard cap on
/// set size (see [`crate::compare::DEFAULT_COMPARE_CAPACITY`]).
pub fn reduce(
  entries: Vec<ProductSnapshot>,
  action: CompareAction,
  capacity: usize,
) -> Vec<ProductSnapshot> {
  match action {
    CompareAction::AddItem(incoming) => {
      if entries.len() >= capacity || entries.iter().any(|e| e.id == incoming.id) {
        return entries;
      }
      let mut entries = entries;
      entries.push(incoming);
      entries
    }
    CompareAction::RemoveItem { id } => entries.into_iter().filter(|e| e.id != id).collect(),
    CompareAction::ClearAll => Vec::new(),
    CompareAction::SetItems(replacement) => {
      // Defensive clamp: first occurrence wins, truncated at capacity.
      let mut deduped: Vec<ProductSnapshot> = Vec::with_capacity(capacity);
      for entry in replacement {
        if deduped.len() >= capacity {
          break;
        }
        if deduped.iter().all(|e| e.id != entry.id) {
          deduped.push(entry);
        }
      }
      deduped
    }
  }
}
