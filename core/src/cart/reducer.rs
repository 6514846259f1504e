// trolley/src/cart/reducer.rs

//! Pure state transitions for the cart. `reduce` is total: every action
//! variant produces a valid next state for any input, with invalid input
//! degrading to a no-op or a removal rather than an error.

use crate::cart::action::CartAction;
use crate::core::line_item::LineItem;

/// Computes the next cart state. No side effects, no failure paths.
pub fn reduce(items: Vec<LineItem>, action: CartAction) -> Vec<LineItem> {
  match action {
    CartAction::AddItem(incoming) => add_item(items, incoming),
    CartAction::UpdateQuantity { id, quantity } => update_quantity(items, &id, quantity),
    CartAction::RemoveItem { id } => items.into_iter().filter(|item| item.id != id).collect(),
    CartAction::Clear => Vec::new(),
    CartAction::SetItems(replacement) => replacement,
  }
}

fn add_item(mut items: Vec<LineItem>, incoming: LineItem) -> Vec<LineItem> {
  match items.iter_mut().find(|item| item.id == incoming.id) {
    Some(existing) => {
      // Merge-add: position in the list is preserved, only the quantity
      // grows. saturating_add keeps the reducer total even for absurd input.
      existing.quantity = existing.quantity.saturating_add(incoming.quantity);
    }
    None => items.push(incoming),
  }
  items
}

fn update_quantity(items: Vec<LineItem>, id: &str, quantity: i64) -> Vec<LineItem> {
  if quantity <= 0 {
    // Driving a row to zero or below removes it entirely.
    return items.into_iter().filter(|item| item.id != id).collect();
  }
  let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
  items
    .into_iter()
    .map(|mut item| {
      if item.id == id {
        item.quantity = quantity;
      }
      item
    })
    .collect()
}
