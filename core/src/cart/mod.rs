// trolley/src/cart/mod.rs

//! The cart reducer engine: a tagged action union and a pure, total
//! state-transition function over a list of line items.

pub mod action;
pub mod reducer;

pub use action::CartAction;
pub use reducer::reduce;
