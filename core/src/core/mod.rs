// trolley/src/core/mod.rs

//! Shared domain primitives: product snapshots, cart line items, and the
//! interior-mutability cell that serializes state transitions.

pub mod line_item;
pub mod product;
pub mod state_cell;

pub use line_item::LineItem;
pub use product::{ProductKind, ProductSnapshot};
pub use state_cell::StateCell;
