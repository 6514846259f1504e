// trolley/src/store/mod.rs

//! The store façades: each one wires a reducer to a `StateCell` and a
//! `StoreAdapter`, exposing action methods and derived values to consumers.

pub mod cart_store;
pub mod compare_store;

pub use cart_store::CartStore;
pub use compare_store::CompareStore;
