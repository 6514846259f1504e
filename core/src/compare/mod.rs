// trolley/src/compare/mod.rs

//! The comparison-set reducer engine: a bounded, de-duplicated collection
//! of full product snapshots for side-by-side attribute comparison.

pub mod action;
pub mod reducer;

pub use action::CompareAction;
pub use reducer::reduce;

/// Default hard cap on the comparison set. There is no eviction policy: an
/// add beyond capacity is rejected and the caller must remove something
/// first.
pub const DEFAULT_COMPARE_CAPACITY: usize = 4;
