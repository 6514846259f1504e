// trolley/src/storage/mod.rs

//! The persistence layer: an injectable key-value backend trait, the two
//! bundled implementations, and the per-key adapter that owns the
//! load/persist lifecycle.

pub mod adapter;
pub mod backend;
pub mod file;

pub use adapter::{LoadPhase, StoreAdapter};
pub use backend::{MemoryBackend, StorageBackend};
pub use file::FileBackend;
