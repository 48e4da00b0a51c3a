//! Item store implementations

pub mod memory;
pub mod rest;

pub use memory::MemoryItemStore;
pub use rest::{RestItemStore, RestStoreConfig};
