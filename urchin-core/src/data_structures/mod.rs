//! Data structures for concurrent collections.
//!
//! # Organization
//!
//! - [`sortable`] - The concurrent sortable set (key index + order index)
//! - [`orderable`] - The ordering contract entries must satisfy
//! - [`cyclic_counter`] - An atomic counter that wraps within fixed bounds

// Submodules
pub mod cyclic_counter;
pub mod orderable;
pub mod sortable;

// Re-exports for convenience
pub use cyclic_counter::CyclicCounter;
pub use orderable::Orderable;
pub use sortable::{RwSortableSet, SortableSet};

// OrderSlot stays pub(crate) - truly internal implementation detail
pub(crate) use orderable::OrderSlot;
