//! Concurrent sortable set.
//!
//! The centerpiece is [`RwSortableSet`]: an ordered associative container
//! that keeps entries in their natural order while allowing constant-time
//! lookup and removal through an independent key, plus a bulk [`sort`]
//! operation that repairs ordering after entries change their comparison
//! state outside the container's control.
//!
//! [`sort`]: SortableSet::sort

pub mod common_tests;
pub mod data_structures;

// Re-export the public surface for convenience
pub use data_structures::{CyclicCounter, Orderable, RwSortableSet, SortableSet};
