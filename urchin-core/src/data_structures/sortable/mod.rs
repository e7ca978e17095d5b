//! The concurrent sortable set.
//!
//! Two indices back the set:
//!
//! - the **key index** ([`key_index`]) maps an opaque key to its entry and
//!   exists purely so callers can remove or look up entries without
//!   reconstructing a comparable value;
//! - the **order index** ([`order_index`]) keeps entry/attachment pairs in
//!   the entries' natural order and answers boundary queries.
//!
//! [`RwSortableSet`] composes the two under a reader/writer lock: add,
//! remove, and queries run concurrently in shared mode, while the bulk
//! re-sort holds the lock exclusively.

mod key_index;
mod order_index;

pub mod rw_sortable_set;
pub mod sortable_set;

pub(crate) use key_index::KeyIndex;
pub(crate) use order_index::OrderIndex;

pub use rw_sortable_set::RwSortableSet;
pub use sortable_set::SortableSet;
