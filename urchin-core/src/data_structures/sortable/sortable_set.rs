use std::hash::Hash;
use std::sync::Arc;

use crate::data_structures::orderable::Orderable;

/// A thread-safe set that keeps entries in their natural order while
/// supporting constant-time lookup and removal by an independent key.
///
/// # Design
///
/// ```text
/// User Code
///    ↓ uses
/// SortableSet (this trait)     ← Safe, high-level API
///    ↓ implemented by
/// RwSortableSet                ← Reader/writer lock coordination
///    ↓ composes
/// KeyIndex  +  OrderIndex      ← key → entry   /   entry → attachment
/// ```
///
/// Three roles participate in every entry:
///
/// - the **key** (`K`) identifies the entry for removal and lookup and
///   carries no ordering information;
/// - the **node** (`T`) is the entry itself, ordered by the [`Orderable`]
///   contract;
/// - the **attachment** (`V`) is an opaque payload associated one-to-one
///   with the node, handed back as an `Arc<V>` shared handle.
///
/// # Ordering validity
///
/// Ordering is valid immediately after every successful [`add`]/[`remove`]
/// and immediately after a completed [`sort`]. It may become stale if an
/// entry's comparison state changes after insertion; `sort` is the
/// caller's explicit tool to repair that.
///
/// # Concurrency
///
/// `add`, `remove`, and every query run fully concurrently with each other.
/// `sort` is mutually exclusive with every other operation on the same set:
/// while one caller sorts, all others block until it completes. No fairness
/// is guaranteed; a steady stream of single-entry operations may delay a
/// pending sort.
///
/// # Example
///
/// ```rust,ignore
/// use urchin_core::{RwSortableSet, SortableSet};
///
/// let set: RwSortableSet<&str, Entry, String> = RwSortableSet::new();
///
/// set.add("k1", entry_a, "payload".to_string());
/// assert_eq!(set.size(), 1);
///
/// if let Some(lowest) = set.first_node() {
///     println!("lowest entry: {lowest:?}");
/// }
///
/// assert!(set.remove(&"k1"));
/// ```
///
/// [`add`]: SortableSet::add
/// [`remove`]: SortableSet::remove
/// [`sort`]: SortableSet::sort
pub trait SortableSet<K, T, V>
where
    K: Eq + Hash,
    T: Orderable,
{
    /// Adds `node` under `key` with the given attachment.
    ///
    /// Returns `false` without touching the order index when `key` is
    /// already registered, and `false` after rolling the registration back
    /// when the order index rejects the node (a genuine duplicate entry, or
    /// a comparator-contract violation upstream). Either way the set is
    /// unchanged: a failed add is never observable as a partial insert.
    ///
    /// Holds the shared lock, so concurrent additions proceed in parallel.
    fn add(&self, key: K, node: T, attachment: V) -> bool;

    /// Removes the entry registered under `key`.
    ///
    /// Returns `false` if the key is unknown, or - after restoring the key
    /// registration - if the entry could not be located in the order index
    /// (its sort state mutated since insertion without an intervening
    /// [`sort`]).
    ///
    /// Holds the shared lock, so concurrent removals proceed in parallel.
    ///
    /// [`sort`]: SortableSet::sort
    fn remove(&self, key: &K) -> bool;

    /// Rebuilds the order index under the entries' *current* comparison
    /// values.
    ///
    /// Use after a portion of the contained entries changed their sort
    /// state, invalidating the stored order. Holds the exclusive lock: no
    /// other operation on this set makes progress until the rebuild
    /// completes. O(n log n) at best; keep it off the hot path.
    fn sort(&self);

    /// Returns the first (lowest) entry, or `None` when empty.
    fn first_node(&self) -> Option<T>
    where
        T: Clone;

    /// Returns the last (highest) entry, or `None` when empty.
    fn last_node(&self) -> Option<T>
    where
        T: Clone;

    /// Returns the attachment of the first (lowest) entry.
    fn first_attachment(&self) -> Option<Arc<V>>;

    /// Returns the attachment of the last (highest) entry.
    fn last_attachment(&self) -> Option<Arc<V>>;

    /// Number of entries currently registered.
    ///
    /// Constant time and lock-free: served from an atomic counter that is
    /// maintained inside the locked regions, so the value is always
    /// consistent with *some* completed sequence of operations, though a
    /// concurrent reader may observe a value that predates an in-flight
    /// operation elsewhere.
    fn size(&self) -> usize;

    /// Returns the entry registered under `key`, if any.
    fn get_node(&self, key: &K) -> Option<T>
    where
        T: Clone;

    /// Returns the attachment of the entry registered under `key`, if any.
    ///
    /// The attachment is located through the order index, so like
    /// [`remove`] it can miss an entry whose sort state mutated since
    /// insertion without an intervening [`sort`].
    ///
    /// [`remove`]: SortableSet::remove
    /// [`sort`]: SortableSet::sort
    fn get_attachment(&self, key: &K) -> Option<Arc<V>>;

    /// Weakly consistent snapshot of all registered keys.
    fn all_keys(&self) -> Vec<K>
    where
        K: Clone;
}
