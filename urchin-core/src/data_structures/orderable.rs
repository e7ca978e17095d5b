use std::cmp::Ordering;
use std::sync::Arc;

/// Ordering contract for entries stored in a sortable set.
///
/// The order index identifies slots by comparison result alone, so the
/// contract below is what keeps two distinct entries from collapsing into
/// one slot. It cannot be checked mechanically; implementations that break
/// it silently corrupt the set's logical size.
///
/// # Contract
///
/// - `cmp_order` is a total order over all live entries.
/// - `e.cmp_order(&e)` returns `Equal` for every entry `e`.
/// - For two *distinct* entries the result is never `Equal`, even when all
///   sort-relevant fields compare equal. Ties must break deterministically.
///
/// The canonical realization compares the sort-relevant fields first and
/// falls back to a stable unique discriminant (such as an entry id):
///
/// ```rust,ignore
/// impl Orderable for Task {
///     fn cmp_order(&self, other: &Self) -> Ordering {
///         self.priority
///             .cmp(&other.priority)
///             .then(self.id.cmp(&other.id))
///     }
/// }
/// ```
///
/// With that shape, an entry compared against itself is `Equal` on both
/// components, and two distinct entries with equal priorities are ordered
/// by id, never `Equal`.
///
/// # Mutable sort state
///
/// Sort-relevant fields may change after insertion (typically through
/// interior mutability behind an `Arc`). The container does not observe
/// such changes; ordering becomes stale until [`SortableSet::sort`] is
/// invoked. The discriminant used for tie-breaking must NOT change over an
/// entry's lifetime.
///
/// [`SortableSet::sort`]: crate::SortableSet::sort
pub trait Orderable {
    /// Compares two entries under the contract above.
    fn cmp_order(&self, other: &Self) -> Ordering;
}

// Entries are usually shared handles so that external mutation of sort
// state is visible through every index holding the entry.
impl<T: Orderable + ?Sized> Orderable for Arc<T> {
    fn cmp_order(&self, other: &Self) -> Ordering {
        (**self).cmp_order(other)
    }
}

/// Bridges [`Orderable`] entries into `Ord`-keyed structures.
///
/// The order index stores entries wrapped in this newtype so that the
/// underlying sorted map sees a lawful `Ord` implementation delegating to
/// the entry's `cmp_order`.
#[derive(Debug)]
pub(crate) struct OrderSlot<T>(pub(crate) T);

impl<T: Orderable> PartialEq for OrderSlot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.cmp_order(&other.0) == Ordering::Equal
    }
}

impl<T: Orderable> Eq for OrderSlot<T> {}

impl<T: Orderable> PartialOrd for OrderSlot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Orderable> Ord for OrderSlot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_order(&other.0)
    }
}
