use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use crate::data_structures::orderable::Orderable;
use crate::data_structures::sortable::{KeyIndex, OrderIndex, SortableSet};

/// Reader/writer-locked implementation of [`SortableSet`].
///
/// # Locking discipline
///
/// A single `RwLock<()>` coordinates two modes:
///
/// - **shared** - add, remove, and every query. They still mutate the order
///   index, which is itself safe under concurrent structural mutation; the
///   shared lock only keeps them from interleaving with a re-sort.
/// - **exclusive** - [`sort`] alone. Holding the writer side guarantees no
///   single-entry operation observes the order index mid-rebuild, and that
///   the entry count is exact for the duration.
///
/// # Two-phase mutation
///
/// `add` and `remove` both touch the key index first (a cheap pre-check
/// outside the lock) and the order index second (under the shared lock).
/// A second-phase failure triggers a compensating undo of the first phase,
/// so a caller never observes the two indices disagreeing: every operation
/// is each-or-nothing from the outside.
///
/// The count is updated inside the same shared-lock regions as the
/// structural changes, which is what entitles `sort` to treat it as exact
/// while holding the exclusive lock.
///
/// [`sort`]: SortableSet::sort
pub struct RwSortableSet<K, T, V> {
    /// Key → entry, consulted first by every keyed operation.
    keys: KeyIndex<K, T>,
    /// Entry → attachment in natural order; source of truth for ordering.
    nodes: OrderIndex<T, V>,
    /// Shared for single-entry operations, exclusive for re-sort.
    sort_lock: RwLock<()>,
    /// Entry count, maintained inside the shared-lock regions.
    count: AtomicUsize,
}

impl<K, T, V> RwSortableSet<K, T, V>
where
    K: Eq + Hash + Clone,
    T: Orderable + Clone + Send + 'static,
    V: Send + Sync + 'static,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        RwSortableSet {
            keys: KeyIndex::new(),
            nodes: OrderIndex::new(),
            sort_lock: RwLock::new(()),
            count: AtomicUsize::new(0),
        }
    }

    /// Second phase of the two-phase protocol: runs the structural mutation
    /// under the shared lock and, on failure, the compensating undo of the
    /// first phase. Shared between [`add`] and [`remove`] so the
    /// compensation pattern lives in one place.
    ///
    /// [`add`]: SortableSet::add
    /// [`remove`]: SortableSet::remove
    fn run_second_phase(
        &self,
        mutate: impl FnOnce() -> bool,
        compensate: impl FnOnce(),
    ) -> bool {
        let _shared = self.sort_lock.read();
        if mutate() {
            true
        } else {
            compensate();
            false
        }
    }
}

impl<K, T, V> Default for RwSortableSet<K, T, V>
where
    K: Eq + Hash + Clone,
    T: Orderable + Clone + Send + 'static,
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, V> SortableSet<K, T, V> for RwSortableSet<K, T, V>
where
    K: Eq + Hash + Clone,
    T: Orderable + Clone + Send + 'static,
    V: Send + Sync + 'static,
{
    fn add(&self, key: K, node: T, attachment: V) -> bool {
        // Phase one: cheap pre-check, no lock, no order index touched.
        if !self.keys.try_register(key.clone(), node.clone()) {
            return false;
        }
        self.run_second_phase(
            || {
                if self.nodes.try_insert(node, Arc::new(attachment)) {
                    self.count.fetch_add(1, Ordering::Relaxed);
                    true
                } else {
                    false
                }
            },
            || {
                self.keys.unregister(&key);
            },
        )
    }

    fn remove(&self, key: &K) -> bool {
        // Phase one: detach the key mapping; an unknown key ends here.
        let Some(node) = self.keys.unregister(key) else {
            return false;
        };
        self.run_second_phase(
            || {
                if self.nodes.remove(&node).is_some() {
                    self.count.fetch_sub(1, Ordering::Relaxed);
                    true
                } else {
                    false
                }
            },
            || {
                self.keys.restore(key.clone(), node.clone());
            },
        )
    }

    fn sort(&self) {
        let _exclusive = self.sort_lock.write();
        // Exclusive mode excludes concurrent add/remove, so the counter is
        // exact here; still, drain until the index reports empty rather
        // than trusting it as a loop bound.
        let expected = self.count.load(Ordering::Relaxed);
        let mut drained = Vec::with_capacity(expected);
        while let Some(pair) = self.nodes.pop_first() {
            drained.push(pair);
        }
        if drained.len() != expected {
            debug!(
                expected,
                drained = drained.len(),
                "entry count drifted from order index population"
            );
        }
        self.count.store(drained.len(), Ordering::Relaxed);
        // Reinsertion recomputes every position under the entries'
        // current comparison values.
        for (node, attachment) in drained {
            self.nodes.insert(node, attachment);
        }
        debug!(entries = self.count.load(Ordering::Relaxed), "re-sorted");
    }

    fn first_node(&self) -> Option<T>
    where
        T: Clone,
    {
        let _shared = self.sort_lock.read();
        self.nodes.first().map(|(node, _)| node)
    }

    fn last_node(&self) -> Option<T>
    where
        T: Clone,
    {
        let _shared = self.sort_lock.read();
        self.nodes.last().map(|(node, _)| node)
    }

    fn first_attachment(&self) -> Option<Arc<V>> {
        let _shared = self.sort_lock.read();
        self.nodes.first().map(|(_, attachment)| attachment)
    }

    fn last_attachment(&self) -> Option<Arc<V>> {
        let _shared = self.sort_lock.read();
        self.nodes.last().map(|(_, attachment)| attachment)
    }

    fn size(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    fn get_node(&self, key: &K) -> Option<T>
    where
        T: Clone,
    {
        let _shared = self.sort_lock.read();
        self.keys.lookup(key)
    }

    fn get_attachment(&self, key: &K) -> Option<Arc<V>> {
        let _shared = self.sort_lock.read();
        let node = self.keys.lookup(key)?;
        self.nodes.get(&node)
    }

    fn all_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.keys()
    }
}
