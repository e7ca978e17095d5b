use std::hash::Hash;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Direct-lookup index mapping an opaque key to its registered entry.
///
/// The key carries no ordering information; this index exists so entries
/// can be removed or looked up without reconstructing a comparable value.
/// Every operation is individually atomic and safe under unbounded
/// concurrent callers.
pub(crate) struct KeyIndex<K, V> {
    map: DashMap<K, V>,
}

impl<K, V> KeyIndex<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        KeyIndex {
            map: DashMap::new(),
        }
    }

    /// Registers `key -> node` only if `key` is not already registered.
    ///
    /// Returns whether the registration succeeded. An existing mapping is
    /// never displaced.
    pub(crate) fn try_register(&self, key: K, node: V) -> bool {
        match self.map.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    /// Removes and returns the entry registered under `key`, if any.
    pub(crate) fn unregister(&self, key: &K) -> Option<V> {
        self.map.remove(key).map(|(_, node)| node)
    }

    /// Returns the entry registered under `key`, if any.
    pub(crate) fn lookup(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.map.get(key).map(|slot| slot.value().clone())
    }

    /// Compensating re-insert used only to roll back a failed second phase.
    ///
    /// Unconditional: the two-phase protocol guarantees nobody else can
    /// have re-registered `key` between unregister and restore.
    pub(crate) fn restore(&self, key: K, node: V) {
        self.map.insert(key, node);
    }

    /// Weakly consistent snapshot of all registered keys.
    ///
    /// Concurrent structural mutation never corrupts the snapshot, but the
    /// snapshot may or may not reflect interleaved changes.
    pub(crate) fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.map.iter().map(|slot| slot.key().clone()).collect()
    }
}
