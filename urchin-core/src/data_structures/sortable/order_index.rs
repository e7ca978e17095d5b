use std::sync::Arc;

use crossbeam_skiplist::SkipMap;

use crate::data_structures::OrderSlot;
use crate::data_structures::orderable::Orderable;

/// Sorted index mapping entries to their attachments.
///
/// The source of truth for ordering, boundary queries, and the re-sort
/// drain. Built on a concurrent skip list, so single insert/remove/first/
/// last operations are linearizable without external locking; the lock
/// coordinator above only serializes them against the bulk re-sort.
///
/// Attachments are stored as `Arc<V>` shared handles. Besides letting
/// getters hand values back without cloning `V`, the unique allocation per
/// insert attempt is what lets [`try_insert`] atomically detect whether it
/// inserted or found an existing slot.
///
/// [`try_insert`]: OrderIndex::try_insert
pub(crate) struct OrderIndex<T, V> {
    map: SkipMap<OrderSlot<T>, Arc<V>>,
}

impl<T, V> OrderIndex<T, V>
where
    T: Orderable + Clone + Send + 'static,
    V: Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        OrderIndex {
            map: SkipMap::new(),
        }
    }

    /// Inserts the pair only if no slot compares equal to `node`.
    ///
    /// Under the [`Orderable`] contract an equal comparison means the very
    /// same entry, so a `false` return is either a genuine duplicate or a
    /// comparator-contract violation upstream.
    pub(crate) fn try_insert(&self, node: T, attachment: Arc<V>) -> bool {
        let slot = self.map.get_or_insert(OrderSlot(node), Arc::clone(&attachment));
        // Ours won only if the stored handle is the very allocation we
        // passed in; an existing slot keeps its own.
        Arc::ptr_eq(slot.value(), &attachment)
    }

    /// Unconditional insert, used only by the re-sort reinsertion pass.
    pub(crate) fn insert(&self, node: T, attachment: Arc<V>) {
        self.map.insert(OrderSlot(node), attachment);
    }

    /// Removes the slot comparing equal to `node` and returns its
    /// attachment.
    ///
    /// May miss an entry whose sort state mutated after insertion: the
    /// search navigates by current comparison values while the entry sits
    /// at its stale position. The caller rolls back in that case.
    pub(crate) fn remove(&self, node: &T) -> Option<Arc<V>> {
        self.map
            .remove(&OrderSlot(node.clone()))
            .map(|slot| Arc::clone(slot.value()))
    }

    /// Returns the attachment of the slot comparing equal to `node`.
    pub(crate) fn get(&self, node: &T) -> Option<Arc<V>> {
        self.map
            .get(&OrderSlot(node.clone()))
            .map(|slot| Arc::clone(slot.value()))
    }

    /// Lowest pair under the current ordering.
    pub(crate) fn first(&self) -> Option<(T, Arc<V>)> {
        self.map
            .front()
            .map(|slot| (slot.key().0.clone(), Arc::clone(slot.value())))
    }

    /// Highest pair under the current ordering.
    pub(crate) fn last(&self) -> Option<(T, Arc<V>)> {
        self.map
            .back()
            .map(|slot| (slot.key().0.clone(), Arc::clone(slot.value())))
    }

    /// Removes and returns the lowest pair; the re-sort drain primitive.
    pub(crate) fn pop_first(&self) -> Option<(T, Arc<V>)> {
        self.map
            .pop_front()
            .map(|slot| (slot.key().0.clone(), Arc::clone(slot.value())))
    }
}
