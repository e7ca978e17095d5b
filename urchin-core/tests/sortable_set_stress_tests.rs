//! Wires the shared stress helpers to the reader/writer-locked set.
//!
//! Serialized: these tests saturate every core and skew each other's
//! timing when interleaved.

use serial_test::serial;
use urchin_core::RwSortableSet;
use urchin_core::common_tests::sortable_set_stress_tests::{
    StressNode, test_concurrent_add_remove, test_no_loss_across_sort,
    test_same_key_contention, test_sort_during_modifications,
};

type StressSet = RwSortableSet<u64, StressNode, u64>;

#[test]
#[serial(stress_tests)]
fn stress_concurrent_add_remove() {
    test_concurrent_add_remove::<StressSet>();
}

#[test]
#[serial(stress_tests)]
fn stress_same_key_contention() {
    test_same_key_contention::<StressSet>();
}

#[test]
#[serial(stress_tests)]
fn stress_sort_during_modifications() {
    test_sort_during_modifications::<StressSet>();
}

#[test]
#[serial(stress_tests)]
fn stress_no_loss_across_sort() {
    test_no_loss_across_sort::<StressSet>();
}
