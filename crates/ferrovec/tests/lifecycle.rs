//! Integration test: element lifecycle accounting.
//!
//! Every element constructed by or copied into a `DynArray` must be dropped
//! exactly once, whatever mix of appends, copies, moves, and assignments
//! produced it. `DropCounter` makes that observable.

use std::panic::{self, AssertUnwindSafe};

use ferrovec::prelude::*;
use ferrovec_test_utils::{DropCounter, FailingClone, Tracked};
use proptest::prelude::*;

fn tracked_array(counter: &DropCounter, values: &[u32]) -> DynArray<Tracked<u32>> {
    let mut array = DynArray::new();
    for &v in values {
        array.push(counter.track(v));
    }
    array
}

#[test]
fn growth_relocates_without_cloning_or_dropping() {
    let counter = DropCounter::new();
    let array = tracked_array(&counter, &(0..1000u32).collect::<Vec<_>>());
    assert_eq!(array.capacity(), 1024);
    assert_eq!(counter.cloned(), 0);
    assert_eq!(counter.dropped(), 0);
    drop(array);
    assert_eq!(counter.dropped(), 1000);
}

#[test]
fn copy_then_drop_both_balances() {
    let counter = DropCounter::new();
    let a = tracked_array(&counter, &[1, 2, 3, 4, 5]);
    let b = a.clone();
    assert_eq!(counter.cloned(), 5);
    assert_eq!(counter.live(), 10);
    drop(a);
    assert_eq!(counter.live(), 5);
    assert_eq!(*b[4].value(), 5);
    drop(b);
    assert_eq!(counter.live(), 0);
}

#[test]
fn move_construction_touches_no_element() {
    let counter = DropCounter::new();
    let mut a = tracked_array(&counter, &[1, 2, 3, 4, 5]);
    let b = a.take();
    assert_eq!(counter.cloned(), 0);
    assert_eq!(counter.dropped(), 0);
    drop(a);
    assert_eq!(counter.dropped(), 0);
    drop(b);
    assert_eq!(counter.dropped(), 5);
}

#[test]
fn push_cloned_copies_exactly_once() {
    let counter = DropCounter::new();
    let original = counter.track(9);
    let mut array = DynArray::new();
    array.push_cloned(&original);
    assert_eq!(counter.cloned(), 1);
    assert_eq!(array[0], original);
}

#[test]
fn failed_copy_construction_leaks_nothing() {
    let counter = DropCounter::new();
    let mut source = DynArray::new();
    for item in FailingClone::batch(&counter, 10, 7) {
        source.push(item);
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| source.clone()));
    assert!(result.is_err());
    assert_eq!(counter.live(), 10);
    assert_eq!(source.len(), 10);
    assert_eq!(source[9].id, 9);
    assert_eq!(source[0].calls(), 8);

    drop(source);
    assert_eq!(counter.live(), 0);
}

#[derive(Clone, Debug)]
enum Op {
    Push(u32),
    Emplace(u32),
    CloneFrom(Vec<u32>),
    MoveFrom(Vec<u32>),
    TakeAndRestore,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Push),
        any::<u32>().prop_map(Op::Emplace),
        proptest::collection::vec(any::<u32>(), 0..20).prop_map(Op::CloneFrom),
        proptest::collection::vec(any::<u32>(), 0..20).prop_map(Op::MoveFrom),
        Just(Op::TakeAndRestore),
    ]
}

proptest! {
    #[test]
    fn random_operations_match_vec_and_balance_drops(
        ops in proptest::collection::vec(op_strategy(), 1..60),
    ) {
        let counter = DropCounter::new();
        let mut array: DynArray<Tracked<u32>> = DynArray::new();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    array.push(counter.track(v));
                    model.push(v);
                }
                Op::Emplace(v) => {
                    array.emplace_with(|| counter.track(v));
                    model.push(v);
                }
                Op::CloneFrom(values) => {
                    let source = tracked_array(&counter, &values);
                    array.clone_from(&source);
                    model = values;
                }
                Op::MoveFrom(values) => {
                    let mut source = tracked_array(&counter, &values);
                    array.move_from(&mut source);
                    prop_assert!(source.is_empty());
                    model = values;
                }
                Op::TakeAndRestore => {
                    let mut taken = array.take();
                    prop_assert_eq!(array.len(), 0);
                    array.move_from(&mut taken);
                }
            }

            prop_assert_eq!(array.len(), model.len());
            prop_assert!(array.capacity() >= array.len());
            for (i, v) in model.iter().enumerate() {
                prop_assert_eq!(array[i].value(), v);
            }
            prop_assert_eq!(counter.live(), array.len());
        }

        drop(array);
        prop_assert_eq!(counter.live(), 0);
    }
}
