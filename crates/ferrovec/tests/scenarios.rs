//! Integration test: end-to-end usage scenarios, checked against `Vec`.
//!
//! Each scenario drives a `DynArray` and a `Vec` through the same operations
//! and asserts they agree after every step.

use ferrovec::prelude::*;
use ferrovec_test_utils::numbered_strings;

fn assert_matches<T: PartialEq + std::fmt::Debug>(array: &DynArray<T>, expected: &[T]) {
    assert_eq!(array.len(), expected.len());
    assert!(array.capacity() >= array.len());
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(&array[i], value, "mismatch at index {i}");
    }
}

#[test]
fn sequential_integers_track_vec() {
    let mut array = DynArray::new();
    let mut reference = Vec::new();
    for i in 0..100 {
        array.push(i);
        reference.push(i);
        assert_matches(&array, &reference);
    }
    assert_eq!(array.len(), 100);
    assert_eq!(array.capacity(), 128);
    for i in 0..100 {
        assert_eq!(array[i], i);
    }
}

#[test]
fn sequential_strings_track_vec() {
    let mut array = DynArray::new();
    let mut reference = Vec::new();
    for s in numbered_strings(100) {
        array.push(s.clone());
        reference.push(s);
        assert_matches(&array, &reference);
    }
}

#[test]
fn copy_construction_is_deep() {
    let mut a = DynArray::new();
    for s in numbered_strings(5) {
        a.push(s);
    }
    let b = a.clone();
    a[0] = String::from("changed");

    assert_eq!(b.len(), 5);
    assert_eq!(b[0], "test0");
    assert_eq!(a[0], "changed");
    assert_matches(&b, &numbered_strings(5));
}

#[test]
fn copy_construction_leaves_source_unmodified() {
    let mut a = DynArray::new();
    for s in numbered_strings(100) {
        a.push(s);
    }
    let capacity = a.capacity();
    let b = a.clone();
    assert_matches(&a, &numbered_strings(100));
    assert_eq!(a.capacity(), capacity);
    assert_matches(&b, &numbered_strings(100));
}

#[test]
fn move_construction_empties_source() {
    let mut a = DynArray::new();
    for s in numbered_strings(5) {
        a.push(s);
    }
    let b = a.take();

    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);
    assert_matches(&b, &numbered_strings(5));
}

#[test]
fn moved_from_array_accepts_emplace() {
    let mut a = DynArray::<String>::new();
    for s in numbered_strings(100) {
        a.push(s);
    }
    let _b = a.take();

    a.emplace("asd");
    assert_eq!(a.len(), 1);
    assert_eq!(a[0], "asd");
}

#[test]
fn move_assignment_transfers_contents() {
    let mut dest = DynArray::new();
    dest.push(String::from("old"));
    let mut source = DynArray::new();
    for s in numbered_strings(3) {
        source.push(s);
    }

    dest.move_from(&mut source);
    assert_matches(&dest, &numbered_strings(3));
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
}

#[test]
fn copy_assignment_from_snapshot_of_self_is_stable() {
    let mut a = DynArray::new();
    for s in numbered_strings(7) {
        a.push(s);
    }
    let snapshot = a.clone();
    a.clone_from(&snapshot);
    assert_matches(&a, &numbered_strings(7));
    assert_eq!(a.capacity(), 8);
}

#[test]
fn emplace_into_empty_array() {
    let mut array: DynArray<String> = DynArray::new();
    array.emplace("asd");
    assert_eq!(array[0], "asd");
    assert_eq!(array.capacity(), 1);
}

#[test]
fn fallible_api_reports_success() {
    let mut array = DynArray::new();
    array.try_push(1u32).unwrap();
    array.try_emplace(2u8).unwrap();
    array.try_emplace_with(|| 3).unwrap();
    let copy = array.try_clone().unwrap();
    assert_matches(&copy, &[1, 2, 3]);
}
