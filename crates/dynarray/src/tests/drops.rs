// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

use dynarray_test_utils::{DropTracker, Tracked};

use crate::DynamicArray;

fn tracked_array(tracker: &DropTracker, len: usize) -> DynamicArray<Tracked<usize>> {
    (0..len).map(|i| tracker.track(i)).collect()
}

// =============================================================================
// Drop
// =============================================================================

#[test]
fn test_drop_drops_every_live_element_once() {
    let tracker = DropTracker::new();
    let array = tracked_array(&tracker, 7);

    assert_eq!(array.capacity(), 10);
    drop(array);

    assert_eq!(tracker.drops(), 7);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_drop_empty_with_capacity() {
    let array: DynamicArray<Tracked<u8>> = DynamicArray::with_capacity(16);

    drop(array);
}

// =============================================================================
// Growth
// =============================================================================

#[test]
fn test_reserve_relocates_without_dropping() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 3);

    array.reserve(64);

    assert_eq!(tracker.drops(), 0);
    assert_eq!(tracker.created(), 3);
    assert_eq!(array.iter().map(|t| *t.get()).collect::<Vec<_>>(), [0, 1, 2]);
}

#[test]
fn test_push_back_growth_does_not_drop() {
    let tracker = DropTracker::new();
    let mut array = DynamicArray::new();

    for i in 0..50 {
        array.push_back(tracker.track(i));
    }

    assert_eq!(tracker.drops(), 0);
    assert_eq!(tracker.alive(), 50);

    drop(array);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_resize_growth_does_not_drop() {
    let tracker = DropTracker::new();
    let mut array: DynamicArray<Option<Tracked<usize>>> =
        (0..3).map(|i| Some(tracker.track(i))).collect();

    array.resize(12);

    assert_eq!(tracker.drops(), 0);
    assert_eq!(array.iter().filter(|slot| slot.is_some()).count(), 3);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_clear_drops_all() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 5);

    array.clear();

    assert_eq!(tracker.drops(), 5);
    assert_eq!(array.capacity(), 10);

    drop(array);
    assert_eq!(tracker.drops(), 5);
}

#[test]
fn test_truncate_drops_tail() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 5);

    array.truncate(2);

    assert_eq!(tracker.drops(), 3);
    assert_eq!(array.len(), 2);
    assert_eq!(*array[1].get(), 1);
}

#[test]
fn test_resize_shrink_drops_tail() {
    let tracker = DropTracker::new();
    let mut array: DynamicArray<Option<Tracked<usize>>> =
        (0..4).map(|i| Some(tracker.track(i))).collect();

    array.resize(1);

    assert_eq!(tracker.drops(), 3);
}

#[test]
fn test_pop_back_moves_out() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 3);

    let last = array.pop_back().expect("Failed to pop_back()");
    assert_eq!(tracker.drops(), 0);
    assert_eq!(*last.get(), 2);

    drop(last);
    assert_eq!(tracker.drops(), 1);

    drop(array);
    assert_eq!(tracker.drops(), 3);
}

#[test]
fn test_erase_drops_exactly_one() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 4);

    array.erase(1);

    assert_eq!(tracker.drops(), 1);
    assert_eq!(array.iter().map(|t| *t.get()).collect::<Vec<_>>(), [0, 2, 3]);

    drop(array);
    assert_eq!(tracker.drops(), 4);
}

#[test]
fn test_remove_moves_out() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 4);

    let removed = array.remove(0);

    assert_eq!(tracker.drops(), 0);
    assert_eq!(*removed.get(), 0);

    drop(array);
    assert_eq!(tracker.drops(), 3);
    assert_eq!(tracker.alive(), 1);
}

#[test]
fn test_insert_shift_does_not_drop() {
    let tracker = DropTracker::new();
    let mut array = tracked_array(&tracker, 10);

    array.insert(0, tracker.track(100));
    array.insert(5, tracker.track(200));

    assert_eq!(tracker.drops(), 0);
    assert_eq!(array.len(), 12);

    drop(array);
    assert_eq!(tracker.alive(), 0);
}

// =============================================================================
// Clone / take / swap
// =============================================================================

#[test]
fn test_clone_creates_independent_values() {
    let tracker = DropTracker::new();
    let array = tracked_array(&tracker, 3);

    let copy = array.clone();
    assert_eq!(tracker.created(), 6);

    drop(array);
    assert_eq!(tracker.drops(), 3);
    assert_eq!(copy.len(), 3);

    drop(copy);
    assert_eq!(tracker.alive(), 0);
}

#[test]
fn test_clone_from_drops_previous_contents() {
    let tracker = DropTracker::new();
    let source = tracked_array(&tracker, 2);
    let mut target = tracked_array(&tracker, 3);

    target.clone_from(&source);

    assert_eq!(tracker.drops(), 3);
    assert_eq!(target.len(), 2);
}

#[test]
fn test_take_transfers_ownership() {
    let tracker = DropTracker::new();
    let mut source = tracked_array(&tracker, 3);

    let target = source.take();
    drop(source);

    assert_eq!(tracker.drops(), 0);

    drop(target);
    assert_eq!(tracker.drops(), 3);
}

#[test]
fn test_swap_with_transfers_ownership() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 2);
    let mut b = tracked_array(&tracker, 5);

    a.swap_with(&mut b);
    drop(b);

    assert_eq!(tracker.drops(), 2);
    assert_eq!(a.len(), 5);
}

// =============================================================================
// IntoIter
// =============================================================================

#[test]
fn test_into_iter_partial_consumption() {
    let tracker = DropTracker::new();
    let array = tracked_array(&tracker, 5);

    let mut iter = array.into_iter();
    let first = iter.next().expect("Failed to next()");
    let last = iter.next_back().expect("Failed to next_back()");

    assert_eq!(tracker.drops(), 0);

    drop(iter);
    assert_eq!(tracker.drops(), 3);

    drop((first, last));
    assert_eq!(tracker.drops(), 5);
}

#[test]
fn test_into_iter_full_consumption() {
    let tracker = DropTracker::new();
    let array = tracked_array(&tracker, 4);

    let values: Vec<usize> = array.into_iter().map(|t| *t.get()).collect();

    assert_eq!(values, [0, 1, 2, 3]);
    assert_eq!(tracker.drops(), 4);
}

#[test]
fn test_into_vec_moves_values() {
    let tracker = DropTracker::new();
    let array = tracked_array(&tracker, 3);

    let vec: Vec<Tracked<usize>> = array.into();

    assert_eq!(tracker.drops(), 0);
    assert_eq!(vec.len(), 3);
}

// =============================================================================
// Panicking Default
// =============================================================================

thread_local! {
    static DEFAULTS: Cell<usize> = const { Cell::new(0) };
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

struct PanicsOnThirdDefault;

impl Default for PanicsOnThirdDefault {
    fn default() -> Self {
        let n = DEFAULTS.with(|c| {
            c.set(c.get() + 1);
            c.get()
        });

        if n == 3 {
            panic!("third default");
        }

        Self
    }
}

impl Drop for PanicsOnThirdDefault {
    fn drop(&mut self) {
        DROPS.with(|c| c.set(c.get() + 1));
    }
}

#[test]
fn test_with_len_panicking_default_drops_constructed() {
    let result = std::panic::catch_unwind(|| DynamicArray::<PanicsOnThirdDefault>::with_len(5));

    assert!(result.is_err());
    assert_eq!(DROPS.with(Cell::get), 2);
}
