// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop counting for container tests.

use std::cell::Cell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared drop counter handing out [`Tracked`] values.
///
/// # Example
/// ```
/// use dynarray_test_utils::DropTracker;
///
/// let tracker = DropTracker::new();
/// let a = tracker.track(1);
/// let b = tracker.track(2);
///
/// drop(a);
/// assert_eq!(tracker.drops(), 1);
///
/// drop(b);
/// assert_eq!(tracker.drops(), 2);
/// assert_eq!(tracker.alive(), 0);
/// ```
#[derive(Debug, Default)]
pub struct DropTracker {
    created: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    /// Creates a tracker with zero created and zero dropped values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so that dropping it bumps this tracker's counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.created.set(self.created.get() + 1);

        Tracked {
            value,
            created: Rc::clone(&self.created),
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Number of tracked values created (including clones) so far.
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Number of tracked values still alive.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than created, i.e. a double drop.
    pub fn alive(&self) -> usize {
        self.created()
            .checked_sub(self.drops())
            .expect("DropTracker: more drops than creations (double drop)")
    }
}

/// A value whose drop is counted by the [`DropTracker`] that created it.
///
/// Clones count as new values.
pub struct Tracked<T> {
    value: T,
    created: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl<T> Tracked<T> {
    /// Returns the wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.created.set(self.created.get() + 1);

        Self {
            value: self.value.clone(),
            created: Rc::clone(&self.created),
            drops: Rc::clone(&self.drops),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
