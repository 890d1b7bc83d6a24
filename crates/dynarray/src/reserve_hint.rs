// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::DynamicArray;

/// A requested capacity, converted into an empty pre-allocated array.
///
/// Prefer [`DynamicArray::with_capacity`]; this type exists for call sites
/// that pass the request around as a value before deciding the element type.
///
/// # Example
///
/// ```rust
/// use dynarray::{DynamicArray, reserve};
///
/// let array: DynamicArray<u32> = reserve(8).into();
///
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// Creates a hint requesting `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveHint::new`].
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}

impl<T> From<ReserveHint> for DynamicArray<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_capacity(hint.capacity())
    }
}
