// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! FixedBuffer - Exclusively owned block of uninitialized slots.
//!
//! Allocated once, never resized. Capacity changes are committed by the owner
//! allocating a second buffer and swapping it in.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::mem::MaybeUninit;

use crate::error::BufferError;

/// A heap block of exactly `capacity` slots of `T`.
///
/// Slots are `MaybeUninit<T>`: the buffer neither constructs nor drops
/// elements. Dropping a `FixedBuffer` only releases the allocation, so the
/// owner must drop any live values first.
///
/// `FixedBuffer` is not `Clone`. At most one owner holds a given
/// allocation; it changes hands by move, [`take`](Self::take) or
/// [`swap_with`](Self::swap_with).
///
/// # Example
///
/// ```rust
/// use dynarray_buffer::FixedBuffer;
///
/// let mut buffer = FixedBuffer::<String>::create(2);
/// assert_eq!(buffer.capacity(), 2);
///
/// let moved = buffer.take();
/// assert_eq!(buffer.capacity(), 0);
/// assert_eq!(moved.capacity(), 2);
/// ```
pub struct FixedBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> FixedBuffer<T> {
    /// Creates a buffer with zero capacity. Does not allocate.
    pub fn empty() -> Self {
        Self {
            slots: Box::new([]),
        }
    }

    /// Allocates a buffer of exactly `capacity` slots.
    ///
    /// A zero `capacity` (or a zero-sized `T`) does not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` slots exceeds `isize::MAX`.
    /// Allocation failure is handled by the global allocation error handler,
    /// which aborts by default.
    pub fn create(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
        }
    }

    /// Allocates a buffer of exactly `capacity` slots, reporting failure.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if the byte size of `capacity`
    ///   slots exceeds `isize::MAX`.
    /// - [`BufferError::AllocationFailed`] if the allocator refuses the request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray_buffer::{BufferError, FixedBuffer};
    ///
    /// let result = FixedBuffer::<u64>::try_create(usize::MAX);
    /// assert_eq!(
    ///     result.err(),
    ///     Some(BufferError::CapacityOverflow { capacity: usize::MAX })
    /// );
    /// ```
    pub fn try_create(capacity: usize) -> Result<Self, BufferError> {
        if Layout::array::<T>(capacity).is_err() {
            return Err(BufferError::CapacityOverflow { capacity });
        }

        let mut slots: Vec<MaybeUninit<T>> = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed { capacity })?;

        // SAFETY: `capacity` slots were just reserved, and `MaybeUninit<T>`
        // is valid without initialization.
        unsafe { slots.set_len(capacity) };

        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Returns the number of slots. Fixed for the lifetime of the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns a raw pointer to slot 0.
    ///
    /// The pointer is dangling (but non-null and aligned) when the buffer
    /// did not allocate.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    /// Returns a raw mutable pointer to slot 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    /// Returns all slots, live or not.
    #[inline]
    pub fn slots(&self) -> &[MaybeUninit<T>] {
        &self.slots
    }

    /// Returns all slots mutably, live or not.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.slots
    }

    /// Returns slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn slot_unchecked(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(
            index < self.capacity(),
            "FixedBuffer::slot_unchecked: index {index} >= capacity {}",
            self.capacity()
        );

        // SAFETY: caller guarantees index < capacity
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Returns slot `index` mutably without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn slot_unchecked_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(
            index < self.capacity(),
            "FixedBuffer::slot_unchecked_mut: index {index} >= capacity {}",
            self.capacity()
        );

        // SAFETY: caller guarantees index < capacity
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// Exchanges the allocations of `self` and `other` in O(1).
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Moves the allocation out, leaving `self` empty (capacity 0).
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

impl<T> Default for FixedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> core::fmt::Debug for FixedBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
