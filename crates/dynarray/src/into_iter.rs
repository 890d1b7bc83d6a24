// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use dynarray_buffer::FixedBuffer;

/// An owning iterator over the elements of a `DynamicArray`.
///
/// Created by `DynamicArray::into_iter`. Elements not yielded are dropped
/// together with the iterator.
pub struct IntoIter<T> {
    buffer: FixedBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// `buffer` must hold `len` live elements in slots `[0, len)`.
    pub(crate) fn new(buffer: FixedBuffer<T>, len: usize) -> Self {
        debug_assert!(len <= buffer.capacity());

        Self {
            buffer,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are live
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().add(self.start), self.end - self.start) }
    }

    /// Returns the elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [start, end) are live
        unsafe {
            slice::from_raw_parts_mut(
                self.buffer.as_mut_ptr().add(self.start),
                self.end - self.start,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is live; start moves past it so
        // it is read exactly once.
        let value = unsafe { self.buffer.slot_unchecked(self.start).assume_init_read() };
        self.start += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        // SAFETY: the slot at end was live and is now outside [start, end)
        Some(unsafe { self.buffer.slot_unchecked(self.end).assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        self.start = self.end;

        // SAFETY: the remaining slots are live and no longer reachable
        // through the iterator.
        unsafe { ptr::drop_in_place(remaining) }
    }
}
