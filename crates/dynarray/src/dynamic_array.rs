// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

use dynarray_buffer::{BufferError, FixedBuffer};

use crate::error::ArrayError;
use crate::into_iter::IntoIter;

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use dynarray::{ArrayError, DynamicArray, DynamicArrayBehaviour};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_reserve_failure() -> Result<(), ArrayError> {
///         let mut array = DynamicArray::<u8>::new();
///
///         // Inject failure
///         array.change_behaviour(DynamicArrayBehaviour::FailAtReserve);
///         assert!(array.try_reserve(16).is_err());
///
///         // Reset to normal behaviour
///         array.change_behaviour(DynamicArrayBehaviour::None);
///         array.try_reserve(16)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every fallible growth (`try_reserve`, `try_push_back`) fails with
    /// `BufferError::AllocationFailed` before touching the allocator.
    FailAtReserve,
}

/// A contiguous, growable array over an exclusively owned [`FixedBuffer`].
///
/// `DynamicArray` tracks a logical length separately from the buffer's
/// capacity. Slots `[0, len)` hold live values; slots `[len, capacity)` are
/// unspecified. The buffer is never resized in place: growing allocates a new
/// `FixedBuffer`, relocates the live elements into it and releases the old one.
///
/// # Growth policy
///
/// - An array that never allocated grows to [`BASELINE_CAPACITY`] on its
///   first push.
/// - A full array grows by [`GROWTH_FACTOR`], which keeps appends amortized
///   O(1).
/// - [`reserve`] grows to exactly the requested capacity and never shrinks.
///
/// [`BASELINE_CAPACITY`]: Self::BASELINE_CAPACITY
/// [`GROWTH_FACTOR`]: Self::GROWTH_FACTOR
/// [`reserve`]: Self::reserve
///
/// # Example
///
/// ```rust
/// use dynarray::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push_back(1);
/// array.push_back(2);
/// array.push_back(3);
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array, [1, 2, 3]);
///
/// array.insert(1, 9);
/// assert_eq!(array, [1, 9, 2, 3]);
///
/// array.erase(1);
/// assert_eq!(array, [1, 2, 3]);
/// ```
pub struct DynamicArray<T> {
    buffer: FixedBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
    #[cfg(any(test, feature = "test_utils"))]
    reallocations: usize,
}

#[cold]
#[inline(never)]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> DynamicArray<T> {
    /// Capacity allocated by the first push into an array that never allocated.
    pub const BASELINE_CAPACITY: usize = 10;

    /// Multiplier applied to the capacity when a push finds the array full.
    pub const GROWTH_FACTOR: usize = 2;

    fn from_buffer(buffer: FixedBuffer<T>) -> Self {
        Self {
            buffer,
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
            #[cfg(any(test, feature = "test_utils"))]
            reallocations: 0,
        }
    }

    /// Creates an empty array. Does not allocate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self::from_buffer(FixedBuffer::empty())
    }

    /// Creates an empty array with exactly `capacity` slots allocated.
    ///
    /// No element is constructed.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocation failure is fatal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let array: DynamicArray<String> = DynamicArray::with_capacity(10);
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(FixedBuffer::create(capacity))
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Buffer`] if the buffer cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        let buffer = FixedBuffer::try_create(capacity)?;
        Ok(Self::from_buffer(buffer))
    }

    /// Creates an array of `len` default values, with capacity `len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let array: DynamicArray<i32> = DynamicArray::with_len(3);
    /// assert_eq!(array, [0, 0, 0]);
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len);

        for _ in 0..len {
            // SAFETY: capacity is len and fewer than len elements were pushed
            unsafe { array.push_unchecked(T::default()) };
        }

        array
    }

    /// Creates an array of `len` copies of `value`, with capacity `len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let array = DynamicArray::from_elem(3, 7);
    /// assert_eq!(array, [7, 7, 7]);
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len);

        if len == 0 {
            return array;
        }

        for _ in 1..len {
            // SAFETY: capacity is len and fewer than len elements were pushed
            unsafe { array.push_unchecked(value.clone()) };
        }

        // SAFETY: exactly one slot is left
        unsafe { array.push_unchecked(value) };

        array
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if the array holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and the pointer is valid
        // (dangling but aligned when nothing is allocated, with len == 0)
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see as_slice
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr()
    }

    /// Returns a reference to the element at `index`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{ArrayError, DynamicArray};
    ///
    /// let array = DynamicArray::from([1, 2, 3]);
    ///
    /// assert_eq!(array.at(1), Ok(&2));
    /// assert_eq!(array.at(5), Err(ArrayError::OutOfRange { index: 5, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;

        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// Does nothing if `new_capacity <= capacity()`: the buffer never shrinks
    /// and element values are untouched. Otherwise a new buffer is allocated,
    /// the live elements are relocated into it in order, and the old buffer is
    /// released.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocation failure is fatal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2]);
    /// array.reserve(8);
    /// assert_eq!(array.capacity(), 8);
    ///
    /// array.reserve(4);
    /// assert_eq!(array.capacity(), 8);
    /// assert_eq!(array, [1, 2]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }

        self.replace_buffer(FixedBuffer::create(new_capacity));
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Buffer`] if the replacement buffer cannot be
    /// allocated. The array is unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtReserve) {
            return Err(BufferError::AllocationFailed {
                capacity: new_capacity,
            }
            .into());
        }

        let replacement = FixedBuffer::try_create(new_capacity).inspect_err(|e| {
            log::debug!("DynamicArray: reserve of {new_capacity} slots failed: {e}");
        })?;
        self.replace_buffer(replacement);

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn replace_buffer(&mut self, mut replacement: FixedBuffer<T>) {
        debug_assert!(replacement.capacity() >= self.len);

        log::trace!(
            "DynamicArray: replacing buffer, capacity {} -> {}, relocating {} elements",
            self.capacity(),
            replacement.capacity(),
            self.len
        );

        // SAFETY: slots [0, len) of the current buffer are live, the
        // replacement holds at least len slots, and the two allocations are
        // distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), replacement.as_mut_ptr(), self.len);
        }

        self.buffer.swap_with(&mut replacement);

        #[cfg(any(test, feature = "test_utils"))]
        {
            self.reallocations += 1;
        }

        // `replacement` now owns the old allocation. Its slots were moved out
        // bitwise and FixedBuffer never drops slots, so only memory is freed.
    }

    /// Capacity the next push into a full array grows to.
    ///
    /// Overflow reports the current capacity, the one that could not grow.
    pub(crate) fn grown_capacity(&self) -> Result<usize, BufferError> {
        match self.capacity() {
            0 => Ok(Self::BASELINE_CAPACITY),
            capacity => capacity
                .checked_mul(Self::GROWTH_FACTOR)
                .ok_or(BufferError::CapacityOverflow { capacity }),
        }
    }

    #[track_caller]
    fn grow_one(&mut self) {
        let Ok(new_capacity) = self.grown_capacity() else {
            capacity_overflow();
        };

        self.reserve(new_capacity);
    }

    fn try_grow_one(&mut self) -> Result<(), ArrayError> {
        let new_capacity = self.grown_capacity()?;
        self.try_reserve(new_capacity)
    }

    /// Writes `value` at slot `len` and increments `len`.
    ///
    /// # Safety
    ///
    /// `len < capacity()` must hold.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        // SAFETY: caller guarantees len < capacity
        unsafe { self.buffer.slot_unchecked_mut(self.len).write(value) };
        self.len += 1;
    }

    /// Drops every element. Capacity is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3]);
    /// array.clear();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements in `[new_len, len)`. No-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;

        // len drops before the tail does: a panicking destructor must leave
        // the tail outside the live range.
        self.len = new_len;

        // SAFETY: slots [new_len, new_len + tail_len) were live and are now
        // outside the live range.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes the array to `new_len` elements.
    ///
    /// - Shrinking truncates; the buffer is kept.
    /// - Growing within capacity default-constructs the new slots in place.
    /// - Growing past capacity first reserves
    ///   `max(new_len, capacity * GROWTH_FACTOR)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3]);
    /// array.resize(5);
    ///
    /// assert_eq!(array, [1, 2, 3, 0, 0]);
    /// assert_eq!(array.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len < self.len {
            self.truncate(new_len);
            return;
        }

        if new_len > self.capacity() {
            let doubled = self.capacity().saturating_mul(Self::GROWTH_FACTOR);
            self.reserve(new_len.max(doubled));
        }

        while self.len < new_len {
            // SAFETY: new_len <= capacity after the reserve above
            unsafe { self.push_unchecked(T::default()) };
        }
    }

    /// Appends `value`, growing the buffer if the array is full.
    ///
    /// An array without an allocation grows to [`BASELINE_CAPACITY`]; a full
    /// one grows by [`GROWTH_FACTOR`]. Amortized O(1).
    ///
    /// [`BASELINE_CAPACITY`]: Self::BASELINE_CAPACITY
    /// [`GROWTH_FACTOR`]: Self::GROWTH_FACTOR
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocation failure is fatal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.push_back(1u8);
    ///
    /// assert_eq!(array, [1]);
    /// assert_eq!(array.capacity(), DynamicArray::<u8>::BASELINE_CAPACITY);
    /// ```
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_one();
        }

        // SAFETY: grow_one left at least one free slot
        unsafe { self.push_unchecked(value) };
    }

    /// Fallible form of [`push_back`](Self::push_back).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Buffer`] if growing fails. `value` is dropped and
    /// the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            self.try_grow_one()?;
        }

        // SAFETY: try_grow_one left at least one free slot
        unsafe { self.push_unchecked(value) };

        Ok(())
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// The buffer is kept.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot len was live and is now outside the live range, so it
        // is read exactly once.
        Some(unsafe { self.buffer.slot_unchecked(self.len).assume_init_read() })
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Returns `index`, the position of the inserted element. Inserting at
    /// `len` is a [`push_back`](Self::push_back).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3]);
    /// let at = array.insert(1, 9);
    ///
    /// assert_eq!(at, 1);
    /// assert_eq!(array, [1, 9, 2, 3]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        if index > self.len {
            assert_failed(index, self.len);
        }

        if index == self.len {
            self.push_back(value);
            return index;
        }

        if self.len == self.capacity() {
            self.grow_one();
        }

        // SAFETY: index < len < capacity. ptr::copy is an overlapping move,
        // so [index, len) lands on [index + 1, len + 1) intact.
        unsafe {
            let pos = self.buffer.as_mut_ptr().add(index);
            ptr::copy(pos, pos.add(1), self.len - index);
            pos.write(value);
        }

        self.len += 1;
        index
    }

    /// Removes the element at `index` and returns it, shifting `(index, len)`
    /// one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("removal index (is {index}) should be < len (is {len})");
        }

        if index >= self.len {
            assert_failed(index, self.len);
        }

        // SAFETY: index < len. The value is read out before its slot is
        // overwritten, and len is lowered so it is not dropped twice.
        unsafe {
            let pos = self.buffer.as_mut_ptr().add(index);
            let value = pos.read();
            ptr::copy(pos.add(1), pos, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// Returns `index`, which now holds the element that followed the erased
    /// one (or equals `len` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 9, 2, 3]);
    /// let next = array.erase(1);
    ///
    /// assert_eq!(array, [1, 2, 3]);
    /// assert_eq!(array[next], 2);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        // The array is consistent before the removed value's destructor runs.
        drop(self.remove(index));
        index
    }

    /// Exchanges buffer, length and capacity with `other` in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap_with(&mut other.buffer);
        core::mem::swap(&mut self.len, &mut other.len);

        #[cfg(any(test, feature = "test_utils"))]
        core::mem::swap(&mut self.reallocations, &mut other.reallocations);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let mut source = DynamicArray::from([1, 2, 3]);
    /// let target = source.take();
    ///
    /// assert_eq!(target, [1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        taken.swap_with(self);
        taken
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of buffer replacements the current contents went through.
    ///
    /// The count travels with the buffer: [`swap_with`](Self::swap_with) and
    /// [`take`](Self::take) move it along, leaving a taken-from array at 0.
    ///
    /// This is only available with the `test_utils` feature.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub(crate) fn into_raw_parts(mut self) -> (FixedBuffer<T>, usize) {
        let len = core::mem::replace(&mut self.len, 0);
        let buffer = self.buffer.take();

        (buffer, len)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) are live and dropped exactly once here; the buffer
        // then releases the allocation without touching the slots.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep-copies the live elements into a buffer of exactly `len` slots.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);

        for value in self.as_slice() {
            // SAFETY: capacity is self.len and at most self.len values are pushed
            unsafe { copy.push_unchecked(value.clone()) };
        }

        copy
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);

        for value in values {
            // SAFETY: capacity is N and the array yields N values
            unsafe { array.push_unchecked(value) };
        }

        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_capacity(values.len());

        for value in values {
            // SAFETY: capacity is values.len()
            unsafe { array.push_unchecked(value.clone()) };
        }

        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut array = Self::with_capacity(values.len());

        for value in values {
            // SAFETY: capacity is the Vec's length
            unsafe { array.push_unchecked(value) };
        }

        array
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buffer, len) = self.into_raw_parts();
        IntoIter::new(buffer, len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
