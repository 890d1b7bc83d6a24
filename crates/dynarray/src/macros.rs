// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`DynamicArray`](crate::DynamicArray) from a literal sequence.
///
/// - `dynarray![]` creates an empty array without allocating.
/// - `dynarray![a, b, c]` allocates exactly as many slots as there are values.
/// - `dynarray![value; n]` creates `n` clones of `value`.
///
/// # Example
///
/// ```rust
/// use dynarray::dynarray;
///
/// let array = dynarray![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 3);
///
/// let filled = dynarray![7; 3];
/// assert_eq!(filled, [7, 7, 7]);
///
/// let empty: dynarray::DynamicArray<u8> = dynarray![];
/// assert_eq!(empty.capacity(), 0);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynamicArray::from_elem($len, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($value),+])
    };
}
