// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit capacity control.
//!
//! `DynamicArray<T>` owns exactly one [`FixedBuffer`](dynarray_buffer::FixedBuffer)
//! and tracks a logical length separately from the buffer's capacity.
//!
//! # Core Guarantees
//!
//! - **Invariant**: `len() <= capacity()` in every reachable state.
//! - **Replacement, not resizing**: growth allocates a new buffer, relocates
//!   the live elements and releases the old buffer.
//! - **Amortized O(1) appends**: a full array doubles its capacity.
//! - **No shrinking**: `clear`, `truncate`, `pop_back` and `reserve` never
//!   release capacity.
//! - **Fallible growth on request**: `try_reserve`, `try_push_back` and
//!   `try_with_capacity` report allocation failure instead of aborting.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarray::{ArrayError, DynamicArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = DynamicArray::new();
//!     array.push_back(1);
//!     array.push_back(2);
//!     array.push_back(3);
//!
//!     assert_eq!(*array.at(0)?, 1);
//!     assert!(array.at(5).is_err());
//!
//!     array.resize(5);
//!     assert_eq!(array, [1, 2, 3, 0, 0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Explicit Capacity
//!
//! ```rust
//! use dynarray::{DynamicArray, reserve};
//!
//! let mut array: DynamicArray<u64> = DynamicArray::with_capacity(4);
//! assert_eq!(array.capacity(), 4);
//!
//! let hinted: DynamicArray<u64> = reserve(4).into();
//! assert_eq!(hinted.capacity(), 4);
//!
//! array.extend([1, 2, 3, 4]);
//! array.push_back(5); // full: 4 -> 8
//! assert_eq!(array.capacity(), 8);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures for testing error
//! handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! dynarray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`DynamicArrayBehaviour`] to make fallible growth fail, and
//! `DynamicArray::reallocations()` to count buffer replacements.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cmp;
mod dynamic_array;
mod error;
mod into_iter;
mod macros;
mod reserve_hint;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::ArrayError;
pub use into_iter::IntoIter;
pub use reserve_hint::{ReserveHint, reserve};

pub use dynarray_buffer::BufferError;

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;

/// Exchanges the contents of two arrays in O(1).
///
/// Free-function form of [`DynamicArray::swap_with`].
///
/// # Example
///
/// ```rust
/// use dynarray::{DynamicArray, swap};
///
/// let mut a = DynamicArray::from([1, 2]);
/// let mut b = DynamicArray::from([3]);
/// swap(&mut a, &mut b);
///
/// assert_eq!(a, [3]);
/// assert_eq!(b, [1, 2]);
/// ```
pub fn swap<T>(a: &mut DynamicArray<T>, b: &mut DynamicArray<T>) {
    a.swap_with(b);
}
