// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity slot buffers with exclusive ownership.
//!
//! This crate provides [`FixedBuffer`], the storage primitive behind
//! `dynarray::DynamicArray`. A `FixedBuffer<T>`:
//!
//! - Allocates exactly `capacity` slots once, at creation
//! - Never grows, shrinks or reallocates
//! - Never constructs or drops elements (slots are `MaybeUninit<T>`)
//! - Cannot be cloned: ownership moves by value, [`FixedBuffer::take`] or
//!   [`FixedBuffer::swap_with`]
//!
//! Tracking which slots hold live values is the owner's job.
//!
//! # Example
//!
//! ```rust
//! use dynarray_buffer::{BufferError, FixedBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = FixedBuffer::<u32>::try_create(4)?;
//!     assert_eq!(buffer.capacity(), 4);
//!
//!     buffer.slots_mut()[0].write(42);
//!
//!     // SAFETY: slot 0 was written above.
//!     let value = unsafe { buffer.slots()[0].assume_init_read() };
//!     assert_eq!(value, 42);
//!
//!     let mut other = FixedBuffer::<u32>::empty();
//!     buffer.swap_with(&mut other);
//!
//!     assert_eq!(buffer.capacity(), 0);
//!     assert_eq!(other.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod fixed_buffer;

pub use error::BufferError;
pub use fixed_buffer::FixedBuffer;
