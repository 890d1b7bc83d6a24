// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray.

use dynarray_buffer::BufferError;
use thiserror::Error;

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// Checked access past the logical length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length at the time of access.
        len: usize,
    },

    /// A replacement buffer could not be created.
    ///
    /// Only returned by the `try_*` growth methods. The array is left
    /// exactly as it was before the call.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}
