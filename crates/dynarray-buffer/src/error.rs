// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray-buffer.
use thiserror::Error;

/// Errors that can occur when creating a buffer.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested slot count cannot be represented: its byte size exceeds
    /// `isize::MAX`, or growing past it overflows `usize`.
    #[error("capacity overflow: {capacity} slots cannot be represented")]
    CapacityOverflow {
        /// Number of slots requested, or the capacity that could not grow.
        capacity: usize,
    },

    /// The allocator could not satisfy the request.
    #[error("allocation of {capacity} slots failed")]
    AllocationFailed {
        /// Number of slots requested.
        capacity: usize,
    },
}
