// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::BufferError;

#[test]
fn test_display_capacity_overflow() {
    let error = BufferError::CapacityOverflow { capacity: 12 };

    assert_eq!(
        error.to_string(),
        "capacity overflow: 12 slots cannot be represented"
    );
}

#[test]
fn test_display_allocation_failed() {
    let error = BufferError::AllocationFailed { capacity: 3 };

    assert_eq!(error.to_string(), "allocation of 3 slots failed");
}

#[test]
fn test_is_core_error() {
    fn assert_error<E: core::error::Error>(_: &E) {}

    assert_error(&BufferError::AllocationFailed { capacity: 0 });
}
