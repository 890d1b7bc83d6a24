// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynarray crates.
//!
//! - [`DropTracker`] / [`Tracked`]: count drops to catch leaks and double drops
//! - [`index_permutations`]: exhaustive orderings for position-sensitive tests
//!
//! ## License
//!
//! GPL-3.0-only

mod drop_tracker;
mod permutations;

pub use drop_tracker::{DropTracker, Tracked};
pub use permutations::index_permutations;
