// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Allocator support.
//!
//! Storage is always generic over the `allocator-api2` trait, which is the
//! same trait hashbrown's `HashTable` is generic over. On nightly, if any
//! crate enables `allocator-api2/nightly`, this becomes a re-export of
//! `core::alloc::Allocator`.

pub use allocator_api2::alloc::{Allocator, Global};

#[inline]
pub(crate) fn global_alloc() -> Global {
    Global
}
