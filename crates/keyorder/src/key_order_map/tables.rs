// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::KeyOrderItem;
use crate::{
    internal::ValidationError,
    support::{alloc::Allocator, hash_table::MapHashTable, map_hash::MapHash},
};
use core::hash::BuildHasher;

#[derive(Clone)]
pub(super) struct KeyOrderMapTables<S, A: Allocator> {
    pub(super) key_to_index: MapHashTable<S, A>,
}

impl<S: Clone + BuildHasher, A: Allocator> KeyOrderMapTables<S, A> {
    pub(super) fn with_capacity_and_hasher_in(
        capacity: usize,
        hasher: S,
        alloc: A,
    ) -> Self {
        Self {
            key_to_index: MapHashTable::with_capacity_and_hasher_in(
                capacity, hasher, alloc,
            ),
        }
    }

    pub(super) fn hasher(&self) -> &S {
        self.key_to_index.state()
    }

    pub(super) fn validate(
        &self,
        expected_len: usize,
    ) -> Result<(), ValidationError> {
        self.key_to_index.validate(expected_len).map_err(|error| {
            ValidationError::Table { name: "key_to_index", error }
        })?;

        Ok(())
    }

    pub(super) fn make_hash<T: KeyOrderItem>(&self, item: &T) -> MapHash<S> {
        self.key_to_index.compute_hash(item.key().as_ref())
    }

    pub(super) fn hash_item<T: KeyOrderItem>(&self, item: &T) -> u64 {
        self.key_to_index.hash_key(item.key().as_ref())
    }
}
