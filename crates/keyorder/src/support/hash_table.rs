// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A wrapper around a hash table of ranks, with its hasher state.

use super::{alloc::Allocator, map_hash::MapHash};
use crate::internal::TableValidationError;
use alloc::{format, vec::Vec};
use core::{fmt, hash::BuildHasher};
use hashbrown::HashTable;

/// A hash table storing ranks into an external dense vector of items.
///
/// The table never stores keys. Hashing and equality go through a `lookup`
/// closure mapping a rank to the key of the item at that rank, so the table
/// and the item vector must be kept in sync by the caller.
#[derive(Clone)]
pub(crate) struct MapHashTable<S, A: Allocator> {
    state: S,
    items: HashTable<usize, A>,
}

impl<S, A: Allocator> fmt::Debug for MapHashTable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapHashTable")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<S: Clone + BuildHasher, A: Allocator> MapHashTable<S, A> {
    pub(crate) fn with_capacity_and_hasher_in(
        capacity: usize,
        hasher: S,
        alloc: A,
    ) -> Self {
        Self { state: hasher, items: HashTable::with_capacity_in(capacity, alloc) }
    }

    #[inline]
    pub(crate) fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn validate(
        &self,
        expected_len: usize,
    ) -> Result<(), TableValidationError> {
        if self.len() != expected_len {
            return Err(TableValidationError::new(format!(
                "expected length {expected_len}, was {}",
                self.len()
            )));
        }

        // Ranks are dense: every value in 0..len must be present exactly
        // once.
        let mut values: Vec<_> = self.items.iter().copied().collect();
        values.sort_unstable();
        for (i, value) in values.iter().enumerate() {
            if *value != i {
                return Err(TableValidationError::new(format!(
                    "expected value at index {i} to be {i}, was {value}"
                )));
            }
        }

        Ok(())
    }

    pub(crate) fn compute_hash(&self, key: &str) -> MapHash<S> {
        MapHash { state: self.state.clone(), hash: self.state.hash_one(key) }
    }

    #[inline]
    pub(crate) fn hash_key(&self, key: &str) -> u64 {
        self.state.hash_one(key)
    }

    pub(crate) fn find_index<K, F>(&self, key: &str, lookup: F) -> Option<usize>
    where
        F: Fn(usize) -> K,
        K: AsRef<str>,
    {
        let hash = self.state.hash_one(key);
        self.items.find(hash, |&index| lookup(index).as_ref() == key).copied()
    }

    /// Registers `index` under `hash`. The caller must have checked that the
    /// key isn't already present.
    pub(crate) fn insert_unique<K, F>(
        &mut self,
        hash: u64,
        index: usize,
        lookup: F,
    ) where
        F: Fn(usize) -> K,
        K: AsRef<str>,
    {
        let state = &self.state;
        self.items.insert_unique(hash, index, |&ix| {
            state.hash_one(lookup(ix).as_ref())
        });
    }

    /// Removes the entry for `index`, found through the hash of its key.
    ///
    /// Returns false if no such entry exists.
    pub(crate) fn remove_index(&mut self, hash: u64, index: usize) -> bool {
        match self.items.find_entry(hash, |&ix| ix == index) {
            Ok(entry) => {
                entry.remove();
                true
            }
            Err(_) => false,
        }
    }

    /// Points the entry for `old` (found through `hash`) at `new` instead.
    ///
    /// Returns false if no such entry exists.
    pub(crate) fn retarget_index(
        &mut self,
        hash: u64,
        old: usize,
        new: usize,
    ) -> bool {
        match self.items.find_mut(hash, |&ix| ix == old) {
            Some(ix) => {
                *ix = new;
                true
            }
            None => false,
        }
    }

    /// Applies `f` to every stored rank, without rehashing.
    ///
    /// `f` must be a permutation of the stored ranks, or the table ends up
    /// inconsistent with the item vector.
    pub(crate) fn remap_indexes<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> usize,
    {
        for ix in self.items.iter_mut() {
            *ix = f(*ix);
        }
    }

    /// Discards all entries and registers ranks `0..len` again.
    pub(crate) fn rebuild<K, F>(&mut self, len: usize, lookup: F)
    where
        F: Fn(usize) -> K,
        K: AsRef<str>,
    {
        self.items.clear();
        for index in 0..len {
            let hash = self.state.hash_one(lookup(index).as_ref());
            self.insert_unique(hash, index, &lookup);
        }
    }

    pub(crate) fn reserve<K, F>(&mut self, additional: usize, lookup: F)
    where
        F: Fn(usize) -> K,
        K: AsRef<str>,
    {
        let state = &self.state;
        self.items.reserve(additional, |&ix| state.hash_one(lookup(ix).as_ref()));
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
