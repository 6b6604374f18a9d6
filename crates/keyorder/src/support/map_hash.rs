// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::{fmt, hash::BuildHasher};

/// Packages up a state and a hash for later validation.
#[derive(Clone)]
pub(crate) struct MapHash<S> {
    pub(super) state: S,
    pub(super) hash: u64,
}

impl<S> fmt::Debug for MapHash<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The state is random and noisy: only show the hash.
        f.debug_struct("MapHash")
            .field("hash", &self.hash)
            .finish_non_exhaustive()
    }
}

impl<S: BuildHasher> MapHash<S> {
    pub(crate) fn is_same_hash(&self, key: &str) -> bool {
        self.hash == self.state.hash_one(key)
    }
}
