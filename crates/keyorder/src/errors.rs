// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for this crate.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// An item conflicts with an existing item.
///
/// Returned by [`KeyOrderMap::insert_unique`] and
/// [`KeyOrderMap::insert_unique_at`]. The map is left unchanged.
///
/// [`KeyOrderMap::insert_unique`]: crate::KeyOrderMap::insert_unique
/// [`KeyOrderMap::insert_unique_at`]: crate::KeyOrderMap::insert_unique_at
#[derive(Debug)]
pub struct DuplicateItem<T, D = T> {
    new: T,
    duplicates: Vec<D>,
}

impl<T, D> DuplicateItem<T, D> {
    /// Creates a new `DuplicateItem` error.
    #[doc(hidden)]
    pub fn __internal_new(new: T, duplicates: Vec<D>) -> Self {
        DuplicateItem { new, duplicates }
    }

    /// Returns the new item that was attempted to be inserted.
    #[inline]
    pub fn new_item(&self) -> &T {
        &self.new
    }

    /// Returns the list of items that conflict with the new item.
    ///
    /// Keys are unique, so there is at most one such item per map.
    #[inline]
    pub fn duplicates(&self) -> &[D] {
        &self.duplicates
    }

    /// Converts self into its constituent parts.
    pub fn into_parts(self) -> (T, Vec<D>) {
        (self.new, self.duplicates)
    }
}

impl<T: Clone> DuplicateItem<T, &T> {
    /// Converts self to an owned `DuplicateItem` by cloning the list of
    /// duplicates.
    ///
    /// If `T` is `'static`, the owned form is suitable for conversion to
    /// `Box<dyn std::error::Error>`, `anyhow::Error`, and so on.
    pub fn into_owned(self) -> DuplicateItem<T> {
        DuplicateItem {
            new: self.new,
            duplicates: self.duplicates.into_iter().cloned().collect(),
        }
    }
}

impl<T: fmt::Debug, D: fmt::Debug> fmt::Display for DuplicateItem<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "new item: {:?} conflicts with existing: {:?}",
            self.new, self.duplicates
        )
    }
}

impl<T: fmt::Debug, D: fmt::Debug> core::error::Error for DuplicateItem<T, D> {}

/// An item's key is not registered in the map.
///
/// Returned by [`KeyOrderMap::update`], which hands the rejected item back.
/// The map is left unchanged.
///
/// [`KeyOrderMap::update`]: crate::KeyOrderMap::update
#[derive(Debug)]
pub struct UnknownItem<T> {
    item: T,
}

impl<T> UnknownItem<T> {
    pub(crate) fn new(item: T) -> Self {
        UnknownItem { item }
    }

    /// Returns the item that was attempted to be stored.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Converts self into the item that was attempted to be stored.
    #[inline]
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T: fmt::Debug> fmt::Display for UnknownItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "item {:?} does not match any registered key", self.item)
    }
}

impl<T: fmt::Debug> core::error::Error for UnknownItem<T> {}

/// A key is not registered in the map.
///
/// Returned by [`KeyOrderMap::shift_remove`]. The map is left unchanged.
///
/// [`KeyOrderMap::shift_remove`]: crate::KeyOrderMap::shift_remove
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKey {
    key: String,
}

impl UnknownKey {
    pub(crate) fn new(key: &str) -> Self {
        UnknownKey { key: key.into() }
    }

    /// Returns the key that was looked up.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "key {:?} is not registered", self.key)
    }
}

impl core::error::Error for UnknownKey {}
