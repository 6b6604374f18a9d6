// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    IntoIter, Iter, IterMut, KeyOrderItem, Keys, RefMut,
    tables::KeyOrderMapTables,
};
use crate::{
    DefaultHashBuilder,
    errors::{DuplicateItem, UnknownItem, UnknownKey},
    internal::ValidationError,
    support::{
        alloc::{Allocator, Global, global_alloc},
        fmt_utils::KeyAsDebug,
        ordered_set::OrderedSet,
    },
};
use alloc::{format, vec};
use core::{cmp::Ordering, fmt, hash::BuildHasher, ops::Index};

/// An ordered map where the key is part of the value.
///
/// Items are kept in an explicit order: the order they were inserted in,
/// unless changed through positional operations like
/// [`insert_unique_at`](Self::insert_unique_at),
/// [`swap_indices`](Self::swap_indices) or [`move_index`](Self::move_index).
/// Each item has a *rank*: its zero-based position in that order. Ranks are
/// always contiguous.
///
/// Items are stored densely in rank order, with a hash table mapping each
/// key to its rank. Lookups by key or by rank are O(1), and appending is
/// amortized O(1). Inserting or removing anywhere but the end is O(n), since
/// the ranks of later items shift.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use keyorder::{KeyOrderItem, KeyOrderMap};
///
/// #[derive(Debug, PartialEq, Eq)]
/// struct Section {
///     name: String,
///     lines: Vec<String>,
/// }
///
/// impl KeyOrderItem for Section {
///     type Key<'a> = &'a str;
///
///     fn key(&self) -> Self::Key<'_> {
///         &self.name
///     }
/// }
///
/// let section = |name: &str| Section { name: name.to_string(), lines: vec![] };
///
/// let mut config = KeyOrderMap::new();
/// config.insert_unique(section("server")).unwrap();
/// config.insert_unique(section("logging")).unwrap();
/// config.insert_unique_at(1, section("database")).unwrap();
///
/// assert_eq!(config.keys().collect::<Vec<_>>(), ["server", "database", "logging"]);
///
/// // Remove by key: later sections shift down one rank.
/// let removed = config.shift_remove("database").unwrap();
/// assert_eq!(removed.name, "database");
/// assert_eq!(config.get_index(1).unwrap().name, "logging");
///
/// // Missing keys are reported, not panicked on.
/// assert!(config.get("database").is_none());
/// assert!(config.shift_remove("database").is_err());
/// # }
/// ```
pub struct KeyOrderMap<
    T: KeyOrderItem,
    S = DefaultHashBuilder,
    A: Allocator = Global,
> {
    items: OrderedSet<T, A>,
    tables: KeyOrderMapTables<S, A>,
}

impl<T, S, A> Clone for KeyOrderMap<T, S, A>
where
    T: KeyOrderItem + Clone,
    S: Clone,
    A: Allocator + Clone,
{
    fn clone(&self) -> Self {
        Self { items: self.items.clone(), tables: self.tables.clone() }
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher + Default, A: Allocator + Default>
    Default for KeyOrderMap<T, S, A>
{
    fn default() -> Self {
        Self {
            items: OrderedSet::with_capacity_in(0, A::default()),
            tables: KeyOrderMapTables::with_capacity_and_hasher_in(
                0,
                S::default(),
                A::default(),
            ),
        }
    }
}

#[cfg(feature = "default-hasher")]
impl<T: KeyOrderItem> KeyOrderMap<T> {
    /// Creates a new, empty `KeyOrderMap`.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher_in(
            0,
            DefaultHashBuilder::default(),
            global_alloc(),
        )
    }

    /// Creates a new `KeyOrderMap` with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher_in(
            capacity,
            DefaultHashBuilder::default(),
            global_alloc(),
        )
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher> KeyOrderMap<T, S> {
    /// Creates a new, empty `KeyOrderMap` with the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher_in(0, hasher, global_alloc())
    }

    /// Creates a new `KeyOrderMap` with the given capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::with_capacity_and_hasher_in(capacity, hasher, global_alloc())
    }
}

#[cfg(feature = "default-hasher")]
impl<T: KeyOrderItem, A: Clone + Allocator>
    KeyOrderMap<T, DefaultHashBuilder, A>
{
    /// Creates a new, empty `KeyOrderMap` using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        Self::with_capacity_and_hasher_in(0, DefaultHashBuilder::default(), alloc)
    }

    /// Creates an empty `KeyOrderMap` with the specified capacity, using the
    /// given allocator.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self::with_capacity_and_hasher_in(
            capacity,
            DefaultHashBuilder::default(),
            alloc,
        )
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Clone + Allocator>
    KeyOrderMap<T, S, A>
{
    /// Creates a new, empty `KeyOrderMap` with the given hasher and
    /// allocator.
    pub fn with_hasher_in(hasher: S, alloc: A) -> Self {
        Self::with_capacity_and_hasher_in(0, hasher, alloc)
    }

    /// Creates a new, empty `KeyOrderMap` with the given capacity, hasher,
    /// and allocator.
    pub fn with_capacity_and_hasher_in(
        capacity: usize,
        hasher: S,
        alloc: A,
    ) -> Self {
        Self {
            items: OrderedSet::with_capacity_in(capacity, alloc.clone()),
            tables: KeyOrderMapTables::with_capacity_and_hasher_in(
                capacity, hasher, alloc,
            ),
        }
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> KeyOrderMap<T, S, A> {
    /// Returns the hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.tables.hasher()
    }

    /// Returns the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.items.allocator()
    }

    /// Returns the currently allocated capacity of the map.
    pub fn capacity(&self) -> usize {
        // items and tables.capacity might theoretically diverge: use
        // items.capacity.
        self.items.capacity()
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the items in the map, in rank order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    /// Iterates over the items in the map, in rank order, allowing for
    /// mutation.
    ///
    /// Keys must not be changed through the returned [`RefMut`]s.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, S, A> {
        IterMut::new(&self.tables, &mut self.items)
    }

    /// Iterates over the keys in the map, in rank order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, T> {
        Keys::new(self.iter())
    }

    /// Returns the items of the map as a slice, in rank order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Checks general invariants of the map.
    ///
    /// The code below always upholds these invariants, but it's useful to
    /// have an explicit check for tests.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError>
    where
        T: fmt::Debug,
    {
        self.tables.validate(self.len())?;

        // Check that every item's key resolves to the item's own rank. Since
        // the table holds exactly the ranks 0..len, this also rules out
        // duplicate keys.
        for (ix, item) in self.items.iter().enumerate() {
            let key = item.key();
            let Some(ix1) = self.find_index(key.as_ref()) else {
                return Err(ValidationError::general(format!(
                    "item at index {ix} has no key index"
                )));
            };

            if ix1 != ix {
                return Err(ValidationError::general(format!(
                    "item at index {ix} ({item:?}) has mismatched index: {ix1}",
                )));
            }
        }

        Ok(())
    }

    /// Appends a value to the map, returning an error if an item with the
    /// same key is already present.
    ///
    /// The map is unchanged on error.
    pub fn insert_unique(
        &mut self,
        value: T,
    ) -> Result<(), DuplicateItem<T, &T>> {
        self.insert_unique_impl(self.len(), value)
    }

    /// Inserts a value so that it ends up at rank `index`, shifting the
    /// items at `index` and later up by one rank.
    ///
    /// If `index` is greater than or equal to the length of the map, the
    /// value is appended instead.
    ///
    /// Returns an error if an item with the same key is already present. The
    /// map is unchanged on error.
    pub fn insert_unique_at(
        &mut self,
        index: usize,
        value: T,
    ) -> Result<(), DuplicateItem<T, &T>> {
        self.insert_unique_impl(index, value)
    }

    /// Inserts a value into the map, replacing and returning the item with
    /// the same key, if any.
    ///
    /// A replaced item keeps its rank. Otherwise the value is appended.
    #[doc(alias = "insert")]
    pub fn insert_overwrite(&mut self, value: T) -> Option<T> {
        let index = self.find_index(value.key().as_ref());
        match index {
            Some(index) => Some(self.items.replace(index, value)),
            None => {
                if self.insert_unique_impl(self.len(), value).is_err() {
                    // We should never get here: the key was just looked up.
                    panic!("insert_unique failed after missing lookup");
                }
                None
            }
        }
    }

    /// Replaces the item with the same key as `value`, returning the old
    /// item.
    ///
    /// The item keeps its rank. Returns an error containing `value` if no
    /// item with that key is present; the map is unchanged in that case.
    pub fn update(&mut self, value: T) -> Result<T, UnknownItem<T>> {
        let index = self.find_index(value.key().as_ref());
        match index {
            Some(index) => Ok(self.items.replace(index, value)),
            None => Err(UnknownItem::new(value)),
        }
    }

    /// Returns true if the map contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Gets a reference to the item with the given key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.find_index(key).map(|ix| &self.items[ix])
    }

    /// Gets a mutable reference to the item with the given key.
    pub fn get_mut(&mut self, key: &str) -> Option<RefMut<'_, T, S>> {
        let index = self.find_index(key)?;
        self.get_index_mut(index)
    }

    /// Gets the item at rank `index`, or `None` if `index` is out of range.
    ///
    /// To panic on out-of-range access instead, index the map directly:
    /// `map[index]`.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the item at rank `index`.
    pub fn get_index_mut(&mut self, index: usize) -> Option<RefMut<'_, T, S>> {
        let hash = self.tables.make_hash(self.items.get(index)?);
        let item = self.items.get_mut(index)?;
        Some(RefMut::new(hash, item))
    }

    /// Gets the rank of the item with the given key.
    pub fn get_index_of(&self, key: &str) -> Option<usize> {
        self.find_index(key)
    }

    /// Returns the item at rank 0, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.get(0)
    }

    /// Returns the item at the last rank, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|ix| self.items.get(ix))
    }

    /// Removes and returns the item with the given key, shifting all later
    /// items down by one rank.
    ///
    /// The relative order of the remaining items is preserved. Returns an
    /// error if no item has this key; the map is unchanged in that case.
    pub fn shift_remove(&mut self, key: &str) -> Result<T, UnknownKey> {
        let Some(index) = self.find_index(key) else {
            return Err(UnknownKey::new(key));
        };
        Ok(self.remove_at(index))
    }

    /// Removes and returns the item at rank `index`, shifting all later
    /// items down by one rank.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn shift_remove_index(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.remove_at(index))
    }

    /// Removes and returns the item at the last rank, if any.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.len().checked_sub(1)?;
        Some(self.remove_at(index))
    }

    /// Swaps the positions of the items at ranks `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of range.
    pub fn swap_indices(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(
            a < len && b < len,
            "swap_indices out of range: ({a}, {b}) with len {len}"
        );
        if a == b {
            return;
        }

        let hash_a = self.tables.hash_item(&self.items[a]);
        let hash_b = self.tables.hash_item(&self.items[b]);

        // If the two hashes collide, looking up `b` right after pointing `a`
        // at it would be ambiguous. Park `a` on a rank no item can have
        // first.
        let parked = usize::MAX;
        self.retarget(hash_a, a, parked);
        self.retarget(hash_b, b, a);
        self.retarget(hash_a, parked, b);

        self.items.swap(a, b);
    }

    /// Moves the item at rank `from` to rank `to`, shifting the items in
    /// between by one rank.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is out of range.
    pub fn move_index(&mut self, from: usize, to: usize) {
        let len = self.len();
        assert!(
            from < len && to < len,
            "move_index out of range: ({from}, {to}) with len {len}"
        );

        self.tables.key_to_index.remap_indexes(|ix| {
            if ix == from {
                to
            } else if from < to && ix > from && ix <= to {
                ix - 1
            } else if to < from && ix >= to && ix < from {
                ix + 1
            } else {
                ix
            }
        });
        self.items.move_index(from, to);
    }

    /// Reverses the order of items in the map.
    pub fn reverse(&mut self) {
        let len = self.len();
        self.tables.key_to_index.remap_indexes(|ix| len - 1 - ix);
        self.items.reverse();
    }

    /// Sorts the items in the map with the given comparison function.
    ///
    /// The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self.rebuild_tables();
    }

    /// Sorts the items in the map with a key extraction function.
    ///
    /// The sort is stable.
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Sorts the items in the map by their keys, in lexicographic order.
    pub fn sort_keys(&mut self) {
        self.sort_by(|a, b| a.key().as_ref().cmp(b.key().as_ref()));
    }

    /// Retains only the items for which `f` returns true, preserving their
    /// relative order.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(f);
        self.rebuild_tables();
    }

    /// Removes all items from the map.
    pub fn clear(&mut self) {
        self.items.clear();
        self.tables.key_to_index.clear();
    }

    /// Reserves capacity for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
        let items = &self.items;
        self.tables.key_to_index.reserve(additional, |ix| items[ix].key());
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        self.tables.key_to_index.find_index(key, |ix| self.items[ix].key())
    }

    fn retarget(&mut self, hash: u64, old: usize, new: usize) {
        if !self.tables.key_to_index.retarget_index(hash, old, new) {
            panic!("key_to_index has no entry for index {old}");
        }
    }

    fn rebuild_tables(&mut self) {
        let items = &self.items;
        self.tables.key_to_index.rebuild(items.len(), |ix| items[ix].key());
    }

    fn insert_unique_impl(
        &mut self,
        index: usize,
        value: T,
    ) -> Result<(), DuplicateItem<T, &T>> {
        let len = self.len();
        let index = index.min(len);

        // Check for duplicates *before* touching anything, so a failed
        // insert leaves the map as it was.
        let existing = self.find_index(value.key().as_ref());
        if let Some(existing) = existing {
            return Err(DuplicateItem::__internal_new(
                value,
                vec![&self.items[existing]],
            ));
        }

        let hash = self.tables.hash_item(&value);
        if index < len {
            self.tables
                .key_to_index
                .remap_indexes(|ix| if ix >= index { ix + 1 } else { ix });
        }
        self.items.insert(index, value);

        let items = &self.items;
        self.tables.key_to_index.insert_unique(hash, index, |ix| {
            items[ix].key()
        });

        Ok(())
    }

    // `index` must be in range.
    fn remove_at(&mut self, index: usize) -> T {
        let hash = self.tables.hash_item(&self.items[index]);
        if !self.tables.key_to_index.remove_index(hash, index) {
            panic!("key_to_index has no entry for index {index}");
        }

        let value = self
            .items
            .shift_remove(index)
            .expect("index is known to be valid");
        if index < self.items.len() {
            self.tables
                .key_to_index
                .remap_indexes(|ix| if ix > index { ix - 1 } else { ix });
        }

        value
    }
}

impl<T, S: Clone + BuildHasher, A: Allocator> fmt::Debug for KeyOrderMap<T, S, A>
where
    T: KeyOrderItem + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items.iter().map(|item| (KeyAsDebug(item.key()), item)))
            .finish()
    }
}

/// Two maps are equal if they hold equal items in the same order.
impl<T: KeyOrderItem + PartialEq, S: Clone + BuildHasher, A: Allocator>
    PartialEq for KeyOrderMap<T, S, A>
{
    fn eq(&self, other: &Self) -> bool {
        self.items.as_slice() == other.items.as_slice()
    }
}

impl<T: KeyOrderItem + Eq, S: Clone + BuildHasher, A: Allocator> Eq
    for KeyOrderMap<T, S, A>
{
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> Index<usize>
    for KeyOrderMap<T, S, A>
{
    type Output = T;

    /// Returns the item at rank `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

/// The `Extend` implementation overwrites duplicates, like
/// [`KeyOrderMap::insert_overwrite`].
impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> Extend<T>
    for KeyOrderMap<T, S, A>
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.insert_overwrite(item);
        }
    }
}

impl<'a, T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> IntoIterator
    for &'a KeyOrderMap<T, S, A>
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> IntoIterator
    for &'a mut KeyOrderMap<T, S, A>
{
    type Item = RefMut<'a, T, S>;
    type IntoIter = IterMut<'a, T, S, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> IntoIterator
    for KeyOrderMap<T, S, A>
{
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

/// The `FromIterator` implementation overwrites duplicates, like
/// [`KeyOrderMap::insert_overwrite`].
impl<T: KeyOrderItem, S: Default + Clone + BuildHasher, A: Allocator + Default>
    FromIterator<T> for KeyOrderMap<T, S, A>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = KeyOrderMap::default();
        map.extend(iter);
        map
    }
}
