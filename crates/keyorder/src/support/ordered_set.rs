// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::alloc::Allocator;
use allocator_api2::vec::{IntoIter, Vec};
use core::{
    cmp::Ordering,
    fmt, mem,
    ops::{Index, IndexMut},
    slice,
};

/// Items stored densely in rank order.
///
/// The rank of an item is its position in the vector.
pub(crate) struct OrderedSet<T, A: Allocator> {
    items: Vec<T, A>,
}

impl<T: Clone, A: Clone + Allocator> Clone for OrderedSet<T, A> {
    fn clone(&self) -> Self {
        Self { items: self.items.clone() }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for OrderedSet<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T, A: Allocator> OrderedSet<T, A> {
    pub(crate) fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self { items: Vec::with_capacity_in(capacity, alloc) }
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        self.items.allocator()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub(crate) fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[inline]
    pub(crate) fn into_items(self) -> IntoIter<T, A> {
        self.items.into_iter()
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Inserts `value` at `index`, shifting later items up by one.
    ///
    /// Panics if `index > len`.
    #[inline]
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
    }

    /// Removes the item at `index`, shifting later items down by one.
    #[inline]
    pub(crate) fn shift_remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    // This method assumes that value has the same key. It also asserts that
    // `index` is valid (and panics if it isn't).
    #[inline]
    pub(crate) fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(&mut self[index], value)
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Moves the item at `from` to `to`, shifting the items in between.
    pub(crate) fn move_index(&mut self, from: usize, to: usize) {
        match from.cmp(&to) {
            Ordering::Less => self.items[from..=to].rotate_left(1),
            Ordering::Greater => self.items[to..=from].rotate_right(1),
            Ordering::Equal => {}
        }
    }

    #[inline]
    pub(crate) fn reverse(&mut self) {
        self.items.reverse();
    }

    #[inline]
    pub(crate) fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    #[inline]
    pub(crate) fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(f);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, A: Allocator> Index<usize> for OrderedSet<T, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.items.get(index).unwrap_or_else(|| {
            panic!(
                "OrderedSet index out of range: {index} (len {})",
                self.items.len()
            )
        })
    }
}

impl<T, A: Allocator> IndexMut<usize> for OrderedSet<T, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.items.len();
        self.items.get_mut(index).unwrap_or_else(|| {
            panic!("OrderedSet index out of range: {index} (len {len})")
        })
    }
}
