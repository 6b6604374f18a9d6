// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{KeyOrderItem, RefMut, tables::KeyOrderMapTables};
use crate::{
    DefaultHashBuilder,
    support::{
        alloc::{Allocator, Global},
        ordered_set::OrderedSet,
    },
};
use allocator_api2::vec;
use core::{fmt, hash::BuildHasher, iter::FusedIterator, slice};

/// An iterator over the elements of a [`KeyOrderMap`] by shared reference.
/// Created by [`KeyOrderMap::iter`].
///
/// Items are yielded in rank order. The iterator is cheap to clone, so a
/// traversal can be restarted from any point.
///
/// [`KeyOrderMap`]: crate::KeyOrderMap
/// [`KeyOrderMap::iter`]: crate::KeyOrderMap::iter
#[derive(Debug)]
pub struct Iter<'a, T: KeyOrderItem> {
    inner: slice::Iter<'a, T>,
}

// Not derived: cloning the iterator must not require `T: Clone`.
impl<T: KeyOrderItem> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, T: KeyOrderItem> Iter<'a, T> {
    pub(crate) fn new<A: Allocator>(items: &'a OrderedSet<T, A>) -> Self {
        Self { inner: items.iter() }
    }
}

impl<'a, T: KeyOrderItem> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: KeyOrderItem> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T: KeyOrderItem> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: KeyOrderItem> FusedIterator for Iter<'_, T> {}

/// An iterator over the elements of a [`KeyOrderMap`] by mutable reference.
/// Created by [`KeyOrderMap::iter_mut`].
///
/// This iterator returns [`RefMut`] instances.
///
/// Items are yielded in rank order.
///
/// [`KeyOrderMap`]: crate::KeyOrderMap
/// [`KeyOrderMap::iter_mut`]: crate::KeyOrderMap::iter_mut
pub struct IterMut<
    'a,
    T: KeyOrderItem,
    S = DefaultHashBuilder,
    A: Allocator = Global,
> {
    tables: &'a KeyOrderMapTables<S, A>,
    inner: slice::IterMut<'a, T>,
}

impl<'a, T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator>
    IterMut<'a, T, S, A>
{
    pub(super) fn new(
        tables: &'a KeyOrderMapTables<S, A>,
        items: &'a mut OrderedSet<T, A>,
    ) -> Self {
        Self { tables, inner: items.iter_mut() }
    }
}

impl<T: KeyOrderItem, S, A: Allocator> fmt::Debug for IterMut<'_, T, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.inner.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> Iterator
    for IterMut<'a, T, S, A>
{
    type Item = RefMut<'a, T, S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        let hash = self.tables.make_hash(next);
        Some(RefMut::new(hash, next))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> DoubleEndedIterator
    for IterMut<'_, T, S, A>
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let next = self.inner.next_back()?;
        let hash = self.tables.make_hash(next);
        Some(RefMut::new(hash, next))
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> ExactSizeIterator
    for IterMut<'_, T, S, A>
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> FusedIterator
    for IterMut<'_, T, S, A>
{
}

/// An iterator over the elements of a [`KeyOrderMap`] by ownership. Created
/// by [`KeyOrderMap::into_iter`].
///
/// Items are yielded in rank order.
///
/// [`KeyOrderMap`]: crate::KeyOrderMap
/// [`KeyOrderMap::into_iter`]: crate::KeyOrderMap::into_iter
pub struct IntoIter<T: KeyOrderItem, A: Allocator = Global> {
    inner: vec::IntoIter<T, A>,
}

impl<T: KeyOrderItem, A: Allocator> IntoIter<T, A> {
    pub(crate) fn new(items: OrderedSet<T, A>) -> Self {
        Self { inner: items.into_items() }
    }
}

impl<T: KeyOrderItem, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.inner.len())
            .finish_non_exhaustive()
    }
}

impl<T: KeyOrderItem, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: KeyOrderItem, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T: KeyOrderItem, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: KeyOrderItem, A: Allocator> FusedIterator for IntoIter<T, A> {}

/// An iterator over the keys of a [`KeyOrderMap`], in rank order. Created by
/// [`KeyOrderMap::keys`].
///
/// This is a read-only view: the map can't be changed while it is alive.
///
/// [`KeyOrderMap`]: crate::KeyOrderMap
/// [`KeyOrderMap::keys`]: crate::KeyOrderMap::keys
#[derive(Debug)]
pub struct Keys<'a, T: KeyOrderItem> {
    inner: Iter<'a, T>,
}

impl<T: KeyOrderItem> Clone for Keys<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, T: KeyOrderItem> Keys<'a, T> {
    pub(crate) fn new(iter: Iter<'a, T>) -> Self {
        Self { inner: iter }
    }
}

impl<'a, T: KeyOrderItem> Iterator for Keys<'a, T> {
    type Item = T::Key<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.key())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: KeyOrderItem> DoubleEndedIterator for Keys<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|item| item.key())
    }
}

impl<T: KeyOrderItem> ExactSizeIterator for Keys<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: KeyOrderItem> FusedIterator for Keys<'_, T> {}
