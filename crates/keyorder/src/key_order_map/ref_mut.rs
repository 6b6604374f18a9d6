// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::KeyOrderItem;
use crate::{DefaultHashBuilder, support::map_hash::MapHash};
use core::{
    fmt,
    hash::BuildHasher,
    ops::{Deref, DerefMut},
};

/// A mutable reference to a [`KeyOrderMap`] item.
///
/// This is a wrapper around a `&mut T` that panics when dropped, if the
/// borrowed value's key has changed since the wrapper was created.
///
/// # Change detection
///
/// It is illegal to change the key of a borrowed `&mut T`. `RefMut` attempts
/// to enforce this invariant.
///
/// `RefMut` stores the hash of the key at creation time, and recomputes it
/// when it is dropped or when [`Self::into_ref`] is called. If the key
/// changes, there's a small chance that its hash stays the same[^collision].
/// In that case, as long as the new key is not the same as another existing
/// one, lookups for the *old* key will fail but the map will not otherwise
/// misbehave. (Don't do this!)
///
/// Change detection will not function if [`mem::forget`] is called on the
/// `RefMut`. If a key is changed and `mem::forget` is then called, the
/// [`KeyOrderMap`] will stop functioning correctly. This will not introduce
/// memory safety issues, however.
///
/// [`mem::forget`]: core::mem::forget
///
/// [^collision]: The output of `Hash` is a [`u64`], so the probability of an
/// individual hash colliding by chance is 1/2⁶⁴.
///
/// [`KeyOrderMap`]: crate::KeyOrderMap
pub struct RefMut<'a, T: KeyOrderItem, S: Clone + BuildHasher = DefaultHashBuilder>
{
    inner: Option<RefMutInner<'a, T, S>>,
}

impl<'a, T: KeyOrderItem, S: Clone + BuildHasher> RefMut<'a, T, S> {
    pub(super) fn new(hash: MapHash<S>, borrowed: &'a mut T) -> Self {
        Self { inner: Some(RefMutInner { hash, borrowed }) }
    }

    /// Converts this `RefMut` into a `&'a T`.
    ///
    /// # Panics
    ///
    /// Panics if the key changed while the item was mutably borrowed.
    pub fn into_ref(mut self) -> &'a T {
        let inner = self.inner.take().expect("inner is only taken once");
        inner.into_ref()
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher> Drop for RefMut<'_, T, S> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.into_ref();
        }
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher> Deref for RefMut<'_, T, S> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref().expect("inner is only taken on drop").borrowed
    }
}

impl<T: KeyOrderItem, S: Clone + BuildHasher> DerefMut for RefMut<'_, T, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut().expect("inner is only taken on drop").borrowed
    }
}

impl<T: KeyOrderItem + fmt::Debug, S: Clone + BuildHasher> fmt::Debug
    for RefMut<'_, T, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Some(ref inner) => inner.fmt(f),
            None => {
                f.debug_struct("RefMut").field("borrowed", &"missing").finish()
            }
        }
    }
}

struct RefMutInner<'a, T: KeyOrderItem, S> {
    hash: MapHash<S>,
    borrowed: &'a mut T,
}

impl<'a, T: KeyOrderItem, S: BuildHasher> RefMutInner<'a, T, S> {
    fn into_ref(self) -> &'a T {
        if !self.hash.is_same_hash(self.borrowed.key().as_ref()) {
            panic!("key changed during RefMut borrow");
        }

        self.borrowed
    }
}

impl<T: KeyOrderItem + fmt::Debug, S> fmt::Debug for RefMutInner<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.borrowed.fmt(f)
    }
}
