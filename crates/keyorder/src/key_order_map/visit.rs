// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{KeyOrderItem, KeyOrderMap};
use crate::support::alloc::Allocator;
use alloc::string::String;
use core::{fmt, hash::BuildHasher, ops::ControlFlow};

/// Where a [`KeyOrderMap::visit`] traversal stopped early.
///
/// This is not a failure of the map: it records that the visitor asked to
/// stop, at which item, and with what value. It implements
/// [`Error`](core::error::Error) so callers that do treat an early stop as a
/// failure can propagate it with `?`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationStopped<B = ()> {
    index: usize,
    key: String,
    value: B,
}

impl<B> IterationStopped<B> {
    /// Returns the rank of the item the visitor stopped at.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the key of the item the visitor stopped at.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value the visitor broke with.
    #[inline]
    pub fn value(&self) -> &B {
        &self.value
    }

    /// Converts self into the value the visitor broke with.
    #[inline]
    pub fn into_value(self) -> B {
        self.value
    }
}

impl<B> fmt::Display for IterationStopped<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration stopped at index {} (key {:?})",
            self.index, self.key
        )
    }
}

impl<B: fmt::Debug> core::error::Error for IterationStopped<B> {}

impl<T: KeyOrderItem, S: Clone + BuildHasher, A: Allocator> KeyOrderMap<T, S, A> {
    /// Calls `f` with the rank and item of every entry, in rank order,
    /// until `f` breaks.
    ///
    /// Returns [`ControlFlow::Continue`] if every item was visited. If `f`
    /// returns [`ControlFlow::Break`], no further items are visited and the
    /// break value is returned along with the rank and key of the item the
    /// traversal stopped at.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use keyorder::{KeyOrderItem, KeyOrderMap};
    /// use std::ops::ControlFlow;
    ///
    /// #[derive(Debug)]
    /// struct Column {
    ///     name: &'static str,
    ///     hidden: bool,
    /// }
    ///
    /// impl KeyOrderItem for Column {
    ///     type Key<'a> = &'a str;
    ///
    ///     fn key(&self) -> Self::Key<'_> {
    ///         self.name
    ///     }
    /// }
    ///
    /// let mut columns = KeyOrderMap::new();
    /// columns.insert_unique(Column { name: "id", hidden: false }).unwrap();
    /// columns.insert_unique(Column { name: "secret", hidden: true }).unwrap();
    /// columns.insert_unique(Column { name: "email", hidden: false }).unwrap();
    ///
    /// let mut shown = Vec::new();
    /// let flow = columns.visit(|_, column| {
    ///     if column.hidden {
    ///         return ControlFlow::Break("hidden column");
    ///     }
    ///     shown.push(column.name);
    ///     ControlFlow::Continue(())
    /// });
    ///
    /// let ControlFlow::Break(stopped) = flow else {
    ///     panic!("expected the visitor to stop");
    /// };
    /// assert_eq!(stopped.index(), 1);
    /// assert_eq!(stopped.key(), "secret");
    /// assert_eq!(*stopped.value(), "hidden column");
    /// assert_eq!(shown, ["id"]);
    /// # }
    /// ```
    pub fn visit<B, F>(&self, mut f: F) -> ControlFlow<IterationStopped<B>>
    where
        F: FnMut(usize, &T) -> ControlFlow<B>,
    {
        for (index, item) in self.iter().enumerate() {
            if let ControlFlow::Break(value) = f(index, item) {
                return ControlFlow::Break(IterationStopped {
                    index,
                    key: String::from(item.key().as_ref()),
                    value,
                });
            }
        }

        ControlFlow::Continue(())
    }
}
