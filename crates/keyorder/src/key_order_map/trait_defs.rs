// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// An element stored in a [`KeyOrderMap`].
///
/// Items report their own key, which must be unique within the map. The key
/// is any type that exposes a `str`: either borrowed from the item, or
/// computed on demand.
///
/// The key must be deterministic, and must not change while the item is
/// stored in the map. Mutable access handed out by the map goes through
/// [`RefMut`], which panics if it detects a changed key.
///
/// # Examples
///
/// A key borrowed from the item:
///
/// ```
/// use keyorder::KeyOrderItem;
///
/// struct Section {
///     name: String,
///     entries: Vec<(String, String)>,
/// }
///
/// impl KeyOrderItem for Section {
///     type Key<'a> = &'a str;
///
///     fn key(&self) -> Self::Key<'_> {
///         &self.name
///     }
/// }
/// ```
///
/// A key computed from the item:
///
/// ```
/// use keyorder::KeyOrderItem;
///
/// struct Port(u16);
///
/// impl KeyOrderItem for Port {
///     type Key<'a> = String;
///
///     fn key(&self) -> Self::Key<'_> {
///         self.0.to_string()
///     }
/// }
/// ```
///
/// [`KeyOrderMap`]: crate::KeyOrderMap
/// [`RefMut`]: crate::key_order_map::RefMut
pub trait KeyOrderItem {
    /// The key type.
    type Key<'a>: AsRef<str>
    where
        Self: 'a;

    /// Retrieves the key.
    fn key(&self) -> Self::Key<'_>;
}
