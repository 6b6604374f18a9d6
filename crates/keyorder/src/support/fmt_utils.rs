// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt;

/// Debug impl for an item key, printed as the string it exposes.
pub(crate) struct KeyAsDebug<K>(pub(crate) K);

impl<K: AsRef<str>> fmt::Debug for KeyAsDebug<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0.as_ref(), f)
    }
}
