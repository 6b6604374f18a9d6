// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An ordered map where each item reports its own string key.
//!
//! For more information, see [`KeyOrderMap`].

pub(crate) mod imp;
mod iter;
mod ref_mut;
mod tables;
pub(crate) mod trait_defs;
mod visit;

pub use imp::KeyOrderMap;
pub use iter::{IntoIter, Iter, IterMut, Keys};
pub use ref_mut::RefMut;
pub use trait_defs::KeyOrderItem;
pub use visit::IterationStopped;
