// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An ordered map keyed by strings that the stored items report themselves.
//!
//! # Motivation
//!
//! Plenty of programs need a collection that is looked up by name *and* has
//! a meaningful, user-controlled order: sections of a configuration file,
//! fields of a form, columns of a table. The usual answer is a pair of
//! structures kept side by side:
//!
//! ```
//! use std::collections::HashMap;
//!
//! struct Field {
//!     name: String,
//!     label: String,
//! }
//!
//! let mut order: Vec<String> = Vec::new();
//! let mut by_name: HashMap<String, Field> = HashMap::new();
//!
//! order.push("email".to_string());
//! by_name.insert(
//!     "email".to_string(),
//!     Field { name: "email".to_string(), label: "Email".to_string() },
//! );
//! ```
//!
//! Nothing keeps `order` and `by_name` consistent with each other, and
//! nothing keeps the map key consistent with the `name` stored inside the
//! value. Removing an element from the middle, inserting at a position, or
//! swapping two elements each need careful bookkeeping in both places.
//!
//! [`KeyOrderMap`] does that bookkeeping. Items report their own key through
//! the [`KeyOrderItem`] trait, and the map exposes both key-based operations
//! (`get`, `update`, `shift_remove`) and positional ones (`get_index`,
//! `insert_unique_at`, `shift_remove_index`, `swap_indices`).
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "default-hasher")] {
//! use keyorder::{KeyOrderItem, KeyOrderMap};
//!
//! #[derive(Debug, PartialEq, Eq)]
//! struct Field {
//!     name: String,
//!     label: String,
//! }
//!
//! impl KeyOrderItem for Field {
//!     type Key<'a> = &'a str;
//!
//!     fn key(&self) -> Self::Key<'_> {
//!         &self.name
//!     }
//! }
//!
//! let field = |name: &str, label: &str| Field {
//!     name: name.to_string(),
//!     label: label.to_string(),
//! };
//!
//! let mut form = KeyOrderMap::new();
//! form.insert_unique(field("email", "Email")).unwrap();
//! form.insert_unique(field("password", "Password")).unwrap();
//! form.insert_unique_at(0, field("name", "Full name")).unwrap();
//!
//! // Keys are unique.
//! assert!(form.insert_unique(field("email", "Other")).is_err());
//!
//! // Lookups by key and by position agree.
//! assert_eq!(form.get("name").unwrap().label, "Full name");
//! assert_eq!(form.get_index(1).unwrap().name, "email");
//!
//! // Iteration follows the explicit order.
//! let keys: Vec<_> = form.keys().collect();
//! assert_eq!(keys, ["name", "email", "password"]);
//! # }
//! ```
//!
//! # Features
//!
//! - `default-hasher` (enabled by default): use [`foldhash`] as the default
//!   hasher. Without it, a hasher must be passed in through
//!   [`KeyOrderMap::with_hasher`] and friends.
//!
//! Storage is generic over an [`allocator_api2`] allocator, so maps can be
//! placed in arenas such as [`bumpalo`](https://docs.rs/bumpalo).
//!
//! [`foldhash`]: https://docs.rs/foldhash
//! [`allocator_api2`]: https://docs.rs/allocator-api2

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod errors;
#[doc(hidden)]
pub mod internal;
pub mod key_order_map;
mod support;

pub use key_order_map::{KeyOrderItem, KeyOrderMap};
pub use support::{alloc::Global, hash_builder::DefaultHashBuilder};
