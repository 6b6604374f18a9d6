// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An example demonstrating `KeyOrderMap` storage in a bump arena.

use bumpalo::Bump;
use keyorder::{KeyOrderItem, KeyOrderMap};

#[derive(Debug)]
struct Column<'a> {
    name: &'a str,
    width: usize,
}

impl KeyOrderItem for Column<'_> {
    type Key<'k>
        = &'k str
    where
        Self: 'k;

    fn key(&self) -> Self::Key<'_> {
        self.name
    }
}

fn main() {
    let bump = Bump::new();

    // Both the item vector and the key index are allocated in `bump`.
    let mut columns = KeyOrderMap::new_in(&bump);
    for (name, width) in [("id", 6), ("name", 20), ("email", 30)] {
        columns.insert_unique(Column { name, width }).unwrap();
    }
    columns.swap_indices(1, 2);

    for (ix, column) in columns.iter().enumerate() {
        println!("{ix}: {} ({} chars)", column.name, column.width);
    }
    println!("bump allocated {} bytes", bump.allocated_bytes());
}
