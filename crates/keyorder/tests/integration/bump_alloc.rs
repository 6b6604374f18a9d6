// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bumpalo::Bump;
use keyorder::KeyOrderMap;
use keyorder_test_utils::test_item::{HashBuilder, TestItem};

#[test]
fn map_in_bump_arena() {
    let bump = Bump::new();
    let mut map = KeyOrderMap::<TestItem, HashBuilder, &Bump>::with_hasher_in(
        HashBuilder::default(),
        &bump,
    );

    for key in ["a", "b", "c"] {
        map.insert_unique(TestItem::new(key, "")).unwrap();
    }
    map.insert_unique_at(1, TestItem::new("x", "")).unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "x", "b", "c"]);
    assert!(std::ptr::eq(*map.allocator(), &bump));

    map.shift_remove("b").unwrap();
    map.swap_indices(0, 2);
    assert_eq!(map.keys().collect::<Vec<_>>(), ["c", "x", "a"]);
    map.validate().expect("map should be valid");

    let cloned = map.clone();
    assert_eq!(cloned, map);

    let items: Vec<_> = map.into_iter().map(|item| item.key).collect();
    assert_eq!(items, ["c", "x", "a"]);
}
