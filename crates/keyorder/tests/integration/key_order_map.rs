// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use keyorder::{KeyOrderItem, KeyOrderMap};
use keyorder_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    test_item::{
        HashBuilder, NumItem, TestItem, TestMap, make_map,
        test_item_permutation_strategy,
    },
    unwind::catch_panic,
};
use std::ops::ControlFlow;
use test_strategy::proptest;

#[derive(Clone, Debug)]
struct SimpleItem {
    name: &'static str,
    size: u32,
}

impl KeyOrderItem for SimpleItem {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        self.name
    }
}

fn keys(map: &TestMap) -> Vec<&str> {
    map.keys().collect()
}

#[test]
fn debug_impls() {
    let mut map = KeyOrderMap::<SimpleItem, HashBuilder>::with_hasher(
        HashBuilder::default(),
    );
    map.insert_unique(SimpleItem { name: "b", size: 1 }).unwrap();
    map.insert_unique(SimpleItem { name: "a", size: 20 }).unwrap();

    // Debug output follows rank order, not key order.
    assert_eq!(
        format!("{map:?}"),
        r#"{"b": SimpleItem { name: "b", size: 1 }, "a": SimpleItem { name: "a", size: 20 }}"#,
    );
    assert_eq!(
        format!("{:?}", map.get_mut("a").unwrap()),
        r#"SimpleItem { name: "a", size: 20 }"#,
    );
}

#[test]
fn with_capacity() {
    let map = TestMap::with_capacity_and_hasher(1024, HashBuilder::default());
    assert!(map.capacity() >= 1024);
    assert!(map.is_empty());
}

#[test]
fn sequential_scenario() {
    let mut map = KeyOrderMap::<NumItem, HashBuilder>::with_hasher(
        HashBuilder::default(),
    );
    for i in 0..100 {
        map.insert_unique(NumItem::new(i, u64::from(i) * 10)).unwrap();
    }
    assert_eq!(map.len(), 100);
    map.validate().expect("map should be valid");

    // Every item is reachable both by key and by rank.
    for i in 0..100u32 {
        let by_key = map.get(&i.to_string()).unwrap();
        assert_eq!(by_key.id, i);
        assert_eq!(map.get_index(i as usize), Some(by_key));
    }

    // Insert in the middle: everything from rank 50 onwards shifts up.
    map.insert_unique_at(50, NumItem::new(500, 0)).unwrap();
    assert_eq!(map.len(), 101);
    assert_eq!(map.get_index(50).unwrap().id, 500);
    assert_eq!(map.get_index(51).unwrap().id, 50);
    assert_eq!(map.get_index_of("99"), Some(100));
    map.validate().expect("map should be valid");

    // Draining from the front yields every item in order.
    let mut drained = Vec::new();
    while let Some(item) = map.shift_remove_index(0) {
        drained.push(item.id);
        if drained.len() % 10 == 0 {
            map.validate().expect("map should be valid");
        }
    }
    assert_eq!(drained.len(), 101);
    let mut expected: Vec<u32> = (0..50).collect();
    expected.push(500);
    expected.extend(50..100);
    assert_eq!(drained, expected);
    assert!(map.is_empty());
    assert_eq!(map.shift_remove_index(0), None);
}

#[test]
fn test_insert_unique() {
    let mut map = make_map();

    let v1 = TestItem::new("a", "v");
    map.insert_unique(v1.clone()).unwrap();

    // A duplicate key is rejected, whatever the value.
    let v2 = TestItem::new("a", "other");
    let error = map.insert_unique(v2.clone()).unwrap_err();
    assert_eq!(error.new_item(), &v2);
    assert_eq!(error.duplicates(), vec![&v1]);
    assert_eq!(
        error.to_string(),
        r#"new item: TestItem { key: "a", value: "other" } conflicts with existing: [TestItem { key: "a", value: "v" }]"#,
    );

    // Same for positional inserts, and the map is unchanged.
    let error = map.insert_unique_at(0, v2.clone()).unwrap_err();
    assert_eq!(error.into_owned().into_parts(), (v2, vec![v1.clone()]));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some(&v1));
    map.validate().expect("map should be valid");
}

#[test]
fn test_insert_unique_at() {
    let mut map = make_map();
    map.insert_unique_at(0, TestItem::new("b", "")).unwrap();
    map.insert_unique_at(0, TestItem::new("a", "")).unwrap();
    // Past-the-end positions append.
    map.insert_unique_at(100, TestItem::new("d", "")).unwrap();
    map.insert_unique_at(2, TestItem::new("c", "")).unwrap();
    map.insert_unique_at(4, TestItem::new("e", "")).unwrap();

    assert_eq!(keys(&map), ["a", "b", "c", "d", "e"]);
    for (ix, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        assert_eq!(map.get_index_of(key), Some(ix));
    }
    map.validate().expect("map should be valid");
}

#[test]
fn test_update() {
    let mut map = make_map();
    map.insert_unique(TestItem::new("a", "1")).unwrap();
    map.insert_unique(TestItem::new("b", "2")).unwrap();
    map.insert_unique(TestItem::new("c", "3")).unwrap();

    let old = map.update(TestItem::new("b", "20")).unwrap();
    assert_eq!(old, TestItem::new("b", "2"));
    assert_eq!(map.get("b").unwrap().value, "20");
    // The item keeps its rank.
    assert_eq!(keys(&map), ["a", "b", "c"]);

    let error = map.update(TestItem::new("z", "26")).unwrap_err();
    assert_eq!(error.item(), &TestItem::new("z", "26"));
    assert_eq!(error.into_item().value, "26");
    assert_eq!(map.len(), 3);
    map.validate().expect("map should be valid");
}

#[test]
fn test_insert_overwrite() {
    let mut map = make_map();
    assert_eq!(map.insert_overwrite(TestItem::new("a", "1")), None);
    assert_eq!(map.insert_overwrite(TestItem::new("b", "2")), None);
    assert_eq!(
        map.insert_overwrite(TestItem::new("a", "10")),
        Some(TestItem::new("a", "1")),
    );
    assert_eq!(keys(&map), ["a", "b"]);
    assert_eq!(map.get("a").unwrap().value, "10");
    map.validate().expect("map should be valid");
}

#[test]
fn test_extend() {
    let mut map = make_map();
    map.extend(vec![
        TestItem::new("a", "1"),
        TestItem::new("b", "2"),
        TestItem::new("a", "overwrote a"),
        TestItem::new("c", "3"),
    ]);
    assert_eq!(keys(&map), ["a", "b", "c"]);
    assert_eq!(map.get("a").unwrap().value, "overwrote a");

    let collected: TestMap = map.clone().into_iter().rev().collect();
    assert_eq!(keys(&collected), ["c", "b", "a"]);
}

#[test]
fn test_shift_remove() {
    let mut map = make_map();
    for key in ["a", "b", "c", "d"] {
        map.insert_unique(TestItem::new(key, "")).unwrap();
    }

    assert_eq!(map.shift_remove("b").unwrap().key, "b");
    assert_eq!(keys(&map), ["a", "c", "d"]);
    assert_eq!(map.get_index_of("d"), Some(2));

    let error = map.shift_remove("b").unwrap_err();
    assert_eq!(error.key(), "b");
    assert_eq!(error.to_string(), r#"key "b" is not registered"#);

    assert_eq!(map.shift_remove_index(3), None);
    assert_eq!(map.shift_remove_index(2).unwrap().key, "d");
    assert_eq!(map.pop().unwrap().key, "c");
    assert_eq!(keys(&map), ["a"]);
    map.validate().expect("map should be valid");
}

#[test]
fn test_positional_access() {
    let mut map = make_map();
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.get_index(0), None);

    for key in ["a", "b", "c"] {
        map.insert_unique(TestItem::new(key, "")).unwrap();
    }
    assert_eq!(map.first().unwrap().key, "a");
    assert_eq!(map.last().unwrap().key, "c");
    assert_eq!(map[1].key, "b");
    assert_eq!(
        map.as_slice().iter().map(|e| e.key.as_str()).collect::<Vec<_>>(),
        ["a", "b", "c"],
    );
    assert_eq!(map.get_index(3), None);
    assert!(map.contains_key("c"));
    assert!(!map.contains_key("d"));

    map.get_index_mut(1).unwrap().value = "changed".to_owned();
    assert_eq!(map.get("b").unwrap().value, "changed");
    assert!(map.get_index_mut(3).is_none());
}

#[test]
#[should_panic(expected = "OrderedSet index out of range")]
fn index_out_of_range_panics() {
    let map = make_map();
    let _ = &map[0];
}

#[test]
fn test_swap_indices() {
    let mut map = make_map();
    for key in ["a", "b", "c", "d"] {
        map.insert_unique(TestItem::new(key, "")).unwrap();
    }

    map.swap_indices(0, 3);
    assert_eq!(keys(&map), ["d", "b", "c", "a"]);
    assert_eq!(map.get_index_of("a"), Some(3));
    assert_eq!(map.get_index_of("d"), Some(0));
    map.validate().expect("map should be valid");

    // Swapping an item with itself is a no-op.
    map.swap_indices(2, 2);
    // Swapping twice restores the original order.
    map.swap_indices(3, 0);
    assert_eq!(keys(&map), ["a", "b", "c", "d"]);
    map.validate().expect("map should be valid");
}

#[test]
#[should_panic(expected = "swap_indices out of range")]
fn swap_indices_out_of_range_panics() {
    let mut map = make_map();
    map.insert_unique(TestItem::new("a", "")).unwrap();
    map.swap_indices(0, 1);
}

#[test]
fn test_move_reverse_sort() {
    let mut map = make_map();
    for key in ["c", "a", "d", "b"] {
        map.insert_unique(TestItem::new(key, "")).unwrap();
    }

    map.move_index(0, 3);
    assert_eq!(keys(&map), ["a", "d", "b", "c"]);
    map.move_index(2, 0);
    assert_eq!(keys(&map), ["b", "a", "d", "c"]);
    map.validate().expect("map should be valid");

    map.reverse();
    assert_eq!(keys(&map), ["c", "d", "a", "b"]);
    map.validate().expect("map should be valid");

    map.sort_keys();
    assert_eq!(keys(&map), ["a", "b", "c", "d"]);
    assert_eq!(map.get_index_of("c"), Some(2));
    map.validate().expect("map should be valid");

    map.sort_by_key(|item| std::cmp::Reverse(item.key.clone()));
    assert_eq!(keys(&map), ["d", "c", "b", "a"]);
    map.validate().expect("map should be valid");
}

#[test]
fn test_retain_and_clear() {
    let mut map = make_map();
    for (key, value) in [("a", "keep"), ("b", "drop"), ("c", "keep")] {
        map.insert_unique(TestItem::new(key, value)).unwrap();
    }

    map.retain(|item| item.value == "keep");
    assert_eq!(keys(&map), ["a", "c"]);
    assert_eq!(map.get_index_of("c"), Some(1));
    assert!(map.get("b").is_none());
    map.validate().expect("map should be valid");

    map.clear();
    assert!(map.is_empty());
    assert!(map.get("a").is_none());
    map.insert_unique(TestItem::new("a", "")).unwrap();
    map.validate().expect("map should be valid");
}

#[test]
fn test_visit() {
    let mut map = make_map();
    for key in ["a", "b", "c", "d"] {
        map.insert_unique(TestItem::new(key, "")).unwrap();
    }

    let mut seen = Vec::new();
    let flow = map.visit(|ix, item| {
        seen.push((ix, item.key.clone()));
        ControlFlow::<()>::Continue(())
    });
    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[3], (3, "d".to_owned()));

    let mut visited = 0;
    let flow = map.visit(|_, item| {
        visited += 1;
        if item.key == "b" {
            ControlFlow::Break(42)
        } else {
            ControlFlow::Continue(())
        }
    });
    let ControlFlow::Break(stopped) = flow else {
        panic!("expected the visitor to stop");
    };
    // Nothing after the stopping item is visited.
    assert_eq!(visited, 2);
    assert_eq!(stopped.index(), 1);
    assert_eq!(stopped.key(), "b");
    assert_eq!(stopped.into_value(), 42);

    let flow = map.visit(|_, _| ControlFlow::Break(()));
    let ControlFlow::Break(stopped) = flow else {
        panic!("expected the visitor to stop");
    };
    assert_eq!(
        stopped.to_string(),
        r#"iteration stopped at index 0 (key "a")"#,
    );
}

#[test]
fn test_computed_keys() {
    let mut map = KeyOrderMap::<NumItem, HashBuilder>::with_hasher(
        HashBuilder::default(),
    );
    map.insert_unique(NumItem::new(8080, 1)).unwrap();
    map.insert_unique(NumItem::new(443, 2)).unwrap();
    assert!(map.insert_unique(NumItem::new(443, 3)).is_err());

    assert_eq!(map.get("443").unwrap().weight, 2);
    assert_eq!(map.keys().collect::<Vec<_>>(), ["8080", "443"]);

    map.get_mut("8080").unwrap().weight = 10;
    assert_eq!(map[0].weight, 10);
}

#[test]
#[should_panic(expected = "key changed during RefMut borrow")]
fn get_mut_panics_if_key_changes() {
    let mut map = make_map();
    map.insert_unique(TestItem::new("a", "x")).unwrap();
    map.get_mut("a").unwrap().key = "b".to_owned();
}

#[test]
fn iter_mut_detects_key_change() {
    let mut map = make_map();
    map.insert_unique(TestItem::new("a", "x")).unwrap();
    map.insert_unique(TestItem::new("b", "y")).unwrap();

    // Changing values is fine.
    for mut item in &mut map {
        item.value.push('!');
    }
    assert_eq!(map.get("b").unwrap().value, "y!");

    let result = catch_panic(|| {
        let mut item = map.iter_mut().next().unwrap();
        item.key = "c".to_owned();
    });
    assert!(result.is_none(), "changing a key should panic");
}

#[test]
fn test_permutation_eq_examples() {
    let mut map1 = make_map();
    let mut map2 = make_map();

    // Two empty maps are equal.
    assert_eq_props(&map1, &map2);

    map1.insert_unique(TestItem::new("a", "v")).unwrap();
    assert_ne_props(&map1, &map2);

    map2.insert_unique(TestItem::new("a", "v")).unwrap();
    assert_eq_props(&map1, &map2);

    map1.insert_unique(TestItem::new("b", "v")).unwrap();
    map2.insert_unique_at(0, TestItem::new("b", "v")).unwrap();
    // Same items, different order.
    assert_ne_props(&map1, &map2);

    map2.swap_indices(0, 1);
    assert_eq_props(&map1, &map2);

    // Same keys, different value.
    map2.update(TestItem::new("b", "w")).unwrap();
    assert_ne_props(&map1, &map2);
}

#[proptest(cases = 64)]
fn proptest_permutation_eq(
    #[strategy(test_item_permutation_strategy(0..64))] items: (
        Vec<TestItem>,
        Vec<TestItem>,
    ),
) {
    let (items1, items2) = items;
    let mut map1 = make_map();
    let mut map2 = make_map();
    for item in items1.clone() {
        map1.insert_unique(item).unwrap();
    }
    for item in items2.clone() {
        map2.insert_unique(item).unwrap();
    }

    if items1 == items2 {
        assert_eq_props(&map1, &map2);
    } else {
        assert_ne_props(&map1, &map2);
    }

    // Sorting makes insertion order irrelevant.
    map1.sort_keys();
    map2.sort_keys();
    assert_eq_props(map1, map2);
}
