// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use keyorder::{KeyOrderItem, KeyOrderMap};
use proptest::{prelude::*, sample::SizeRange};
use test_strategy::Arbitrary;

#[cfg(feature = "default-hasher")]
pub type HashBuilder = keyorder::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
pub type HashBuilder = std::hash::RandomState;

/// The map type used throughout the tests.
pub type TestMap = KeyOrderMap<TestItem, HashBuilder>;

/// Creates an empty [`TestMap`].
pub fn make_map() -> TestMap {
    KeyOrderMap::with_hasher(HashBuilder::default())
}

/// An item whose key is a borrowed field.
///
/// Keys are drawn from a small alphabet so that generated operations hit
/// existing keys often.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Arbitrary)]
pub struct TestItem {
    #[strategy("[a-f]{1,2}")]
    pub key: String,
    #[strategy("[a-z0-9]{0,4}")]
    pub value: String,
}

impl TestItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

impl PartialEq<&TestItem> for TestItem {
    fn eq(&self, other: &&TestItem) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl KeyOrderItem for TestItem {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.key
    }
}

/// An item whose key is computed on demand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NumItem {
    pub id: u32,
    pub weight: u64,
}

impl NumItem {
    pub fn new(id: u32, weight: u64) -> Self {
        Self { id, weight }
    }
}

impl KeyOrderItem for NumItem {
    type Key<'a> = String;

    fn key(&self) -> Self::Key<'_> {
        self.id.to_string()
    }
}

/// Asserts that every way of iterating over `map` yields `items`, in order.
pub fn assert_iter_eq(mut map: TestMap, items: Vec<&TestItem>) {
    let iter = map.iter().collect::<Vec<_>>();
    assert_eq!(iter, items, ".iter() items match naive ones");

    let keys = map.keys().collect::<Vec<_>>();
    let naive_keys = items.iter().map(|e| e.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, naive_keys, ".keys() match naive ones");

    let iter_mut = map.iter_mut().map(|v| v.into_ref()).collect::<Vec<_>>();
    assert_eq!(iter_mut, items, ".iter_mut() items match naive ones");

    let into_iter = map.clone().into_iter().collect::<Vec<_>>();
    assert_eq!(into_iter, items, ".into_iter() items match naive ones");

    let rev = map.iter().rev().collect::<Vec<_>>();
    let naive_rev = items.iter().rev().copied().collect::<Vec<_>>();
    assert_eq!(rev, naive_rev, ".iter().rev() items match naive ones");
}

/// Returns a pair of orderings of a set of items with unique keys.
pub fn test_item_permutation_strategy(
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = (Vec<TestItem>, Vec<TestItem>)> {
    prop::collection::vec(any::<TestItem>(), size.into()).prop_perturb(
        |v, mut rng| {
            // The input vector likely has duplicate keys. De-dup them with
            // the map's own duplicate check.
            let mut map = make_map();
            for item in v {
                // Errors are expected here.
                _ = map.insert_unique(item);
            }
            let set: Vec<_> = map.into_iter().collect();

            // Fisher-Yates shuffle (Durstenfeld variant, low to high).
            let mut set2 = set.clone();
            if set.len() < 2 {
                return (set, set2);
            }
            for i in 0..set2.len() - 1 {
                let j = rng.random_range(i..set2.len());
                set2.swap(i, j);
            }

            (set, set2)
        },
    )
}
