// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::test_item::TestItem;
use keyorder::errors::DuplicateItem;

/// A naive, inefficient map that acts as an oracle for property-based tests.
///
/// This map is stored as a vector without a key index, and performs linear
/// scans.
#[derive(Debug, Default)]
pub struct NaiveMap {
    items: Vec<TestItem>,
}

impl NaiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|e| e.key == key)
    }

    pub fn insert_unique_at(
        &mut self,
        index: usize,
        item: TestItem,
    ) -> Result<(), DuplicateItem<TestItem, &TestItem>> {
        match self.position(&item.key) {
            Some(dup) => {
                Err(DuplicateItem::__internal_new(item, vec![&self.items[dup]]))
            }
            None => {
                let index = index.min(self.items.len());
                self.items.insert(index, item);
                Ok(())
            }
        }
    }

    pub fn insert_unique(
        &mut self,
        item: TestItem,
    ) -> Result<(), DuplicateItem<TestItem, &TestItem>> {
        let len = self.items.len();
        self.insert_unique_at(len, item)
    }

    pub fn insert_overwrite(&mut self, item: TestItem) -> Option<TestItem> {
        match self.position(&item.key) {
            Some(index) => Some(std::mem::replace(&mut self.items[index], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    pub fn update(&mut self, item: TestItem) -> Result<TestItem, TestItem> {
        match self.position(&item.key) {
            Some(index) => Ok(std::mem::replace(&mut self.items[index], item)),
            None => Err(item),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TestItem> {
        self.items.iter().find(|e| e.key == key)
    }

    pub fn get_index(&self, index: usize) -> Option<&TestItem> {
        self.items.get(index)
    }

    pub fn get_index_of(&self, key: &str) -> Option<usize> {
        self.position(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<TestItem> {
        let index = self.position(key)?;
        Some(self.items.remove(index))
    }

    pub fn remove_index(&mut self, index: usize) -> Option<TestItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    pub fn move_index(&mut self, from: usize, to: usize) {
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    pub fn sort_keys(&mut self) {
        self.items.sort_by(|a, b| a.key.cmp(&b.key));
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&TestItem) -> bool,
    {
        self.items.retain(f);
    }

    pub fn pop(&mut self) -> Option<TestItem> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestItem> {
        self.items.iter()
    }
}
