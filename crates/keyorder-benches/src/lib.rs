//! Record types shared by the keyorder benchmarks.

use keyorder::KeyOrderItem;

/// A record whose key is a stored string.
pub struct RecordNamed {
    pub name: String,
    pub data: u64,
}

impl RecordNamed {
    pub fn new(i: usize) -> Self {
        Self { name: format!("record{i}"), data: i as u64 }
    }
}

impl KeyOrderItem for RecordNamed {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

/// A record whose key is formatted on every call.
pub struct RecordComputed {
    pub index: u32,
    pub data: String,
}

impl KeyOrderItem for RecordComputed {
    type Key<'a> = String;

    fn key(&self) -> Self::Key<'_> {
        self.index.to_string()
    }
}
