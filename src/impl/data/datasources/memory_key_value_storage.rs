use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::entities::KeyValueStorage;

/// In-process stand-in for the browser's local storage.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: String) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }
}
