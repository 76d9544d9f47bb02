//! In-memory store for use-case tests

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::domain::ports::KvStore;
use crate::domain::value_objects::KvKey;
use crate::error::{KvseedError, KvseedResult};

#[derive(Default)]
pub struct MemoryKvStore {
    pub values: RefCell<BTreeMap<String, Vec<u8>>>,
    /// Keys that answer with the given status instead of succeeding
    pub reject: HashMap<String, u16>,
}

impl MemoryKvStore {
    pub fn with(values: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in values {
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.as_bytes().to_vec());
        }
        store
    }

    pub fn rejecting(mut self, key: &str, status: u16) -> Self {
        self.reject.insert(key.to_string(), status);
        self
    }

    pub fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.values
            .borrow()
            .get(key)
            .map(|raw| serde_json::from_slice(raw).unwrap())
    }

    fn check(&self, key: &KvKey) -> KvseedResult<()> {
        match self.reject.get(key.as_str()) {
            Some(&status) => Err(KvseedError::StoreRejected {
                url: self.url_for(key),
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }
}

impl KvStore for MemoryKvStore {
    fn location(&self) -> String {
        "memory://".to_string()
    }

    fn url_for(&self, key: &KvKey) -> String {
        format!("memory://v1/kv/{}", key)
    }

    fn put(&self, key: &KvKey, body: &[u8]) -> KvseedResult<u16> {
        self.check(key)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), body.to_vec());
        Ok(200)
    }

    fn get(&self, key: &KvKey) -> KvseedResult<Option<Vec<u8>>> {
        self.check(key)?;
        Ok(self.values.borrow().get(key.as_str()).cloned())
    }

    fn delete_tree(&self, key: &KvKey) -> KvseedResult<u16> {
        self.check(key)?;
        let prefix = format!("{}/", key);
        self.values
            .borrow_mut()
            .retain(|k, _| k != key.as_str() && !k.starts_with(&prefix));
        Ok(200)
    }
}
