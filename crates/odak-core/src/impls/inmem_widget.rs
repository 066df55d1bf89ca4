//! InMemoryWidgetStorage - ウィジェット共有ストレージの開発用実装
//!
//! ホスト側の書き込み（`set_*`）とウィジェット側の読み取り（`WidgetStorage`）を
//! 1 つの map で扱う。型が違う値の読み取りは `None`。

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::ports::WidgetStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum StoredValue {
    Str(String),
    Int(i64),
}

#[derive(Debug, Default)]
pub struct InMemoryWidgetStorage {
    values: RwLock<HashMap<String, StoredValue>>,
}

impl InMemoryWidgetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), StoredValue::Str(value.into()));
    }

    pub fn set_int(&self, key: impl Into<String>, value: i64) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), StoredValue::Int(value));
    }

    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl WidgetStorage for InMemoryWidgetStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.read().unwrap_or_else(PoisonError::into_inner).get(key) {
            Some(StoredValue::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.read().unwrap_or_else(PoisonError::into_inner).get(key) {
            Some(StoredValue::Int(n)) => Some(*n),
            _ => None,
        }
    }
}
