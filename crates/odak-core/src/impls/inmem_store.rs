//! InMemoryDocumentStore - 開発用・テスト用のドキュメントストア
//!
//! # 実装詳細
//! - `RwLock<HashMap<DocumentPath, Document>>` でレコードを保持
//! - 指定したパスの読み取りを失敗させられる（障害注入）
//! - 読み取り回数を数える（「読んでいない」ことのテスト用）

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::{Document, DocumentPath, MemberId, StoreError, UserId};
use crate::ports::DocumentStore;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentPath, Document>>,
    failing: RwLock<HashSet<DocumentPath>>,
    reads: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを書き込む。JSON オブジェクト以外は無視する。
    pub async fn put(&self, path: DocumentPath, value: Value) {
        let Value::Object(document) = value else {
            tracing::warn!(%path, "ignoring non-object document");
            return;
        };
        self.documents.write().await.insert(path, document);
    }

    pub async fn put_user(&self, user: &UserId, value: Value) {
        self.put(DocumentPath::user(user), value).await;
    }

    pub async fn put_member(&self, owner: &UserId, member: &MemberId, value: Value) {
        self.put(DocumentPath::member(owner, member), value).await;
    }

    pub async fn remove(&self, path: &DocumentPath) -> Option<Document> {
        self.documents.write().await.remove(path)
    }

    /// 以降、このパスの読み取りは `StoreError::Unavailable` になる
    pub async fn fail_reads_of(&self, path: DocumentPath) {
        self.failing.write().await.insert(path);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        if self.failing.read().await.contains(path) {
            return Err(StoreError::Unavailable(format!("injected failure for {path}")));
        }
        Ok(self.documents.read().await.get(path).cloned())
    }
}
