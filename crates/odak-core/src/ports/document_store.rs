//! DocumentStore port - 外部ドキュメントストア（正本）
//!
//! このコアは読み取りのみ。ポイントルックアップだけで、クエリや
//! ページングは行いません。タイムアウトやリトライはクライアント側の責務です。

use async_trait::async_trait;

use crate::domain::{Document, DocumentPath, StoreError};

/// DocumentStore はパス指定で 1 レコードを読む
///
/// # 戻り値
/// - `Ok(Some(doc))`: レコードが存在する
/// - `Ok(None)`: レコードが存在しない（エラーではない）
/// - `Err(_)`: 読み取りそのものに失敗した
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError>;
}
