//! EventSink port - イベント記録の抽象化
//!
//! 配送結果のシグナル（token 掃除候補など）を下流へ流します。
//! emit は失敗しない: シグナルは観測用であり、実行結果を変えない。

use async_trait::async_trait;

use crate::domain::DomainEvent;

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: DomainEvent);
}
