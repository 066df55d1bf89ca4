//! PushGateway port - プッシュ配送バックエンド
//!
//! 1 メッセージを 1 token に送る。成功時はバックエンドの message id を返す。

use async_trait::async_trait;

use crate::domain::{OutboundMessage, PushError};

#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<String, PushError>;
}
