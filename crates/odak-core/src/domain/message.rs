//! Message - 送信するプッシュメッセージ
//!
//! シリアライズ形式は配送バックエンドの単一送信 API に合わせる:
//! `{ token, notification: { title, body }, data: { taskId, click_action, sound } }`

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;

/// 端末ごとの配送トークン（中身は不透明）
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryToken(String);

impl DeliveryToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ログに出るので先頭だけ表示する
impl fmt::Debug for DeliveryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "DeliveryToken({prefix}…)")
    }
}

/// 通知として表示される部分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// アプリに渡すデータ部分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    #[serde(rename = "taskId")]
    pub task_id: TaskId,
    /// クライアント側のルーティング用マーカー
    pub click_action: String,
    pub sound: String,
}

/// 1 件のプッシュメッセージ。実行ごとに組み立て、永続化しない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub token: DeliveryToken,
    pub notification: Notification,
    pub data: MessageData,
}
