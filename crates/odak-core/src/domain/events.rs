//! Events - ドメインイベント
//!
//! 配送結果のシグナル。`EventSink` に送られ、ログやトークン掃除など
//! 下流の処理が購読する。このコア自身は破壊的な操作をしない。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{MemberId, RunId, TaskId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    NotificationDelivered {
        run_id: RunId,
        task_id: TaskId,
        member: MemberId,
        message_id: String,
        at: DateTime<Utc>,
    },
    /// Token は恒久的に無効。削除するかどうかは購読側が決める。
    TokenCleanupCandidate {
        run_id: RunId,
        owner: UserId,
        member: MemberId,
        at: DateTime<Utc>,
    },
    DeliveryFailed {
        run_id: RunId,
        task_id: TaskId,
        reason: String,
        at: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// イベントを発生させた実行の ID（ログの相関用）
    pub fn run_id(&self) -> RunId {
        match self {
            Self::NotificationDelivered { run_id, .. }
            | Self::TokenCleanupCandidate { run_id, .. }
            | Self::DeliveryFailed { run_id, .. } => *run_id,
        }
    }

    /// ログに載せるイベント名
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotificationDelivered { .. } => "notification_delivered",
            Self::TokenCleanupCandidate { .. } => "token_cleanup_candidate",
            Self::DeliveryFailed { .. } => "delivery_failed",
        }
    }
}
