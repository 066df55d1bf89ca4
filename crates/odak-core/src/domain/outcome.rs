//! Outcome - 1 回の実行がどう終わったか
//!
//! 実行はスキップ（何もしない。エラーではない）か、ちょうど 1 回の送信試行のどちらか。
//! 読み取り失敗は結果ではなく `DispatchError` として返る。

use serde::{Deserialize, Serialize};

/// 送信せずに終わった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// タスクが削除された
    Deleted,
    /// 変更後のスナップショットが空
    EmptySnapshot,
    /// タイトル変更のみ、同じ member への再アサイン、アサイン解除など
    NotNewAssignment,
    /// owner が分からないので premium を確認できない
    MissingCreator,
    NotPremium,
    NoToken,
}

/// 1 回の送信試行の分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryReport {
    Delivered { message_id: String },
    /// バックエンドが token を恒久的に無効と判断した（掃除の候補）
    TokenUnregistered,
    Failed { reason: String },
}

/// 1 回の実行の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchOutcome {
    Skipped(SkipReason),
    Attempted(DeliveryReport),
}

impl DispatchOutcome {
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped(reason)
    }

    /// 送信を試みたかどうか
    pub fn attempted(&self) -> bool {
        matches!(self, Self::Attempted(_))
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            Self::Attempted(_) => None,
        }
    }
}
