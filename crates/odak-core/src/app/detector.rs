//! AssignmentChangeDetector - 変更イベント 1 件を処理するパイプライン
//!
//! # フロー
//! 1. before/after から「新規アサイン」かどうかを判定（純粋関数）
//! 2. EntitlementResolver で owner が premium か確認
//! 3. TokenResolver で member の token を取得
//! 4. NotificationComposer でメッセージを組み立て
//! 5. DeliveryGateway で 1 回だけ送信し、結果をイベントとして流す
//!
//! 2, 3 の読み取り失敗は `DispatchError` で実行ごと中断する（送信前なので副作用なし）。
//! タスクレコードへの書き戻しは一切しない。

use std::sync::Arc;

use tracing::Instrument;

use crate::domain::{
    DeliveryReport, DispatchError, DispatchOutcome, DomainEvent, MemberId, RunId, SkipReason,
    Task, TaskChange, TaskSnapshot,
};
use crate::notify::{DeliveryGateway, NotificationComposer};
use crate::ports::{Clock, EventSink, RunIdGenerator};
use crate::resolve::{EntitlementResolver, TokenResolver};

/// タスクが新しい member に渡った変更
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub task: Task,
    pub member: MemberId,
}

/// before/after の組が「新規アサイン」かどうかを判定する
///
/// `after` に担当者がいて、かつ `before` が無いか担当者が異なる場合だけ新規アサイン。
/// それ以外はスキップ理由を返す。
pub fn detect_new_assignment(change: &TaskChange) -> Result<NewAssignment, SkipReason> {
    let after = change.after.as_ref().ok_or(SkipReason::Deleted)?;
    if !after.has_data() {
        return Err(SkipReason::EmptySnapshot);
    }

    let member = after
        .assigned_member_id()
        .ok_or(SkipReason::NotNewAssignment)?;
    let previous = change.before.as_ref().and_then(TaskSnapshot::assigned_member_id);
    if previous.as_ref() == Some(&member) {
        return Err(SkipReason::NotNewAssignment);
    }

    let task = after
        .to_task(&change.task_id)
        .ok_or(SkipReason::MissingCreator)?;
    Ok(NewAssignment { task, member })
}

/// 変更イベント 1 件を判定から送信まで処理する
///
/// `DispatcherBuilder` で組み立てる。
pub struct AssignmentChangeDetector {
    pub(crate) entitlements: EntitlementResolver,
    pub(crate) tokens: TokenResolver,
    pub(crate) composer: NotificationComposer,
    pub(crate) gateway: DeliveryGateway,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) run_ids: Arc<dyn RunIdGenerator>,
}

impl AssignmentChangeDetector {
    /// 変更イベントを 1 件処理する。送信は多くても 1 回
    pub async fn handle(&self, change: &TaskChange) -> Result<DispatchOutcome, DispatchError> {
        let run_id = self.run_ids.generate_run_id();
        let span = tracing::info_span!("dispatch", %run_id, task_id = %change.task_id);
        self.run(run_id, change).instrument(span).await
    }

    async fn run(&self, run_id: RunId, change: &TaskChange) -> Result<DispatchOutcome, DispatchError> {
        let NewAssignment { task, member } = match detect_new_assignment(change) {
            Ok(assignment) => assignment,
            Err(SkipReason::MissingCreator) => {
                tracing::warn!("assigned task has no creatorId; nothing to gate on");
                return Ok(DispatchOutcome::skipped(SkipReason::MissingCreator));
            }
            Err(reason) => {
                tracing::debug!(?reason, "not a new assignment");
                return Ok(DispatchOutcome::skipped(reason));
            }
        };
        let owner = &task.creator_id;
        tracing::info!(%owner, %member, "new assignment");

        if !self.entitlements.is_premium(owner).await? {
            tracing::info!(%owner, "owner is not premium; notification skipped");
            return Ok(DispatchOutcome::skipped(SkipReason::NotPremium));
        }

        let Some(token) = self.tokens.resolve(owner, &member).await? else {
            tracing::info!(%member, "member has no delivery token; notification skipped");
            return Ok(DispatchOutcome::skipped(SkipReason::NoToken));
        };

        let message = self.composer.compose(token, &task.id, &task.title);
        let report = self.gateway.deliver(&message).await;

        let at = self.clock.now();
        let event = match &report {
            DeliveryReport::Delivered { message_id } => {
                tracing::debug!(%message_id, "delivery report: delivered");
                DomainEvent::NotificationDelivered {
                    run_id,
                    task_id: task.id.clone(),
                    member: member.clone(),
                    message_id: message_id.clone(),
                    at,
                }
            }
            DeliveryReport::TokenUnregistered => {
                tracing::debug!(%member, "delivery report: token unregistered");
                DomainEvent::TokenCleanupCandidate {
                    run_id,
                    owner: owner.clone(),
                    member: member.clone(),
                    at,
                }
            }
            DeliveryReport::Failed { reason } => {
                tracing::debug!(%reason, "delivery report: failed");
                DomainEvent::DeliveryFailed {
                    run_id,
                    task_id: task.id.clone(),
                    reason: reason.clone(),
                    at,
                }
            }
        };
        self.events.emit(event).await;

        Ok(DispatchOutcome::Attempted(report))
    }
}
