//! EventSink の実装
//!
//! - **TracingEventSink**: tracing に構造化ログとして流す（既定）
//! - **CollectingEventSink**: メモリに溜める（テスト用）

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::DomainEvent;
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: DomainEvent) {
        let run_id = event.run_id();
        let name = event.name();
        match &event {
            DomainEvent::NotificationDelivered {
                task_id,
                member,
                message_id,
                ..
            } => {
                tracing::info!(%run_id, %task_id, %member, %message_id, event = name, "notification delivered");
            }
            DomainEvent::TokenCleanupCandidate { owner, member, .. } => {
                tracing::warn!(%run_id, %owner, %member, event = name, "token may need cleanup");
            }
            DomainEvent::DeliveryFailed {
                task_id, reason, ..
            } => {
                tracing::error!(%run_id, %task_id, %reason, event = name, "notification delivery failed");
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl CollectingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventSink for CollectingEventSink {
    async fn emit(&self, event: DomainEvent) {
        self.events.lock().await.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemberId, RunId, TaskId, UserId};
    use chrono::Utc;
    use ulid::Ulid;

    fn sample_events() -> Vec<DomainEvent> {
        let run_id = RunId::from_ulid(Ulid::new());
        let at = Utc::now();
        vec![
            DomainEvent::NotificationDelivered {
                run_id,
                task_id: TaskId::new("t1"),
                member: MemberId::new("m1"),
                message_id: "messages/1".to_string(),
                at,
            },
            DomainEvent::TokenCleanupCandidate {
                run_id,
                owner: UserId::new("u1"),
                member: MemberId::new("m1"),
                at,
            },
            DomainEvent::DeliveryFailed {
                run_id,
                task_id: TaskId::new("t1"),
                reason: "unavailable".to_string(),
                at,
            },
        ]
    }

    #[tokio::test]
    async fn tracing_sink_accepts_every_event() {
        let sink = TracingEventSink;
        for event in sample_events() {
            sink.emit(event).await;
        }
    }

    #[tokio::test]
    async fn collecting_sink_keeps_emit_order() {
        let sink = CollectingEventSink::new();
        let events = sample_events();
        for event in events.clone() {
            sink.emit(event).await;
        }
        assert_eq!(sink.events().await, events);
    }
}
