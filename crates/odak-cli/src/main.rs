use async_trait::async_trait;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::mpsc;

use odak_core::domain::{MemberId, OutboundMessage, PushError, TaskChange, TaskId, TaskSnapshot, UserId};
use odak_core::impls::{InMemoryDocumentStore, InMemoryWidgetStorage};
use odak_core::ports::PushGateway;
use odak_core::widget::render::{
    DATE_KEY, DONE_COUNT_KEY, TASK_COUNT_KEY, TITLE_KEY, TOTAL_COUNT_KEY,
};
use odak_core::widget::{WidgetKind, WidgetState};
use odak_core::{DispatchConfig, DispatcherBuilder, TriggerLoop};

/// 配送バックエンドの代わりに stdout へ JSON を書く
struct StdoutPushGateway {
    sent: AtomicU32,
}

#[async_trait]
impl PushGateway for StdoutPushGateway {
    async fn send(&self, message: &OutboundMessage) -> Result<String, PushError> {
        let body = serde_json::to_string(message)
            .map_err(|e| PushError::InvalidArgument(format!("json encode: {e}")))?;
        println!("{body}");
        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(format!("stdout/{n}"))
    }
}

fn snapshot(value: serde_json::Value) -> anyhow::Result<TaskSnapshot> {
    TaskSnapshot::from_value(value).ok_or_else(|| anyhow::anyhow!("task snapshot must be an object"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout は送信メッセージ用、ログは stderr へ
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // (A) 設定（引数があれば TOML を読む）
    let config = match std::env::args().nth(1) {
        Some(path) => DispatchConfig::from_file(Path::new(&path))?,
        None => DispatchConfig::default(),
    };

    // (B) ドキュメントストアに premium owner と token 付きの member を用意
    let owner = UserId::new("owner-1");
    let store = Arc::new(InMemoryDocumentStore::new());
    store.put_user(&owner, json!({ "isPremium": true })).await;
    store
        .put_member(&owner, &MemberId::new("member-1"), json!({ "fcmToken": "demo-device-token" }))
        .await;
    store.put_member(&owner, &MemberId::new("member-2"), json!({})).await;

    let detector = DispatcherBuilder::new()
        .store(store)
        .push_gateway(Arc::new(StdoutPushGateway {
            sent: AtomicU32::new(0),
        }))
        .config(config)
        .build()?;

    // (C) 変更イベントを流す（新規アサイン / タイトル変更のみ / token 無し / 削除）
    let (tx, rx) = mpsc::channel(16);
    let trigger = TriggerLoop::spawn(Arc::new(detector), rx);

    let task = |member: Option<&str>, title: &str| {
        let mut value = json!({ "title": title, "creatorId": owner.as_str() });
        if let Some(member) = member {
            value["assignedMemberId"] = json!(member);
        }
        snapshot(value)
    };

    let changes = vec![
        TaskChange::created(TaskId::new("task-1"), task(Some("member-1"), "Prepare slides")?),
        TaskChange::updated(
            TaskId::new("task-1"),
            task(Some("member-1"), "Prepare slides")?,
            task(Some("member-1"), "Prepare slides v2")?,
        ),
        TaskChange::updated(
            TaskId::new("task-2"),
            task(None, "Book venue")?,
            task(Some("member-2"), "Book venue")?,
        ),
        TaskChange::deleted(TaskId::new("task-3"), task(Some("member-1"), "Old task")?),
    ];
    for change in changes {
        tx.send(change).await?;
    }
    drop(tx);
    tracing::debug!(counts = ?trigger.counts(), "change events queued");

    // (D) 全 run の完了を待って集計を出す
    let counts = trigger.join().await;
    tracing::info!(?counts, "all change events processed");

    // (E) ウィジェットの 2 種類の表示
    let storage = InMemoryWidgetStorage::new();
    storage.set_string(TASK_COUNT_KEY, "3");
    storage.set_string(TITLE_KEY, "OdakList");
    storage.set_string(DATE_KEY, "18 October");
    storage.set_int(DONE_COUNT_KEY, 2);
    storage.set_int(TOTAL_COUNT_KEY, 3);

    for kind in [WidgetKind::Count, WidgetKind::Progress] {
        let view = WidgetState::load(kind, &storage).render();
        println!("{}", serde_json::to_string(&view)?);
    }

    Ok(())
}
