//! TriggerLoop - 変更イベントの受け口
//!
//! mpsc で届いた `TaskChange` ごとに独立したタスクを spawn する。
//! イベント間の順序付けや重複排除はしない（同じタスクの変更が重なっても並行に走る）。
//! 失敗した実行はログに残すだけで、再配送はイベント源の責務。

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::app::AssignmentChangeDetector;
use crate::app::status::{RunCounters, RunCounts};
use crate::domain::TaskChange;

/// トリガーループのハンドル
/// - `request_shutdown()` で新しいイベントの受け付けを止める（バッファ済みの分は実行する）
/// - `shutdown_and_join()` で実行中の run の完了を待ち、集計を返す
pub struct TriggerLoop {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
    counters: Arc<RunCounters>,
}

impl TriggerLoop {
    /// 受け口を起動する
    pub fn spawn(detector: Arc<AssignmentChangeDetector>, events: mpsc::Receiver<TaskChange>) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let counters = Arc::new(RunCounters::default());

        let join = tokio::spawn(intake_loop(detector, events, shutdown_rx, counters.clone()));

        Self {
            shutdown_tx,
            join,
            counters,
        }
    }

    /// 現時点の集計（実行中の run は含まない）
    pub fn counts(&self) -> RunCounts {
        self.counters.snapshot()
    }

    /// 実行中の run はキャンセルしない。受け付けだけを止める
    pub fn request_shutdown(&self) {
        // ignore send error: the loop may already have exited
        let _ = self.shutdown_tx.send(true);
    }

    /// 受け付けを止め、バッファ済み・実行中の run の完了を待って集計を返す
    pub async fn shutdown_and_join(self) -> RunCounts {
        self.request_shutdown();
        if let Err(e) = self.join.await {
            tracing::error!(error = %e, "trigger loop task failed");
        }
        self.counters.snapshot()
    }

    /// 送信側が閉じ、すべての run が終わるまで待つ
    pub async fn join(self) -> RunCounts {
        if let Err(e) = self.join.await {
            tracing::error!(error = %e, "trigger loop task failed");
        }
        self.counters.snapshot()
    }
}

async fn intake_loop(
    detector: Arc<AssignmentChangeDetector>,
    mut events: mpsc::Receiver<TaskChange>,
    mut shutdown_rx: watch::Receiver<bool>,
    counters: Arc<RunCounters>,
) {
    let mut runs = JoinSet::new();
    let mut watching_shutdown = true;

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown_rx.changed(), if watching_shutdown => {
                // handle dropped: nobody can ask us to stop any more, keep draining events
                if changed.is_err() {
                    watching_shutdown = false;
                }
                continue;
            }
            change = events.recv() => {
                let Some(change) = change else {
                    break;
                };
                spawn_run(&mut runs, &detector, &counters, change);
            }
            Some(joined) = runs.join_next(), if !runs.is_empty() => {
                record_join(&counters, joined);
            }
        }
    }

    // 受け付け済み（バッファ済み）のイベントは捨てずに実行する
    events.close();
    let mut drained = 0usize;
    while let Some(change) = events.recv().await {
        spawn_run(&mut runs, &detector, &counters, change);
        drained += 1;
    }
    if drained > 0 {
        tracing::info!(drained, "running buffered change events before shutdown");
    }

    while let Some(joined) = runs.join_next().await {
        record_join(&counters, joined);
    }
}

/// 1 イベント = 1 タスク。結果は counters に記録する
fn spawn_run(
    runs: &mut JoinSet<()>,
    detector: &Arc<AssignmentChangeDetector>,
    counters: &Arc<RunCounters>,
    change: TaskChange,
) {
    let detector = Arc::clone(detector);
    let counters = Arc::clone(counters);
    runs.spawn(async move {
        let result = detector.handle(&change).await;
        if let Err(e) = &result {
            tracing::error!(task_id = %change.task_id, error = %e, "dispatch run failed");
        }
        counters.record(&result);
    });
}

fn record_join(counters: &RunCounters, joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "dispatch run panicked");
        counters.record_panic();
    }
}
