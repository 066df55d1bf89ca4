//! RunCounts - トリガーループが完了させた run の集計

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{DeliveryReport, DispatchError, DispatchOutcome};

/// 結果ごとの完了 run 数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounts {
    pub skipped: usize,
    pub delivered: usize,
    pub token_unregistered: usize,
    pub delivery_failed: usize,
    /// 読み取り失敗で中断した run（panic した run を含む）
    pub errored: usize,
}

/// 並行する run から更新されるカウンタ
#[derive(Debug, Default)]
pub(crate) struct RunCounters {
    skipped: AtomicUsize,
    delivered: AtomicUsize,
    token_unregistered: AtomicUsize,
    delivery_failed: AtomicUsize,
    errored: AtomicUsize,
}

impl RunCounters {
    pub(crate) fn record(&self, result: &Result<DispatchOutcome, DispatchError>) {
        let counter = match result {
            Ok(DispatchOutcome::Skipped(_)) => &self.skipped,
            Ok(DispatchOutcome::Attempted(DeliveryReport::Delivered { .. })) => &self.delivered,
            Ok(DispatchOutcome::Attempted(DeliveryReport::TokenUnregistered)) => {
                &self.token_unregistered
            }
            Ok(DispatchOutcome::Attempted(DeliveryReport::Failed { .. })) => &self.delivery_failed,
            Err(_) => &self.errored,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_panic(&self) {
        self.errored.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> RunCounts {
        RunCounts {
            skipped: self.skipped.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            token_unregistered: self.token_unregistered.load(Ordering::Relaxed),
            delivery_failed: self.delivery_failed.load(Ordering::Relaxed),
            errored: self.errored.load(Ordering::Relaxed),
        }
    }
}
