//! RunIdGenerator port - 実行 ID 生成の抽象化
//!
//! 1 イベント = 1 実行に ID を振り、ログとドメインイベントを相関させます。
//!
//! # 実装
//! - **UlidRunIdGenerator**: ULID ベース（Clock から timestamp を取る）

use crate::domain::RunId;
use crate::ports::Clock;
use ulid::Ulid;

/// # Thread Safety
/// - `Send + Sync` を要求（並行する複数の実行から使われる）
pub trait RunIdGenerator: Send + Sync {
    fn generate_run_id(&self) -> RunId;
}

/// Clock を使って現在時刻ベースの ULID を生成します。
/// テスト時に FixedClock を渡すと timestamp 部分が固定されます。
pub struct UlidRunIdGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidRunIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> RunIdGenerator for UlidRunIdGenerator<C> {
    fn generate_run_id(&self) -> RunId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        RunId::from_ulid(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn run_ids_are_unique() {
        let id_gen = UlidRunIdGenerator::new(SystemClock);

        let id1 = id_gen.generate_run_id();
        let id2 = id_gen.generate_run_id();

        assert_ne!(id1, id2);
    }

    #[test]
    fn fixed_clock_pins_the_timestamp_part() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidRunIdGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_run_id();
        let id2 = id_gen.generate_run_id();

        // ランダム部分があるので ID は異なるが、timestamp 部分は同じ
        assert_ne!(id1, id2);
        assert_eq!(id1.as_ulid().timestamp_ms(), id2.as_ulid().timestamp_ms());
        assert_eq!(
            id1.as_ulid().timestamp_ms(),
            fixed_time.timestamp_millis() as u64
        );
    }
}
