//! Progress - done/total から進捗率と段階を求める

use serde::{Deserialize, Serialize};

/// 進捗率に応じた段階（表示メッセージが変わる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NotStarted,
    InProgress,
    Halfway,
    Complete,
}

impl Tier {
    /// 上から順に判定: 100 → Complete, 50 以上 → Halfway, 1 以上 → InProgress
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            100.. => Self::Complete,
            50..=99 => Self::Halfway,
            1..=49 => Self::InProgress,
            0 => Self::NotStarted,
        }
    }

    /// 段階ごとの表示メッセージ
    pub fn message(self) -> &'static str {
        match self {
            Self::Complete => "All done for today! 🎉",
            Self::Halfway => "Over halfway there, keep going! 💪",
            Self::InProgress => "Good start, keep it up!",
            Self::NotStarted => "Let's get started! 🚀",
        }
    }
}

/// 進捗率とその段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 常に 0..=100
    pub percentage: u8,
    pub tier: Tier,
}

/// `floor(done * 100 / total)` を 0..=100 に丸める。`total <= 0` なら 0
///
/// `done > total` は 100（Complete）、負の値は 0 として扱う。
pub fn derive_progress(done: i64, total: i64) -> Progress {
    let percentage = if total > 0 {
        // i128 so done * 100 cannot overflow
        (i128::from(done) * 100 / i128::from(total)).clamp(0, 100) as u8
    } else {
        0
    };

    Progress {
        percentage,
        tier: Tier::from_percentage(percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0, Tier::NotStarted)]
    #[case(5, 10, 50, Tier::Halfway)]
    #[case(10, 10, 100, Tier::Complete)]
    #[case(1, 10, 10, Tier::InProgress)]
    #[case(0, 10, 0, Tier::NotStarted)]
    #[case(1, 3, 33, Tier::InProgress)]
    #[case(2, 3, 66, Tier::Halfway)]
    #[case(99, 100, 99, Tier::Halfway)]
    #[case(1, 1000, 0, Tier::NotStarted)]
    fn derives_percentage_and_tier(
        #[case] done: i64,
        #[case] total: i64,
        #[case] percentage: u8,
        #[case] tier: Tier,
    ) {
        assert_eq!(derive_progress(done, total), Progress { percentage, tier });
    }

    #[test]
    fn overshoot_is_clamped_to_complete() {
        let p = derive_progress(12, 10);
        assert!(p.percentage >= 100);
        assert_eq!(p.percentage, 100);
        assert_eq!(p.tier, Tier::Complete);
    }

    #[rstest]
    #[case(3, 0)]
    #[case(3, -5)]
    #[case(-2, 10)]
    fn degenerate_counters_read_as_not_started(#[case] done: i64, #[case] total: i64) {
        assert_eq!(
            derive_progress(done, total),
            Progress {
                percentage: 0,
                tier: Tier::NotStarted
            }
        );
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(derive_progress(i64::MAX, i64::MAX).percentage, 100);
        assert_eq!(derive_progress(i64::MAX, 1).percentage, 100);
        assert_eq!(derive_progress(i64::MIN, 1).percentage, 0);
    }

    #[test]
    fn derivation_is_idempotent() {
        assert_eq!(derive_progress(7, 9), derive_progress(7, 9));
    }

    #[test]
    fn every_tier_has_distinct_copy() {
        let messages = [
            Tier::NotStarted.message(),
            Tier::InProgress.message(),
            Tier::Halfway.message(),
            Tier::Complete.message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
