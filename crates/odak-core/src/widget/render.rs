//! Render - ウィジェットの 2 種類のレイアウト
//!
//! ホストアプリが共有ストレージにキーを書き込み、`load` で型付きの状態に読み込み、
//! `render` で表示用のフィールドに変換する。どちらも失敗しない
//! （キーが無ければ既定値を使う）。

use serde::{Deserialize, Serialize};

use super::progress::derive_progress;
use crate::ports::WidgetStorage;

/// ホストアプリと共有するストレージのキー
pub const TASK_COUNT_KEY: &str = "task_count";
pub const TITLE_KEY: &str = "title";
pub const DATE_KEY: &str = "date_str";
pub const DONE_COUNT_KEY: &str = "done_count";
pub const TOTAL_COUNT_KEY: &str = "total_count";

const DEFAULT_COUNT: &str = "0";
const DEFAULT_TITLE: &str = "OdakList";

/// ウィジェットの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// 件数 + タイトルのみ
    Count,
    /// 日付 + 件数 + 進捗バー
    Progress,
}

/// 件数ウィジェットの状態（値はそのまま表示し、計算しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountWidgetState {
    pub count: String,
    pub title: String,
}

impl CountWidgetState {
    /// ストレージから読み込む。キーが無ければ `"0"` / `"OdakList"`
    pub fn load(storage: &dyn WidgetStorage) -> Self {
        Self {
            count: storage
                .get_string(TASK_COUNT_KEY)
                .unwrap_or_else(|| DEFAULT_COUNT.to_string()),
            title: storage
                .get_string(TITLE_KEY)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}

impl Default for CountWidgetState {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// 進捗ウィジェットの状態
///
/// `done <= total` を想定するが強制はしない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressWidgetState {
    pub date: String,
    pub done: i64,
    pub total: i64,
}

impl ProgressWidgetState {
    /// ストレージから読み込む。キーが無ければ空文字列 / 0
    pub fn load(storage: &dyn WidgetStorage) -> Self {
        Self {
            date: storage.get_string(DATE_KEY).unwrap_or_default(),
            done: storage.get_int(DONE_COUNT_KEY).unwrap_or(0),
            total: storage.get_int(TOTAL_COUNT_KEY).unwrap_or(0),
        }
    }
}

/// 件数ウィジェットの表示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountWidgetView {
    pub title: String,
    pub count: String,
}

/// 進捗ウィジェットの表示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressWidgetView {
    pub date: String,
    pub done: i64,
    pub total: i64,
    pub message: &'static str,
    /// 進捗バーの値（0..=100）
    pub progress: u8,
}

/// 件数ウィジェットを描画する（入力をそのまま写す）
pub fn render_count(state: &CountWidgetState) -> CountWidgetView {
    CountWidgetView {
        title: state.title.clone(),
        count: state.count.clone(),
    }
}

/// 進捗ウィジェットを描画する
///
/// パーセンテージと段階メッセージは `derive_progress` から求める。
pub fn render_progress(state: &ProgressWidgetState) -> ProgressWidgetView {
    let progress = derive_progress(state.done, state.total);
    ProgressWidgetView {
        date: state.date.clone(),
        done: state.done,
        total: state.total,
        message: progress.tier.message(),
        progress: progress.percentage,
    }
}

/// どちらかのウィジェットの状態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetState {
    Count(CountWidgetState),
    Progress(ProgressWidgetState),
}

/// `WidgetState::render` の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetView {
    Count(CountWidgetView),
    Progress(ProgressWidgetView),
}

impl WidgetState {
    /// 指定した種類の状態をストレージから読み込む
    pub fn load(kind: WidgetKind, storage: &dyn WidgetStorage) -> Self {
        match kind {
            WidgetKind::Count => Self::Count(CountWidgetState::load(storage)),
            WidgetKind::Progress => Self::Progress(ProgressWidgetState::load(storage)),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Count(_) => WidgetKind::Count,
            Self::Progress(_) => WidgetKind::Progress,
        }
    }

    pub fn render(&self) -> WidgetView {
        match self {
            Self::Count(state) => WidgetView::Count(render_count(state)),
            Self::Progress(state) => WidgetView::Progress(render_progress(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryWidgetStorage;
    use crate::widget::Tier;

    #[test]
    fn count_widget_defaults_when_storage_is_empty() {
        let storage = InMemoryWidgetStorage::new();
        let view = render_count(&CountWidgetState::load(&storage));
        assert_eq!(view.count, "0");
        assert_eq!(view.title, "OdakList");
    }

    #[test]
    fn count_widget_shows_values_verbatim() {
        let storage = InMemoryWidgetStorage::new();
        storage.set_string(TASK_COUNT_KEY, "12 tasks");
        storage.set_string(TITLE_KEY, "Today");

        let view = render_count(&CountWidgetState::load(&storage));
        assert_eq!(view.count, "12 tasks");
        assert_eq!(view.title, "Today");
    }

    #[test]
    fn progress_widget_renders_tier_and_bar() {
        let storage = InMemoryWidgetStorage::new();
        storage.set_string(DATE_KEY, "18 Oct");
        storage.set_int(DONE_COUNT_KEY, 3);
        storage.set_int(TOTAL_COUNT_KEY, 4);

        let view = render_progress(&ProgressWidgetState::load(&storage));
        assert_eq!(view.date, "18 Oct");
        assert_eq!(view.done, 3);
        assert_eq!(view.total, 4);
        assert_eq!(view.progress, 75);
        assert_eq!(view.message, Tier::Halfway.message());
    }

    #[test]
    fn progress_widget_missing_counters_is_not_started() {
        let storage = InMemoryWidgetStorage::new();
        let view = render_progress(&ProgressWidgetState::load(&storage));
        assert_eq!(view.progress, 0);
        assert_eq!(view.message, Tier::NotStarted.message());
        assert_eq!(view.date, "");
    }

    #[test]
    fn progress_widget_tolerates_done_above_total() {
        let view = render_progress(&ProgressWidgetState {
            date: String::new(),
            done: 12,
            total: 10,
        });
        assert_eq!(view.progress, 100);
        assert_eq!(view.done, 12);
        assert_eq!(view.message, Tier::Complete.message());
    }

    #[test]
    fn state_render_dispatches_on_variant() {
        let storage = InMemoryWidgetStorage::new();
        storage.set_int(DONE_COUNT_KEY, 10);
        storage.set_int(TOTAL_COUNT_KEY, 10);

        let count = WidgetState::load(WidgetKind::Count, &storage);
        assert_eq!(count.kind(), WidgetKind::Count);
        assert!(matches!(count.render(), WidgetView::Count(_)));

        let progress = WidgetState::load(WidgetKind::Progress, &storage);
        match progress.render() {
            WidgetView::Progress(view) => assert_eq!(view.progress, 100),
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn storage_keys_match_host_app() {
        assert_eq!(
            [TASK_COUNT_KEY, TITLE_KEY, DATE_KEY, DONE_COUNT_KEY, TOTAL_COUNT_KEY],
            ["task_count", "title", "date_str", "done_count", "total_count"]
        );
    }

    #[test]
    fn rendering_twice_is_identical() {
        let state = WidgetState::Progress(ProgressWidgetState {
            date: "d".to_string(),
            done: 1,
            total: 3,
        });
        assert_eq!(state.render(), state.render());
    }
}
