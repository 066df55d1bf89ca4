//! Widget - ホーム画面ウィジェットへの進捗の投影
//!
//! 通知パイプラインとは独立。状態を持たない純粋な計算なので、
//! どこから何度呼んでも同じ入力なら同じ結果になる。
//!
//! - **progress**: done/total → パーセンテージと段階（Tier）
//! - **render**: 2 種類のレイアウト（件数のみ / 日付 + 進捗バー）

pub mod progress;
pub mod render;

pub use self::progress::{Progress, Tier, derive_progress};
pub use self::render::{
    CountWidgetState, CountWidgetView, ProgressWidgetState, ProgressWidgetView, WidgetKind,
    WidgetState, WidgetView,
};
