//! App - アプリケーション層
//!
//! ports を組み合わせて通知パイプラインを実装します。
//!
//! # 主要コンポーネント
//! - **DispatcherBuilder**: パイプラインの構築とワイヤリング
//! - **AssignmentChangeDetector**: 変更イベント 1 件の処理
//! - **TriggerLoop**: イベントごとに独立した run を spawn する受け口
//! - **RunCounts**: 結果の集計

pub mod builder;
pub mod detector;
pub mod status;
pub mod trigger_loop;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, DispatcherBuilder};
pub use self::detector::{AssignmentChangeDetector, NewAssignment, detect_new_assignment};
pub use self::status::RunCounts;
pub use self::trigger_loop::TriggerLoop;
