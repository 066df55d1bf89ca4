//! odak-core
//!
//! タスクのアサイン変更に反応するプッシュ通知ディスパッチャと、
//! ホーム画面ウィジェットへの進捗の投影。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, document, task, message, outcome, errors, events）
//! - **ports**: 抽象化レイヤー（DocumentStore, PushGateway, EventSink, WidgetStorage, Clock, RunIdGenerator）
//! - **resolve**: entitlement / token の解決
//! - **notify**: メッセージ組み立てと配送結果の分類
//! - **app**: パイプライン（builder, detector, trigger_loop, status）
//! - **widget**: 進捗の計算と 2 種類のウィジェット表示
//! - **impls**: 開発用・テスト用の ports 実装
//! - **config**: 通知文言などの設定（TOML）

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod notify;
pub mod ports;
pub mod resolve;
pub mod widget;

pub use app::{AssignmentChangeDetector, DispatcherBuilder, TriggerLoop};
pub use config::DispatchConfig;
pub use domain::{DispatchError, DispatchOutcome, TaskChange};
