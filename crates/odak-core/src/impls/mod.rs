//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **InMemoryDocumentStore**: 障害注入つきのドキュメントストア
//! - **RecordingPushGateway**: 送信を記録する配送バックエンド
//! - **TracingEventSink / CollectingEventSink**: ドメインイベントの出力先
//! - **InMemoryWidgetStorage**: ウィジェットの共有ストレージ
//!
//! 本番用の実装（実ストア・実配送バックエンドのクライアント）はホスト側で
//! ports を実装して差し込む。

pub mod event_sinks;
pub mod inmem_store;
pub mod inmem_widget;
pub mod recording_push;

pub use self::event_sinks::{CollectingEventSink, TracingEventSink};
pub use self::inmem_store::InMemoryDocumentStore;
pub use self::inmem_widget::InMemoryWidgetStorage;
pub use self::recording_push::RecordingPushGateway;
