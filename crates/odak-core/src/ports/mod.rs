//! Ports - 抽象化レイヤー
//!
//! 外部システム（ドキュメントストア、プッシュ配送バックエンド、
//! ウィジェットの共有ストレージ）へのインターフェースを trait で定義し、
//! 実装の詳細を隠蔽します。実装は `impls` にあります。

pub mod clock;
pub mod document_store;
pub mod event_sink;
pub mod id_generator;
pub mod push_gateway;
pub mod widget_storage;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::document_store::DocumentStore;
pub use self::event_sink::EventSink;
pub use self::id_generator::{RunIdGenerator, UlidRunIdGenerator};
pub use self::push_gateway::PushGateway;
pub use self::widget_storage::WidgetStorage;
