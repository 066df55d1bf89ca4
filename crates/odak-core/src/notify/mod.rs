//! Notify - メッセージの組み立てと配送
//!
//! - **NotificationComposer**: 純粋関数。I/O も失敗も無い
//! - **DeliveryGateway**: PushGateway に 1 回だけ送り、結果を分類する（リトライしない）

pub mod composer;
pub mod gateway;

pub use self::composer::NotificationComposer;
pub use self::gateway::DeliveryGateway;
