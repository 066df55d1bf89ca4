use std::sync::Arc;

use crate::domain::{DeliveryReport, OutboundMessage};
use crate::ports::PushGateway;

/// 1 件送信して結果を分類する。リトライはしない
pub struct DeliveryGateway {
    push: Arc<dyn PushGateway>,
}

impl DeliveryGateway {
    pub fn new(push: Arc<dyn PushGateway>) -> Self {
        Self { push }
    }

    pub async fn deliver(&self, message: &OutboundMessage) -> DeliveryReport {
        match self.push.send(message).await {
            Ok(message_id) => DeliveryReport::Delivered { message_id },
            Err(e) if e.is_unregistered() => DeliveryReport::TokenUnregistered,
            Err(e) => DeliveryReport::Failed {
                reason: e.to_string(),
            },
        }
    }
}
