//! RecordingPushGateway - 開発用・テスト用の配送バックエンド
//!
//! 送信されたメッセージをすべて記録し、結果は事前に仕込んだ順に返す。
//! 仕込みが尽きたら成功（連番の message id）を返す。

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use crate::domain::{OutboundMessage, PushError};
use crate::ports::PushGateway;

#[derive(Default)]
pub struct RecordingPushGateway {
    sent: Mutex<Vec<OutboundMessage>>,
    scripted: Mutex<VecDeque<Result<String, PushError>>>,
}

impl RecordingPushGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次の send の結果を仕込む
    pub async fn script(&self, result: Result<String, PushError>) {
        self.scripted.lock().await.push_back(result);
    }

    pub async fn fail_next(&self, error: PushError) {
        self.script(Err(error)).await;
    }

    pub async fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl PushGateway for RecordingPushGateway {
    async fn send(&self, message: &OutboundMessage) -> Result<String, PushError> {
        let mut sent = self.sent.lock().await;
        sent.push(message.clone());
        let seq = sent.len();
        drop(sent);

        match self.scripted.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(format!("messages/{seq}")),
        }
    }
}
