use crate::config::{DispatchConfig, NotificationCopy};
use crate::domain::{DeliveryToken, MessageData, Notification, OutboundMessage, TaskId};

/// 新規アサイン通知のメッセージを組み立てる
#[derive(Debug, Clone)]
pub struct NotificationComposer {
    copy: NotificationCopy,
    routing_tag: String,
    sound: String,
}

impl NotificationComposer {
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            copy: config.notification.clone(),
            routing_tag: config.routing_tag.clone(),
            sound: config.sound.clone(),
        }
    }

    /// タイトルは空でもそのまま埋め込む
    pub fn compose(&self, token: DeliveryToken, task_id: &TaskId, task_title: &str) -> OutboundMessage {
        OutboundMessage {
            token,
            notification: Notification {
                title: self.copy.title.clone(),
                body: self.copy.render_body(task_title),
            },
            data: MessageData {
                task_id: task_id.clone(),
                click_action: self.routing_tag.clone(),
                sound: self.sound.clone(),
            },
        }
    }
}

impl Default for NotificationComposer {
    fn default() -> Self {
        Self::new(&DispatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_default_copy() {
        let composer = NotificationComposer::default();
        let message = composer.compose(DeliveryToken::new("tok"), &TaskId::new("t1"), "Write report");

        assert_eq!(message.token, DeliveryToken::new("tok"));
        assert_eq!(message.notification.title, "🎯 New task assigned!");
        assert_eq!(
            message.notification.body,
            "Write report has been assigned to you."
        );
        assert_eq!(message.data.task_id, TaskId::new("t1"));
        assert_eq!(message.data.click_action, "FLUTTER_NOTIFICATION_CLICK");
        assert_eq!(message.data.sound, "default");
    }

    #[test]
    fn odd_titles_are_interpolated_verbatim() {
        let composer = NotificationComposer::default();
        let message = composer.compose(DeliveryToken::new("tok"), &TaskId::new("t1"), "{title} <b>");
        assert_eq!(message.notification.body, "{title} <b> has been assigned to you.");
    }

    #[test]
    fn composing_is_deterministic() {
        let composer = NotificationComposer::default();
        let a = composer.compose(DeliveryToken::new("tok"), &TaskId::new("t1"), "x");
        let b = composer.compose(DeliveryToken::new("tok"), &TaskId::new("t1"), "x");
        assert_eq!(a, b);
    }
}
