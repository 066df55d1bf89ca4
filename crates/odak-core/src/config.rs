//! Config - 通知パイプラインの設定
//!
//! すべての項目に既定値があるので、設定ファイル無しでも動く。
//! TOML では上書きしたいキーだけを書けばよい:
//!
//! ```toml
//! routing_tag = "FLUTTER_NOTIFICATION_CLICK"
//! sound = "default"
//!
//! [notification]
//! title = "🎯 New task assigned!"
//! body_template = "{title} has been assigned to you."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `body_template` 中でタスクのタイトルに置き換わるプレースホルダ
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// 設定の読み込み・検証エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// 通知の文言（固定）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationCopy {
    pub title: String,
    pub body_template: String,
}

impl Default for NotificationCopy {
    fn default() -> Self {
        Self {
            title: "🎯 New task assigned!".to_string(),
            body_template: "{title} has been assigned to you.".to_string(),
        }
    }
}

impl NotificationCopy {
    /// 本文を組み立てる（タイトルはそのまま埋め込む）
    pub fn render_body(&self, task_title: &str) -> String {
        self.body_template.replace(TITLE_PLACEHOLDER, task_title)
    }
}

/// 通知パイプライン全体の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub notification: NotificationCopy,
    /// メッセージの data に載せるクライアント側のルーティング用マーカー
    pub routing_tag: String,
    pub sound: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            notification: NotificationCopy::default(),
            routing_tag: "FLUTTER_NOTIFICATION_CLICK".to_string(),
            sound: "default".to_string(),
        }
    }
}

impl DispatchConfig {
    /// TOML 文字列から読み込み、検証する
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML ファイルから読み込み、検証する
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// routing_tag が空でないこと、本文テンプレートに `{title}` があることを確認
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.routing_tag.trim().is_empty() {
            return Err(ConfigError::Invalid("routing_tag must not be empty".into()));
        }
        if !self.notification.body_template.contains(TITLE_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "notification.body_template must contain {TITLE_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}
