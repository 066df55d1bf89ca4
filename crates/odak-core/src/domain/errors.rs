//! Errors - エラー型と分類
//!
//! - `StoreError`: ドキュメントストアの読み取り失敗
//! - `PushError`: 配送バックエンドの失敗（token 無効かどうかを分類）
//! - `DispatchError`: 実行全体を中断させるエラー（fail closed）

use thiserror::Error;

use super::document::DocumentPath;

/// ドキュメントストアの読み取りエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied for {0}")]
    PermissionDenied(DocumentPath),

    #[error("{0}")]
    Other(String),
}

/// 配送バックエンドのエラー
///
/// `Unregistered` だけが「恒久的に無効な token」。それ以外はすべて一時的 or 不明。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("registration token is not registered")]
    Unregistered,

    #[error("invalid message: {0}")]
    InvalidArgument(String),

    #[error("push backend unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

impl PushError {
    pub fn is_unregistered(&self) -> bool {
        matches!(self, Self::Unregistered)
    }
}

/// 実行全体のエラー
///
/// entitlement / token の解決で読み取りに失敗した場合のみ返る。
/// この時点では配送は行われていないので、副作用は無い。
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read {path}: {source}")]
    StoreRead {
        path: DocumentPath,
        #[source]
        source: StoreError,
    },
}

impl DispatchError {
    pub fn store_read(path: DocumentPath, source: StoreError) -> Self {
        Self::StoreRead { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::UserId;

    #[test]
    fn only_unregistered_is_classified_as_unregistered() {
        assert!(PushError::Unregistered.is_unregistered());
        assert!(!PushError::Unavailable("503".into()).is_unregistered());
        assert!(!PushError::InvalidArgument("bad".into()).is_unregistered());
    }

    #[test]
    fn dispatch_error_names_the_failing_path() {
        let err = DispatchError::store_read(
            DocumentPath::user(&UserId::new("u1")),
            StoreError::Unavailable("timeout".into()),
        );
        let msg = err.to_string();
        assert!(msg.contains("users/u1"));
        assert!(msg.contains("timeout"));
    }
}
