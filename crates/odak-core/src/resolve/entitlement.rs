use std::sync::Arc;

use crate::domain::document::is_exactly_true;
use crate::domain::{DispatchError, DocumentPath, UserId};
use crate::ports::DocumentStore;

/// user レコード上の premium フラグ
pub const PREMIUM_FIELD: &str = "isPremium";

/// ユーザーが premium 資格を持っているかを判定する
pub struct EntitlementResolver {
    store: Arc<dyn DocumentStore>,
}

impl EntitlementResolver {
    /// owner レコードを読むストアを受け取る
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// レコードが無い、またはフラグが真偽値 `true` 以外なら `false`
    pub async fn is_premium(&self, owner: &UserId) -> Result<bool, DispatchError> {
        let path = DocumentPath::user(owner);
        let user = self
            .store
            .get(&path)
            .await
            .map_err(|e| DispatchError::store_read(path.clone(), e))?;

        Ok(user.is_some_and(|doc| is_exactly_true(&doc, PREMIUM_FIELD)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryDocumentStore;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "isPremium": true }), true)]
    #[case(json!({ "isPremium": false }), false)]
    #[case(json!({ "isPremium": "true" }), false)]
    #[case(json!({ "isPremium": 1 }), false)]
    #[case(json!({ "name": "no flag" }), false)]
    #[tokio::test]
    async fn only_boolean_true_is_premium(#[case] user: serde_json::Value, #[case] expected: bool) {
        let store = InMemoryDocumentStore::new();
        store.put_user(&UserId::new("u1"), user).await;

        let resolver = EntitlementResolver::new(Arc::new(store));
        assert_eq!(resolver.is_premium(&UserId::new("u1")).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn missing_user_is_not_premium() {
        let resolver = EntitlementResolver::new(Arc::new(InMemoryDocumentStore::new()));
        assert!(!resolver.is_premium(&UserId::new("ghost")).await.unwrap());
    }

    #[tokio::test]
    async fn read_failure_propagates() {
        let store = InMemoryDocumentStore::new();
        store.fail_reads_of(DocumentPath::user(&UserId::new("u1"))).await;

        let resolver = EntitlementResolver::new(Arc::new(store));
        let err = resolver.is_premium(&UserId::new("u1")).await.unwrap_err();
        assert!(matches!(err, DispatchError::StoreRead { .. }));
    }
}
