use std::sync::Arc;

use crate::domain::document::non_empty_str;
use crate::domain::{DeliveryToken, DispatchError, DocumentPath, MemberId, UserId};
use crate::ports::DocumentStore;

/// member レコード上の端末トークン
pub const TOKEN_FIELD: &str = "fcmToken";

/// `users/{owner}/members/{member}` から member の現在の配送トークンを引く
pub struct TokenResolver {
    store: Arc<dyn DocumentStore>,
}

impl TokenResolver {
    /// member レコードを読むストアを受け取る
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// レコードが無い、またはトークンが空・文字列以外なら `None`
    pub async fn resolve(
        &self,
        owner: &UserId,
        member: &MemberId,
    ) -> Result<Option<DeliveryToken>, DispatchError> {
        let path = DocumentPath::member(owner, member);
        let Some(record) = self
            .store
            .get(&path)
            .await
            .map_err(|e| DispatchError::store_read(path.clone(), e))?
        else {
            tracing::debug!(%path, "member record not found");
            return Ok(None);
        };

        Ok(non_empty_str(&record, TOKEN_FIELD).map(DeliveryToken::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryDocumentStore;
    use serde_json::json;

    fn ids() -> (UserId, MemberId) {
        (UserId::new("owner"), MemberId::new("member"))
    }

    #[tokio::test]
    async fn resolves_token_nested_under_owner() {
        let (owner, member) = ids();
        let store = InMemoryDocumentStore::new();
        store
            .put_member(&owner, &member, json!({ "fcmToken": "tok-1" }))
            .await;

        let resolver = TokenResolver::new(Arc::new(store));
        let token = resolver.resolve(&owner, &member).await.unwrap();
        assert_eq!(token, Some(DeliveryToken::new("tok-1")));
    }

    #[tokio::test]
    async fn member_under_another_owner_is_not_found() {
        let (owner, member) = ids();
        let store = InMemoryDocumentStore::new();
        store
            .put_member(&UserId::new("someone-else"), &member, json!({ "fcmToken": "tok-1" }))
            .await;

        let resolver = TokenResolver::new(Arc::new(store));
        assert_eq!(resolver.resolve(&owner, &member).await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_or_missing_token_is_none() {
        let (owner, member) = ids();
        let store = InMemoryDocumentStore::new();
        store.put_member(&owner, &member, json!({ "fcmToken": "" })).await;
        let other = MemberId::new("no-token");
        store.put_member(&owner, &other, json!({ "name": "x" })).await;

        let resolver = TokenResolver::new(Arc::new(store));
        assert_eq!(resolver.resolve(&owner, &member).await.unwrap(), None);
        assert_eq!(resolver.resolve(&owner, &other).await.unwrap(), None);
    }

    #[tokio::test]
    async fn read_failure_propagates() {
        let (owner, member) = ids();
        let store = InMemoryDocumentStore::new();
        store.fail_reads_of(DocumentPath::member(&owner, &member)).await;

        let resolver = TokenResolver::new(Arc::new(store));
        assert!(resolver.resolve(&owner, &member).await.is_err());
    }
}
