use async_trait::async_trait;
use roster_model::{User, UserDraft, UserId};
use std::sync::Arc;

use crate::infra::{
    api_client::ApiClient,
    constants::routes::{self, LIST_PAGE, USER_ITEM, USERS},
};

/// Which call failed. Failures are otherwise undifferentiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryOperation {
    List,
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for DirectoryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to {operation} user(s): {source:#}")]
    RequestFailed {
        operation: DirectoryOperation,
        #[source]
        source: anyhow::Error,
    },
}

impl DirectoryError {
    pub fn new(operation: DirectoryOperation, source: anyhow::Error) -> Self {
        Self::RequestFailed { operation, source }
    }

    pub fn operation(&self) -> DirectoryOperation {
        match self {
            Self::RequestFailed { operation, .. } => *operation,
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[async_trait]
pub trait UserDirectoryService: Send + Sync {
    /// Fetch the fixed result page. A response without `data` is an empty
    /// page, not an error.
    async fn list_users(&self) -> DirectoryResult<Vec<User>>;

    /// Create a user; the echoed record is returned verbatim
    async fn create_user(&self, draft: UserDraft) -> DirectoryResult<User>;

    /// Send the full record to the id-scoped endpoint
    async fn update_user(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> DirectoryResult<User>;

    async fn delete_user(&self, id: UserId) -> DirectoryResult<()>;
}

/// Extract the `data` array of a list response.
pub fn users_from_page(body: serde_json::Value) -> anyhow::Result<Vec<User>> {
    match body {
        serde_json::Value::Object(mut fields) => match fields.remove("data") {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(data) => Ok(serde_json::from_value(data)?),
        },
        _ => Ok(Vec::new()),
    }
}

#[derive(Clone, Debug)]
pub struct UserDirectoryApiAdapter {
    client: Arc<ApiClient>,
}

impl UserDirectoryApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn item_path(id: &UserId) -> String {
        routes::replace_param(USER_ITEM, "{id}", id.as_path_segment())
    }
}

#[async_trait]
impl UserDirectoryService for UserDirectoryApiAdapter {
    async fn list_users(&self) -> DirectoryResult<Vec<User>> {
        let fail = |e| DirectoryError::new(DirectoryOperation::List, e);
        let body: serde_json::Value = self
            .client
            .get_with_query(USERS, &[("page", LIST_PAGE)])
            .await
            .map_err(fail)?;
        users_from_page(body).map_err(fail)
    }

    async fn create_user(&self, draft: UserDraft) -> DirectoryResult<User> {
        self.client
            .post(USERS, &draft)
            .await
            .map_err(|e| DirectoryError::new(DirectoryOperation::Create, e))
    }

    async fn update_user(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> DirectoryResult<User> {
        let path = Self::item_path(&id);
        let body = User::from_draft(id, draft);
        self.client
            .put(&path, &body)
            .await
            .map_err(|e| DirectoryError::new(DirectoryOperation::Update, e))
    }

    async fn delete_user(&self, id: UserId) -> DirectoryResult<()> {
        self.client
            .delete(&Self::item_path(&id))
            .await
            .map_err(|e| DirectoryError::new(DirectoryOperation::Delete, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_without_data_is_empty() {
        assert!(users_from_page(json!({"page": 2})).unwrap().is_empty());
        assert!(users_from_page(json!({"data": null})).unwrap().is_empty());
        assert!(users_from_page(json!("not an object")).unwrap().is_empty());
    }

    #[test]
    fn page_with_data_keeps_order() {
        let users = users_from_page(json!({
            "page": 2,
            "data": [
                {"id": 7, "first_name": "Michael", "last_name": "Lawson", "email": "m@x.com"},
                {"id": 8, "first_name": "Lindsay", "last_name": "Ferguson", "email": "l@x.com"}
            ]
        }))
        .unwrap();

        let ids: Vec<_> = users.iter().map(|u| u.id.clone()).collect();
        assert_eq!(ids, vec![UserId::from(7), UserId::from(8)]);
    }

    #[test]
    fn malformed_data_is_an_error() {
        assert!(users_from_page(json!({"data": {"id": 7}})).is_err());
    }

    #[test]
    fn error_names_the_operation() {
        let err = DirectoryError::new(
            DirectoryOperation::Delete,
            anyhow::anyhow!("Request failed with status 404 Not Found: "),
        );
        assert_eq!(err.operation(), DirectoryOperation::Delete);
        assert!(err.to_string().starts_with("failed to delete user(s)"));
    }
}
