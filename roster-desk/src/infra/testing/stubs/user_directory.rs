use crate::infra::services::{
    DirectoryError, DirectoryOperation, UserDirectoryService,
    user_directory::DirectoryResult,
};

use async_trait::async_trait;
use roster_model::{User, UserDraft, UserId};
use std::{
    collections::HashSet,
    sync::{Arc, RwLock},
};

/// In-memory users directory behaving like the public demo service:
/// creates hand out fresh string ids, deletes always succeed.
#[derive(Debug, Clone)]
pub struct TestUserDirectory {
    inner: Arc<RwLock<InnerDirectoryState>>,
}

#[derive(Debug, Clone, Default)]
struct InnerDirectoryState {
    users: Vec<User>,
    next_id: u64,
    failing: HashSet<DirectoryOperation>,
    omit_data: bool,
    calls: Vec<DirectoryOperation>,
}

impl Default for TestUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserDirectory {
    /// Seeded with the six users of the demo service's second page.
    pub fn new() -> Self {
        let seed = [
            (7, "Michael", "Lawson"),
            (8, "Lindsay", "Ferguson"),
            (9, "Tobias", "Funke"),
            (10, "Byron", "Fields"),
            (11, "George", "Edwards"),
            (12, "Rachel", "Howell"),
        ];
        let users = seed
            .into_iter()
            .map(|(id, first, last)| {
                User::from_draft(
                    UserId::from(id),
                    UserDraft::new(
                        first,
                        last,
                        format!(
                            "{}.{}@reqres.in",
                            first.to_lowercase(),
                            last.to_lowercase()
                        ),
                    ),
                )
            })
            .collect();
        Self::with_users(users)
    }

    pub fn empty() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerDirectoryState {
                users,
                next_id: 100,
                ..Default::default()
            })),
        }
    }

    /// Make every subsequent call of `operation` fail.
    pub fn fail(&self, operation: DirectoryOperation) -> &Self {
        self.write(|inner| {
            inner.failing.insert(operation);
        });
        self
    }

    /// Answer list calls as if the response had no `data` field.
    pub fn omit_data(&self, omit: bool) -> &Self {
        self.write(|inner| inner.omit_data = omit);
        self
    }

    /// Next id handed out by `create_user`.
    pub fn set_next_id(&self, next: u64) -> &Self {
        self.write(|inner| inner.next_id = next);
        self
    }

    pub fn users(&self) -> Vec<User> {
        self.read(|inner| inner.users.clone())
    }

    pub fn calls(&self) -> Vec<DirectoryOperation> {
        self.read(|inner| inner.calls.clone())
    }

    fn read<R>(&self, f: impl FnOnce(&InnerDirectoryState) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut InnerDirectoryState) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Record the call and fail it if requested.
    fn enter(&self, operation: DirectoryOperation) -> DirectoryResult<()> {
        self.write(|inner| {
            inner.calls.push(operation);
            if inner.failing.contains(&operation) {
                Err(DirectoryError::new(
                    operation,
                    anyhow::anyhow!("simulated network failure"),
                ))
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl UserDirectoryService for TestUserDirectory {
    async fn list_users(&self) -> DirectoryResult<Vec<User>> {
        self.enter(DirectoryOperation::List)?;
        Ok(self.read(|inner| {
            if inner.omit_data {
                Vec::new()
            } else {
                inner.users.clone()
            }
        }))
    }

    async fn create_user(&self, draft: UserDraft) -> DirectoryResult<User> {
        self.enter(DirectoryOperation::Create)?;
        Ok(self.write(|inner| {
            let id = UserId::Text(inner.next_id.to_string());
            inner.next_id += 1;
            let user = User::from_draft(id, draft);
            inner.users.push(user.clone());
            user
        }))
    }

    async fn update_user(
        &self,
        id: UserId,
        draft: UserDraft,
    ) -> DirectoryResult<User> {
        self.enter(DirectoryOperation::Update)?;
        Ok(self.write(|inner| {
            let user = User::from_draft(id, draft);
            for existing in inner.users.iter_mut().filter(|u| u.id == user.id) {
                *existing = user.clone();
            }
            user
        }))
    }

    async fn delete_user(&self, id: UserId) -> DirectoryResult<()> {
        self.enter(DirectoryOperation::Delete)?;
        self.write(|inner| inner.users.retain(|u| u.id != id));
        Ok(())
    }
}
