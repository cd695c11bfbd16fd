//! In-memory user repository implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{StoredUser, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<UserId, StoredUser>,
    /// Last assigned ID; IDs are never handed out twice
    last_id: i64,
}

/// In-memory implementation of UserRepository, ordered by ID
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(
        &self,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<StoredUser, DomainError> {
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let user = StoredUser::new(UserId::new(inner.last_id), name, date_of_birth);
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<StoredUser, DomainError> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<StoredUser>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .users
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: UserId,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<StoredUser, DomainError> {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&id).ok_or_else(|| not_found(id))?;

        user.name = name.to_string();
        user.date_of_birth = date_of_birth;

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        match inner.users.remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}
