//! User repository trait

use async_trait::async_trait;
use chrono::NaiveDate;

use super::entity::{StoredUser, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for user storage
///
/// Implementations perform no business validation. A missing row on
/// `get`, `update` or `delete` is reported as `DomainError::NotFound`;
/// every other failure is `DomainError::Storage`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the ID
    async fn create(&self, name: &str, date_of_birth: NaiveDate)
    -> Result<StoredUser, DomainError>;

    /// Get a user by ID
    async fn get(&self, id: UserId) -> Result<StoredUser, DomainError>;

    /// List users in store order. `limit` is expected to be positive.
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<StoredUser>, DomainError>;

    /// Replace the name and date of birth of an existing user
    async fn update(
        &self,
        id: UserId,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<StoredUser, DomainError>;

    /// Delete a user
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
}
