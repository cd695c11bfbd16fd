//! User service orchestrating validation, persistence and age derivation

use std::sync::Arc;

use crate::domain::user::{parse_dob, validate_user_input, User, UserId, UserRepository};
use crate::domain::DomainError;

use super::clock::Clock;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub dob: String,
}

/// Request for replacing a user's name and date of birth
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub name: String,
    pub dob: String,
}

/// User service for CRUD operations
///
/// Every returned `User` carries an age computed against `clock.today()`,
/// sampled once per call.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_user_input(&request.name, &request.dob)?;
        let dob = parse_dob(&request.dob)?;

        let stored = self.repository.create(&request.name, dob).await?;

        Ok(stored.with_age(self.clock.today()))
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        let stored = self.repository.get(id).await?;

        Ok(stored.with_age(self.clock.today()))
    }

    /// List a page of users. The caller guarantees `limit > 0`.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<User>, DomainError> {
        let users = self.repository.list(limit, offset).await?;
        let as_of = self.clock.today();

        Ok(users.into_iter().map(|u| u.with_age(as_of)).collect())
    }

    /// Replace a user's name and date of birth
    pub async fn update(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        validate_user_input(&request.name, &request.dob)?;
        let dob = parse_dob(&request.dob)?;

        let stored = self.repository.update(id, &request.name, dob).await?;

        Ok(stored.with_age(self.clock.today()))
    }

    /// Delete a user
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.repository.delete(id).await
    }
}
