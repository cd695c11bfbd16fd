//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::user::{StoredUser, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Expects a `users (id BIGSERIAL PRIMARY KEY, name VARCHAR(255), dob DATE)` table.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(
        &self,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<StoredUser, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, dob)
            VALUES ($1, $2)
            RETURNING id, name, dob
            "#,
        )
        .bind(name)
        .bind(date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

        row_to_user(&row)
    }

    async fn get(&self, id: UserId) -> Result<StoredUser, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, dob
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row_to_user(&found(row, id)?)
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<StoredUser>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, dob
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn update(
        &self,
        id: UserId,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<StoredUser, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, dob = $3
            WHERE id = $1
            RETURNING id, name, dob
            "#,
        )
        .bind(id.value())
        .bind(name)
        .bind(date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update user: {}", e)))?;

        row_to_user(&found(row, id)?)
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        ensure_affected(result.rows_affected(), id)
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}

/// A missing row is `NotFound`, never a storage error
fn found<T>(row: Option<T>, id: UserId) -> Result<T, DomainError> {
    row.ok_or_else(|| not_found(id))
}

fn ensure_affected(rows_affected: u64, id: UserId) -> Result<(), DomainError> {
    if rows_affected == 0 {
        return Err(not_found(id));
    }

    Ok(())
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<StoredUser, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Invalid user ID in database: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::storage(format!("Invalid user name in database: {}", e)))?;
    let dob: NaiveDate = row
        .try_get("dob")
        .map_err(|e| DomainError::storage(format!("Invalid date of birth in database: {}", e)))?;

    Ok(StoredUser::new(UserId::new(id), name, dob))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_row_is_not_found() {
        let err = found::<()>(None, UserId::new(3)).unwrap_err();

        assert!(err.is_not_found());
        assert!(!matches!(err, DomainError::Storage { .. }));
        assert_eq!(found(Some(7), UserId::new(3)).unwrap(), 7);
    }

    #[test]
    fn test_delete_without_affected_rows_is_not_found() {
        let err = ensure_affected(0, UserId::new(9)).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("'9'"));
        assert!(ensure_affected(1, UserId::new(9)).is_ok());
    }

    /// Runs against a live database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_crud_round_trip_against_postgres() {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.unwrap();

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                dob DATE NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        let repo = PostgresUserRepository::new(pool);
        let dob = NaiveDate::from_ymd_opt(1990, 1, 10).unwrap();

        let created = repo.create("Ada", dob).await.unwrap();
        assert_eq!(repo.get(created.id).await.unwrap(), created);

        let new_dob = NaiveDate::from_ymd_opt(1991, 2, 11).unwrap();
        let updated = repo.update(created.id, "Ada L", new_dob).await.unwrap();
        assert_eq!(updated.name, "Ada L");
        assert_eq!(updated.date_of_birth, new_dob);

        repo.delete(created.id).await.unwrap();
        assert!(repo.get(created.id).await.unwrap_err().is_not_found());
        assert!(repo.delete(created.id).await.unwrap_err().is_not_found());
    }
}
