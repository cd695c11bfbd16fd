//! UserVault API
//!
//! CRUD over a single `users` record type with:
//! - Input validation for names and `YYYY-MM-DD` dates of birth
//! - Ages derived at response time, never stored
//! - PostgreSQL or in-memory persistence behind one repository trait

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use infrastructure::storage::{connect_pool, StorageType};
use infrastructure::user::{
    InMemoryUserRepository, PostgresUserRepository, SystemClock, UserService,
};
use tracing::info;

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend = StorageType::from_str(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown storage backend '{}'. Expected 'postgres' or 'memory'",
            config.storage.backend
        )
    })?;

    info!("Storage backend: {}", storage_backend);

    let clock = Arc::new(SystemClock::new());

    let user_service: Arc<dyn UserServiceTrait> = match storage_backend {
        StorageType::Postgres => {
            let pool = connect_pool(&config.database.to_postgres_config()).await?;
            let repository = Arc::new(PostgresUserRepository::new(pool));
            Arc::new(UserService::new(repository, clock))
        }
        StorageType::InMemory => {
            info!("Using in-memory storage for users; data is lost on restart");
            let repository = Arc::new(InMemoryUserRepository::new());
            Arc::new(UserService::new(repository, clock))
        }
    };

    Ok(AppState::new(user_service))
}
