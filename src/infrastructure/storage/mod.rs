//! Storage infrastructure - backend selection and PostgreSQL pooling

mod backend;
mod postgres;

pub use backend::StorageType;
pub use postgres::{connect_pool, PostgresConfig};
