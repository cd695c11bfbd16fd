//! User infrastructure module
//!
//! This module provides the user service together with the PostgreSQL and
//! in-memory repository implementations and the clock used for ages.

mod clock;
mod postgres_repository;
mod repository;
mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
