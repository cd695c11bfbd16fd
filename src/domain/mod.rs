//! Domain layer - Core business logic and entities

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    calculate_age, parse_dob, validate_user_input, StoredUser, User, UserId, UserRepository,
    UserValidationError,
};
