//! User domain
//!
//! Entity types, the age rule, input validation and the repository trait
//! for the single `users` record type.

mod age;
mod entity;
mod repository;
mod validation;

pub use age::calculate_age;
pub use entity::{StoredUser, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    parse_dob, validate_name, validate_user_input, UserValidationError, DOB_FORMAT,
    MAX_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::MockUserRepository;
