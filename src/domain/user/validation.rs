//! User validation utilities

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Date of birth must be a valid date in YYYY-MM-DD format")]
    InvalidDateOfBirth,
}

impl UserValidationError {
    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong(_) => "name",
            Self::InvalidDateOfBirth => "dob",
        }
    }
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.field(), err.to_string())
    }
}

pub const MAX_NAME_LENGTH: usize = 255;
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Validate a user name
///
/// Rules:
/// - Cannot be empty
/// - Maximum 255 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Parse a date of birth written as `YYYY-MM-DD`
///
/// The shape is checked before parsing so that signed or short years and
/// single-digit months are rejected along with impossible dates.
pub fn parse_dob(dob: &str) -> Result<NaiveDate, UserValidationError> {
    let bytes = dob.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(UserValidationError::InvalidDateOfBirth);
    }

    NaiveDate::parse_from_str(dob, DOB_FORMAT).map_err(|_| UserValidationError::InvalidDateOfBirth)
}

/// Validate the inputs of a create or update request, name first
pub fn validate_user_input(name: &str, dob: &str) -> Result<(), UserValidationError> {
    validate_name(name)?;
    parse_dob(dob)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Name tests
    #[test]
    fn test_valid_names() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_name(""), Err(UserValidationError::EmptyName));
    }

    #[test]
    fn test_name_too_long() {
        assert_eq!(
            validate_name(&"a".repeat(256)),
            Err(UserValidationError::NameTooLong(255))
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(validate_name(&"é".repeat(255)).is_ok());
        assert!(validate_name(&"é".repeat(256)).is_err());
    }

    // Date of birth tests
    #[test]
    fn test_valid_dob() {
        assert_eq!(
            parse_dob("2025-01-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        assert!(parse_dob("2024-02-29").is_ok());
    }

    #[test]
    fn test_malformed_dob() {
        for input in ["not-a-date", "2025/01/01", "", "2025-1-01", "25-01-01", "2025-01-01T00:00"] {
            assert_eq!(
                parse_dob(input),
                Err(UserValidationError::InvalidDateOfBirth),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_impossible_dob_same_error_as_malformed() {
        assert_eq!(
            parse_dob("2025-13-01"),
            Err(UserValidationError::InvalidDateOfBirth)
        );
        assert_eq!(
            parse_dob("2023-02-29"),
            Err(UserValidationError::InvalidDateOfBirth)
        );
        assert_eq!(
            parse_dob("2025-04-31"),
            Err(UserValidationError::InvalidDateOfBirth)
        );
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(UserValidationError::EmptyName.field(), "name");
        assert_eq!(UserValidationError::NameTooLong(255).field(), "name");
        assert_eq!(UserValidationError::InvalidDateOfBirth.field(), "dob");
    }

    #[test]
    fn test_validate_user_input_reports_name_first() {
        assert_eq!(
            validate_user_input("", "bogus"),
            Err(UserValidationError::EmptyName)
        );
        assert_eq!(
            validate_user_input("Ada", "bogus"),
            Err(UserValidationError::InvalidDateOfBirth)
        );
        assert!(validate_user_input("Ada", "1990-01-10").is_ok());
    }

    #[test]
    fn test_conversion_to_domain_error() {
        let err: DomainError = UserValidationError::InvalidDateOfBirth.into();

        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "dob");
                assert!(message.contains("YYYY-MM-DD"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
