//! User entity and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::age::calculate_age;

/// Store-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record exactly as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: UserId,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl StoredUser {
    pub fn new(id: UserId, name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            date_of_birth,
        }
    }

    /// Shape the record for a response, deriving `age` as of the given date
    pub fn with_age(self, as_of: NaiveDate) -> User {
        let age = calculate_age(self.date_of_birth, as_of);

        User {
            id: self.id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            age,
        }
    }
}

/// User as returned to callers. `age` is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::new(42));
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_with_age_derives_age() {
        let stored = StoredUser::new(UserId::new(1), "Ada", date("1990-01-10"));
        let user = stored.with_age(date("2025-12-31"));

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "Ada");
        assert_eq!(user.date_of_birth, date("1990-01-10"));
        assert_eq!(user.age, 35);
    }

    #[test]
    fn test_user_serialization_uses_wire_names() {
        let user = StoredUser::new(UserId::new(3), "Ada", date("1990-05-10"))
            .with_age(date("2025-05-10"));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Ada", "dob": "1990-05-10", "age": 35})
        );
    }
}
