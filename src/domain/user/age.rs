//! Age derivation from a date of birth

use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `dob` and `as_of`.
///
/// The birthday counts as reached once `(month, day)` of `as_of` is not
/// before that of `dob`. Dates of birth after `as_of` yield 0.
pub fn calculate_age(dob: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut age = as_of.year() - dob.year();

    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }

    age.max(0) as u32
}
