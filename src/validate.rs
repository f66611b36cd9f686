//! Input checks that run before the engine is called.

use chrono::{Months, NaiveDate};
use thiserror::Error;

use crate::engine::DATE_FORMAT;

/// Oldest birth date accepted, in years before today.
pub const DEFAULT_MAX_AGE_YEARS: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no birth date provided")]
    Empty,

    #[error("{0:?} is not a valid YYYY-MM-DD date")]
    Invalid(String),

    #[error("birth date {0} is in the future")]
    Future(NaiveDate),

    #[error("birth date {date} is more than {max_age_years} years ago")]
    TooOld { date: NaiveDate, max_age_years: u32 },
}

/// Accepts a birth date in `[today - max_age_years, today]`.
pub fn validate_birth_date(
    input: &str,
    today: NaiveDate,
    max_age_years: u32,
) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::Invalid(input.to_string()))?;

    if date > today {
        return Err(ValidationError::Future(date));
    }

    let earliest = today
        .checked_sub_months(Months::new(max_age_years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);
    if date < earliest {
        return Err(ValidationError::TooOld {
            date,
            max_age_years,
        });
    }

    Ok(date)
}
