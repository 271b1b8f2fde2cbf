//! Date validation
//!
//! Turns raw year/month/day input into a calendar date, rejecting anything
//! out of range or later than today.

use chrono::NaiveDate;

use crate::error::DateError;

/// Earliest accepted year
pub const MIN_YEAR: i32 = 1900;
/// Latest accepted year
pub const MAX_YEAR: i32 = 2100;

/// Raw date input as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateParts {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// Pre-fill with the parts of an existing date
    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(
            date.year().to_string(),
            date.month().to_string(),
            date.day().to_string(),
        )
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month; `month` must be 1-12
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Validate a year/month/day triple against `today`
///
/// All three parts are parsed before any range is checked, so non-numeric
/// input always reports `InvalidFormat`. `today` itself is accepted.
pub fn validate_date(parts: &DateParts, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let year = parse_part(&parts.year)?;
    let month = parse_part(&parts.month)?;
    let day = parse_part(&parts.day)?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::MonthOutOfRange(month));
    }

    let month = month as u32;
    if day < 1 || day as u32 > days_in_month(year, month) {
        return Err(DateError::DayOutOfRange { month, day });
    }

    let date = NaiveDate::from_ymd_opt(year, month, day as u32)
        .ok_or(DateError::DayOutOfRange { month, day })?;

    if date > today {
        return Err(DateError::FutureDate(date));
    }

    Ok(date)
}

fn parse_part(raw: &str) -> Result<i32, DateError> {
    raw.trim().parse().map_err(|_| DateError::InvalidFormat)
}
