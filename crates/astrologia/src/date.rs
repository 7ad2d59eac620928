//! Calendar helpers shared by the sign table and the numerology reducer.

use crate::error::{AstrologiaError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// A year-less calendar position. Ordering is lexicographic on (month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        Self::new(date.month(), date.day())
    }

    /// True if the pair names a day that exists in a leap year.
    pub fn is_valid(&self) -> bool {
        // 2000 is a leap year, so 02-29 is accepted.
        NaiveDate::from_ymd_opt(2000, self.month, self.day).is_some()
    }
}

/// Parse a birth date written as `YYYY-MM-DD` or `DD/MM/YYYY`.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| AstrologiaError::InvalidDate {
            input: input.to_string(),
        })
}
