//! Digit-sum reduction of birth dates.
//!
//! The personal number keeps the master numbers 11, 22 and 33; the personal
//! year number always reduces to a single digit.

use chrono::{Datelike, Local};

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of decimal digits.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly digit-sum `value` until it is at most 9, or, when `keep_master`
/// is set, until it lands on a master number.
///
/// Terminates because the digit sum of any value above 9 is strictly smaller.
pub fn reduce_number(mut value: u32, keep_master: bool) -> u32 {
    while value > 9 && !(keep_master && is_master_number(value)) {
        value = digit_sum(value);
    }
    value
}

// BCE years contribute their magnitude.
fn date_sum<D: Datelike>(date: &D, year: i32) -> u32 {
    date.day() + date.month() + year.unsigned_abs()
}

/// Personal number: day + month + year, reduced with master numbers kept.
/// Result is in {1..9, 11, 22, 33}.
pub fn personal_number<D: Datelike>(date: &D) -> u32 {
    reduce_number(date_sum(date, date.year()), true)
}

/// Personal year number for `year` (current local year when `None`):
/// birth day + birth month + year, reduced unconditionally to 1..9.
pub fn personal_year_number<D: Datelike>(date: &D, year: Option<i32>) -> u32 {
    let year = year.unwrap_or_else(current_year);
    reduce_number(date_sum(date, year), false)
}

pub fn current_year() -> i32 {
    Local::now().year()
}
