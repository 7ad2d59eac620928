//! Zodiac and numerology calculations over birth dates.
//!
//! Everything here is a pure function over static tables: no I/O, no shared
//! mutable state. Dates are any `chrono::Datelike`; only day, month and year
//! are read.

pub mod date;
pub mod error;
pub mod numerology;
pub mod profile;
pub mod western;

pub use date::{parse_birth_date, MonthDay};
pub use error::{AstrologiaError, Result};
pub use numerology::{
    number_meaning, personal_number, personal_year_meaning, personal_year_number, NumberMeaning,
    NumerologyReading, PersonalYearMeaning,
};
pub use profile::BirthProfile;
pub use western::{
    compatibility, compatibility_between, lookup_sign_by_name, resolve_sign, Compatibility,
    CompatibilityTier, Element, Modality, Sign,
};
