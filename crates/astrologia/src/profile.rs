//! Everything derivable from a birth date, bundled for display.

use crate::error::{AstrologiaError, Result};
use crate::numerology::NumerologyReading;
use crate::western::{resolve_sign, Element, Modality, Sign};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BirthProfile {
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    pub sign: Sign,
    #[serde(rename = "signName")]
    pub sign_name: &'static str,
    pub glyph: &'static str,
    pub element: Element,
    pub modality: Modality,
    #[serde(flatten)]
    pub numerology: NumerologyReading,
}

impl BirthProfile {
    /// Build the profile for `birth_date`, evaluating the personal year in
    /// `year` (current local year when `None`).
    pub fn compute(birth_date: NaiveDate, year: Option<i32>) -> Result<Self> {
        let sign = resolve_sign(&birth_date).ok_or_else(|| {
            log::error!("sign table does not cover {}", birth_date);
            AstrologiaError::NoSignForDate {
                month: birth_date.month(),
                day: birth_date.day(),
            }
        })?;
        let info = sign.info();

        Ok(Self {
            birth_date,
            sign,
            sign_name: info.name,
            glyph: info.glyph,
            element: info.element,
            modality: info.modality,
            numerology: NumerologyReading::compute(&birth_date, year),
        })
    }
}
