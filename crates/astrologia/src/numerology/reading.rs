use crate::numerology::meanings::{
    number_meaning, personal_year_meaning, NumberMeaning, PersonalYearMeaning,
};
use crate::numerology::reducer::{current_year, personal_number, personal_year_number};
use chrono::Datelike;
use serde::Serialize;

/// Personal number and personal year for one date, with their meanings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumerologyReading {
    #[serde(rename = "personalNumber")]
    pub personal_number: u32,
    #[serde(rename = "numberMeaning")]
    pub number_meaning: &'static NumberMeaning,
    #[serde(rename = "evaluationYear")]
    pub evaluation_year: i32,
    #[serde(rename = "personalYear")]
    pub personal_year: u32,
    #[serde(rename = "personalYearMeaning")]
    pub personal_year_meaning: &'static PersonalYearMeaning,
}

impl NumerologyReading {
    /// `year` is the evaluation year for the personal year; current local year when `None`.
    pub fn compute<D: Datelike>(date: &D, year: Option<i32>) -> Self {
        let evaluation_year = year.unwrap_or_else(current_year);
        let number = personal_number(date);
        let personal_year = personal_year_number(date, Some(evaluation_year));
        Self {
            personal_number: number,
            number_meaning: number_meaning(number),
            evaluation_year,
            personal_year,
            personal_year_meaning: personal_year_meaning(personal_year),
        }
    }
}
