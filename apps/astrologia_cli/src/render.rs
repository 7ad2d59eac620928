use crate::Format;
use astrologia::western::SignInfo;
use astrologia::{BirthProfile, Compatibility, NumerologyReading, Sign};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct SignView {
    #[serde(flatten)]
    info: &'static SignInfo,
    ruler: &'static str,
}

impl SignView {
    fn new(sign: Sign, modern: bool) -> Self {
        Self {
            info: sign.info(),
            ruler: sign.ruler(modern),
        }
    }
}

#[derive(Serialize)]
struct NumerologyView<'a> {
    #[serde(rename = "birthDate")]
    birth_date: NaiveDate,
    #[serde(flatten)]
    reading: &'a NumerologyReading,
}

#[derive(Serialize)]
struct CompatibilityView<'a> {
    #[serde(rename = "signA")]
    sign_a: &'a str,
    #[serde(rename = "signB")]
    sign_b: &'a str,
    #[serde(flatten)]
    result: &'a Compatibility,
}

#[derive(Serialize)]
struct ProfileView<'a> {
    #[serde(flatten)]
    profile: &'a BirthProfile,
    ruler: &'static str,
}

fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn sign_line(sign: Sign, modern: bool) -> String {
    let info = sign.info();
    format!(
        "{} {} ({}, {}) {:02}/{:02} a {:02}/{:02}, regente: {}",
        info.glyph,
        info.name,
        info.element,
        info.modality,
        info.start.day,
        info.start.month,
        info.end.day,
        info.end.month,
        sign.ruler(modern)
    )
}

pub fn sign(sign: Sign, format: Format, modern: bool) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(sign_line(sign, modern)),
        Format::Json => json(&SignView::new(sign, modern)),
    }
}

pub fn table(signs: &[Sign], format: Format, modern: bool) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(signs
            .iter()
            .map(|s| sign_line(*s, modern))
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => {
            let views: Vec<SignView> = signs.iter().map(|s| SignView::new(*s, modern)).collect();
            json(&views)
        }
    }
}

pub fn numerology(
    date: NaiveDate,
    reading: &NumerologyReading,
    format: Format,
) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(format!(
            "Número pessoal: {} - {}\n  {}\nAno pessoal {}: {} - {}\n  {}",
            reading.personal_number,
            reading.number_meaning.title,
            reading.number_meaning.description,
            reading.evaluation_year,
            reading.personal_year,
            reading.personal_year_meaning.title,
            reading.personal_year_meaning.theme
        )),
        Format::Json => json(&NumerologyView {
            birth_date: date,
            reading,
        }),
    }
}

pub fn compatibility(
    sign_a: &str,
    sign_b: &str,
    result: &Compatibility,
    format: Format,
) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(format!(
            "{} x {}: {}/100\n  {}",
            sign_a.trim(),
            sign_b.trim(),
            result.level,
            result.description
        )),
        Format::Json => json(&CompatibilityView {
            sign_a,
            sign_b,
            result,
        }),
    }
}

pub fn profile(profile: &BirthProfile, format: Format, modern: bool) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(format!(
            "{}\nNúmero pessoal: {} - {}\nAno pessoal {}: {} - {}",
            sign_line(profile.sign, modern),
            profile.numerology.personal_number,
            profile.numerology.number_meaning.title,
            profile.numerology.evaluation_year,
            profile.numerology.personal_year,
            profile.numerology.personal_year_meaning.title
        )),
        Format::Json => json(&ProfileView {
            profile,
            ruler: profile.sign.ruler(modern),
        }),
    }
}
