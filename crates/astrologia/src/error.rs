use thiserror::Error;

/// Errors raised by the parsing and profile entry points.
///
/// The pure calculations never fail: unknown signs and out-of-range numbers
/// are reported through sentinel values instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstrologiaError {
    #[error("Invalid date: {input:?}. Expected YYYY-MM-DD or DD/MM/YYYY")]
    InvalidDate { input: String },
    #[error("Unknown sign: {0}")]
    UnknownSign(String),
    #[error("Unknown element or modality: {0}")]
    UnknownGroup(String),
    #[error("No zodiac sign covers {month:02}-{day:02}; the sign table is inconsistent")]
    NoSignForDate { month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, AstrologiaError>;
