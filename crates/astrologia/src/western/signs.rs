//! The zodiac table.
//!
//! Signs are identified by a stable enum; the Portuguese display name, glyph and
//! date range are attributes of the table row. Capricórnio is the only row whose
//! range crosses the year boundary.

use crate::date::MonthDay;
use crate::error::AstrologiaError;
use crate::western::groups::{Element, Modality};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignInfo {
    pub sign: Sign,
    pub name: &'static str,
    pub glyph: &'static str,
    pub emoji: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub start: MonthDay,
    pub end: MonthDay,
}

impl SignInfo {
    /// True for the row whose range runs from December into January.
    pub fn wraps_year(&self) -> bool {
        self.start.month > self.end.month
    }

    /// Inclusive membership test on month/day.
    pub fn contains(&self, md: MonthDay) -> bool {
        if self.wraps_year() {
            (md.month == self.start.month && md.day >= self.start.day)
                || (md.month == self.end.month && md.day <= self.end.day)
        } else {
            self.start <= md && md <= self.end
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn row(
    sign: Sign,
    name: &'static str,
    glyph: &'static str,
    emoji: &'static str,
    element: Element,
    modality: Modality,
    start: (u32, u32),
    end: (u32, u32),
) -> SignInfo {
    SignInfo {
        sign,
        name,
        glyph,
        emoji,
        element,
        modality,
        start: MonthDay::new(start.0, start.1),
        end: MonthDay::new(end.0, end.1),
    }
}

/// Indexed by `Sign as usize`.
#[rustfmt::skip]
pub static ZODIAC: [SignInfo; 12] = [
    row(Sign::Aries, "Áries", "♈", "🐏", Element::Fire, Modality::Cardinal, (3, 21), (4, 19)),
    row(Sign::Taurus, "Touro", "♉", "🐂", Element::Earth, Modality::Fixed, (4, 20), (5, 20)),
    row(Sign::Gemini, "Gêmeos", "♊", "👯", Element::Air, Modality::Mutable, (5, 21), (6, 20)),
    row(Sign::Cancer, "Câncer", "♋", "🦀", Element::Water, Modality::Cardinal, (6, 21), (7, 22)),
    row(Sign::Leo, "Leão", "♌", "🦁", Element::Fire, Modality::Fixed, (7, 23), (8, 22)),
    row(Sign::Virgo, "Virgem", "♍", "👩", Element::Earth, Modality::Mutable, (8, 23), (9, 22)),
    row(Sign::Libra, "Libra", "♎", "⚖️", Element::Air, Modality::Cardinal, (9, 23), (10, 22)),
    row(Sign::Scorpio, "Escorpião", "♏", "🦂", Element::Water, Modality::Fixed, (10, 23), (11, 21)),
    row(Sign::Sagittarius, "Sagitário", "♐", "🏹", Element::Fire, Modality::Mutable, (11, 22), (12, 21)),
    row(Sign::Capricorn, "Capricórnio", "♑", "🐐", Element::Earth, Modality::Cardinal, (12, 22), (1, 19)),
    row(Sign::Aquarius, "Aquário", "♒", "🏺", Element::Air, Modality::Fixed, (1, 20), (2, 18)),
    row(Sign::Pisces, "Peixes", "♓", "🐟", Element::Water, Modality::Mutable, (2, 19), (3, 20)),
];

const TRADITIONAL_RULERS: [&str; 12] = [
    "mars", "venus", "mercury", "moon", "sun", "mercury",
    "venus", "mars", "jupiter", "saturn", "saturn", "jupiter",
];

const MODERN_RULERS: [&str; 12] = [
    "mars", "venus", "mercury", "moon", "sun", "mercury",
    "venus", "pluto", "jupiter", "saturn", "uranus", "neptune",
];

lazy_static::lazy_static! {
    // Lowercased display names and serde slugs both resolve.
    static ref NAME_INDEX: HashMap<String, Sign> = {
        let mut index = HashMap::with_capacity(24);
        for info in ZODIAC.iter() {
            index.insert(info.name.to_lowercase(), info.sign);
            index.insert(info.sign.slug().to_string(), info.sign);
        }
        index
    };
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zero-based zodiac position, Aries = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static SignInfo {
        &ZODIAC[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn slug(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    pub fn element(self) -> Element {
        self.info().element
    }

    pub fn modality(self) -> Modality {
        self.info().modality
    }

    /// The sign six places away on the wheel.
    pub fn opposite(self) -> Sign {
        Sign::ALL[(self.index() + 6) % 12]
    }

    /// Planetary ruler; `modern` swaps in the outer planets for Scorpio, Aquarius and Pisces.
    pub fn ruler(self, modern: bool) -> &'static str {
        if modern {
            MODERN_RULERS[self.index()]
        } else {
            TRADITIONAL_RULERS[self.index()]
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = AstrologiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_sign_by_name(s).ok_or_else(|| AstrologiaError::UnknownSign(s.to_string()))
    }
}

/// Case-insensitive exact match on the display name ("Leão") or slug ("leo").
pub fn lookup_sign_by_name(name: &str) -> Option<Sign> {
    NAME_INDEX.get(&name.trim().to_lowercase()).copied()
}
