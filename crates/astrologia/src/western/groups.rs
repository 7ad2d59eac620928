//! Element and modality groupings.
//!
//! Each grouping partitions the twelve signs: four elements of three signs and
//! three modalities of four signs. Compatibility tiers are decided on elements;
//! modalities are descriptive only.

use crate::error::AstrologiaError;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ElementInfo {
    pub element: Element,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Display hint, hex RGB.
    pub color: &'static str,
    #[serde(rename = "accentColor")]
    pub accent_color: &'static str,
    pub signs: [Sign; 3],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModalityInfo {
    pub modality: Modality,
    pub name: &'static str,
    pub description: &'static str,
    pub signs: [Sign; 4],
}

pub static ELEMENTS: [ElementInfo; 4] = [
    ElementInfo {
        element: Element::Fire,
        name: "Fogo",
        emoji: "🔥",
        color: "#E4572E",
        accent_color: "#F3A712",
        signs: [Sign::Aries, Sign::Leo, Sign::Sagittarius],
    },
    ElementInfo {
        element: Element::Earth,
        name: "Terra",
        emoji: "🌍",
        color: "#6B8F71",
        accent_color: "#A0C49D",
        signs: [Sign::Taurus, Sign::Virgo, Sign::Capricorn],
    },
    ElementInfo {
        element: Element::Air,
        name: "Ar",
        emoji: "💨",
        color: "#8EC5FC",
        accent_color: "#E0C3FC",
        signs: [Sign::Gemini, Sign::Libra, Sign::Aquarius],
    },
    ElementInfo {
        element: Element::Water,
        name: "Água",
        emoji: "💧",
        color: "#2E86AB",
        accent_color: "#A3D5FF",
        signs: [Sign::Cancer, Sign::Scorpio, Sign::Pisces],
    },
];

pub static MODALITIES: [ModalityInfo; 3] = [
    ModalityInfo {
        modality: Modality::Cardinal,
        name: "Cardinal",
        description: "Iniciam as estações: energia de começo, liderança e ação.",
        signs: [Sign::Aries, Sign::Cancer, Sign::Libra, Sign::Capricorn],
    },
    ModalityInfo {
        modality: Modality::Fixed,
        name: "Fixo",
        description: "Sustentam as estações: energia de estabilidade, foco e persistência.",
        signs: [Sign::Taurus, Sign::Leo, Sign::Scorpio, Sign::Aquarius],
    },
    ModalityInfo {
        modality: Modality::Mutable,
        name: "Mutável",
        description: "Encerram as estações: energia de adaptação, flexibilidade e transição.",
        signs: [Sign::Gemini, Sign::Virgo, Sign::Sagittarius, Sign::Pisces],
    },
];

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn info(self) -> &'static ElementInfo {
        &ELEMENTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Stable lowercase id, same as the serde form.
    pub fn slug(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    pub fn signs(self) -> &'static [Sign; 3] {
        &self.info().signs
    }
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn info(self) -> &'static ModalityInfo {
        &MODALITIES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Stable lowercase id, same as the serde form.
    pub fn slug(self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }

    pub fn signs(self) -> &'static [Sign; 4] {
        &self.info().signs
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = AstrologiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.slug() == needle || e.name().to_lowercase() == needle)
            .ok_or_else(|| AstrologiaError::UnknownGroup(s.to_string()))
    }
}

impl FromStr for Modality {
    type Err = AstrologiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Modality::ALL
            .into_iter()
            .find(|m| m.slug() == needle || m.name().to_lowercase() == needle)
            .ok_or_else(|| AstrologiaError::UnknownGroup(s.to_string()))
    }
}
