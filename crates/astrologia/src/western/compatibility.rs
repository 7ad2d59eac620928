//! Sign compatibility scoring.
//!
//! Tiers are tried in order and the first match wins: identical signs, same
//! element, complementary elements, challenging elements, then a neutral
//! fallback. The element pair tables are unordered, so the score is symmetric.

use crate::western::groups::Element;
use crate::western::signs::{lookup_sign_by_name, Sign};
use serde::{Deserialize, Serialize};

const COMPLEMENTARY: [(Element, Element); 2] = [
    (Element::Fire, Element::Air),
    (Element::Earth, Element::Water),
];
const CHALLENGING: [(Element, Element); 2] = [
    (Element::Fire, Element::Water),
    (Element::Earth, Element::Air),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompatibilityTier {
    Identical,
    SameElement,
    Complementary,
    Challenging,
    Neutral,
    NotFound,
}

impl CompatibilityTier {
    /// Affinity level, 0–100.
    pub fn level(self) -> u8 {
        match self {
            Self::Identical => 75,
            Self::SameElement => 90,
            Self::Complementary => 80,
            Self::Challenging => 50,
            Self::Neutral => 65,
            Self::NotFound => 0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Identical => "Mesmo signo: vocês se entendem bem, mas podem ter conflitos de ego.",
            Self::SameElement => "Excelente! Vocês compartilham a mesma energia.",
            Self::Complementary => "Ótima combinação: seus elementos se reforçam.",
            Self::Challenging => "Relação desafiadora, mas com potencial de crescimento.",
            Self::Neutral => "Compatibilidade moderada: exige esforço de ambos.",
            Self::NotFound => "Signo não encontrado.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub level: u8,
    pub tier: CompatibilityTier,
    pub description: String,
}

impl Compatibility {
    fn from_tier(tier: CompatibilityTier) -> Self {
        Self {
            level: tier.level(),
            tier,
            description: tier.description().to_string(),
        }
    }

    /// False for the level-0 sentinel returned when a name did not resolve.
    pub fn is_found(&self) -> bool {
        self.tier != CompatibilityTier::NotFound
    }
}

fn pair_in(table: &[(Element, Element)], a: Element, b: Element) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

fn tier_between(a: Sign, b: Sign) -> CompatibilityTier {
    let (ea, eb) = (a.element(), b.element());
    if a == b {
        CompatibilityTier::Identical
    } else if ea == eb {
        CompatibilityTier::SameElement
    } else if pair_in(&COMPLEMENTARY, ea, eb) {
        CompatibilityTier::Complementary
    } else if pair_in(&CHALLENGING, ea, eb) {
        CompatibilityTier::Challenging
    } else {
        CompatibilityTier::Neutral
    }
}

/// Score two already-resolved signs.
pub fn compatibility_between(a: Sign, b: Sign) -> Compatibility {
    let tier = tier_between(a, b);
    log::debug!("compatibility {} x {}: {:?} ({})", a, b, tier, tier.level());
    Compatibility::from_tier(tier)
}

/// Score two sign names. An unrecognized name yields level 0 with a
/// "not found" description rather than an error; check [`Compatibility::is_found`].
pub fn compatibility(sign_a: &str, sign_b: &str) -> Compatibility {
    match (lookup_sign_by_name(sign_a), lookup_sign_by_name(sign_b)) {
        (Some(a), Some(b)) => compatibility_between(a, b),
        _ => {
            log::warn!("compatibility requested for unknown sign: {:?} / {:?}", sign_a, sign_b);
            Compatibility::from_tier(CompatibilityTier::NotFound)
        }
    }
}
