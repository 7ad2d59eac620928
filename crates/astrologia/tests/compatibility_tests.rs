use astrologia::western::{compatibility, compatibility_between, CompatibilityTier, Sign};

#[test]
fn test_compatibility_is_symmetric() {
    for a in Sign::ALL {
        for b in Sign::ALL {
            assert_eq!(
                compatibility(a.name(), b.name()),
                compatibility(b.name(), a.name()),
                "{} x {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_identical_signs_score_75() {
    for sign in Sign::ALL {
        let result = compatibility(sign.name(), sign.name());
        assert_eq!(result.level, 75, "{}", sign);
        assert_eq!(result.tier, CompatibilityTier::Identical);
    }
}

#[test]
fn test_aries_scenarios() {
    assert_eq!(compatibility("Áries", "Leão").level, 90);
    assert_eq!(compatibility("Áries", "Libra").level, 80);
    assert_eq!(compatibility("Áries", "Câncer").level, 50);
    assert_eq!(compatibility("Áries", "Touro").level, 65);
}

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(compatibility("áries", "LEÃO"), compatibility("Áries", "Leão"));
    assert_eq!(compatibility("aries", "leo").level, 90);
}

#[test]
fn test_unknown_names_are_reported_not_scored() {
    for (a, b) in [("Áries", "Serpentário"), ("", "Leão"), ("x", "y")] {
        let result = compatibility(a, b);
        assert_eq!(result.level, 0);
        assert!(!result.is_found());
    }
}

#[test]
fn test_tier_counts_over_all_pairs() {
    // 6 ordered pairs inside each element; 18 for each cross-element pair,
    // and every cross tier covers two element pairs.
    let mut counts = std::collections::HashMap::new();
    for a in Sign::ALL {
        for b in Sign::ALL {
            *counts.entry(compatibility_between(a, b).tier).or_insert(0) += 1;
        }
    }
    assert_eq!(counts[&CompatibilityTier::Identical], 12);
    assert_eq!(counts[&CompatibilityTier::SameElement], 24);
    assert_eq!(counts[&CompatibilityTier::Complementary], 36);
    assert_eq!(counts[&CompatibilityTier::Challenging], 36);
    assert_eq!(counts[&CompatibilityTier::Neutral], 36);
}

#[test]
fn test_opposite_signs_are_complementary() {
    for sign in Sign::ALL {
        assert_eq!(
            compatibility_between(sign, sign.opposite()).tier,
            CompatibilityTier::Complementary,
            "{} x {}",
            sign,
            sign.opposite()
        );
    }
}
