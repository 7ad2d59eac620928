use astrologia::western::{resolve_sign, Element, Modality, Sign, ZODIAC};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_every_day_of_a_leap_year_has_exactly_one_sign() {
    let mut day = ymd(2024, 1, 1);
    let end = ymd(2024, 12, 31);
    while day <= end {
        let md = astrologia::MonthDay::of(&day);
        let owners: Vec<Sign> = ZODIAC.iter().filter(|i| i.contains(md)).map(|i| i.sign).collect();
        assert_eq!(owners.len(), 1, "{} owned by {:?}", day, owners);

        let sign = resolve_sign(&day).expect("every day resolves");
        assert_eq!(sign, owners[0]);
        day += Duration::days(1);
    }
}

#[test]
fn test_range_boundaries() {
    for info in ZODIAC.iter() {
        let start = ymd(2023, info.start.month, info.start.day);
        let end = ymd(2023, info.end.month, info.end.day);
        assert_eq!(resolve_sign(&start), Some(info.sign), "start of {}", info.name);
        assert_eq!(resolve_sign(&end), Some(info.sign), "end of {}", info.name);

        let before = start - Duration::days(1);
        let after = end + Duration::days(1);
        assert_ne!(resolve_sign(&before), Some(info.sign), "day before {}", info.name);
        assert_ne!(resolve_sign(&after), Some(info.sign), "day after {}", info.name);
    }
}

#[test]
fn test_ranges_are_contiguous() {
    // Capricórnio's end lies in January of the same table year, so no pair crosses a year.
    for idx in 0..12 {
        let current = &ZODIAC[idx];
        let next = &ZODIAC[(idx + 1) % 12];
        let end = ymd(2023, current.end.month, current.end.day);
        let next_start = ymd(2023, next.start.month, next.start.day);
        assert_eq!(next_start, end + Duration::days(1), "{} -> {}", current.name, next.name);
    }
}

#[test]
fn test_year_is_ignored() {
    for year in [1900, 1990, 2000, 2024, 2100] {
        assert_eq!(resolve_sign(&ymd(year, 3, 21)), Some(Sign::Aries));
        assert_eq!(resolve_sign(&ymd(year, 1, 1)), Some(Sign::Capricorn));
    }
}

#[test]
fn test_named_dates() {
    assert_eq!(resolve_sign(&ymd(1990, 3, 21)).map(|s| s.name()), Some("Áries"));
    assert_eq!(resolve_sign(&ymd(1990, 1, 1)).map(|s| s.name()), Some("Capricórnio"));
    assert_eq!(resolve_sign(&ymd(1990, 12, 22)), Some(Sign::Capricorn));
    assert_eq!(resolve_sign(&ymd(1991, 1, 19)), Some(Sign::Capricorn));
    assert_eq!(resolve_sign(&ymd(2024, 2, 29)), Some(Sign::Pisces));
}

#[test]
fn test_elements_partition_signs() {
    let mut seen = HashSet::new();
    for element in Element::ALL {
        let signs = element.signs();
        assert_eq!(signs.len(), 3);
        for sign in signs {
            assert_eq!(sign.element(), element, "{} listed under {}", sign, element);
            assert!(seen.insert(*sign), "{} in two elements", sign);
        }
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn test_modalities_partition_signs() {
    let mut seen = HashSet::new();
    for modality in Modality::ALL {
        let signs = modality.signs();
        assert_eq!(signs.len(), 4);
        for sign in signs {
            assert_eq!(sign.modality(), modality, "{} listed under {}", sign, modality);
            assert!(seen.insert(*sign), "{} in two modalities", sign);
        }
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn test_names_are_unique() {
    let names: HashSet<&str> = ZODIAC.iter().map(|i| i.name).collect();
    assert_eq!(names.len(), 12);
    let glyphs: HashSet<&str> = ZODIAC.iter().map(|i| i.glyph).collect();
    assert_eq!(glyphs.len(), 12);
}
