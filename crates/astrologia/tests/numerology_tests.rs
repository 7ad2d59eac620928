use astrologia::numerology::{
    is_master_number, number_meaning, personal_number, personal_year_meaning, personal_year_number,
    reduce_number,
};
use chrono::{Duration, NaiveDate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn in_personal_domain(n: u32) -> bool {
    (1..=9).contains(&n) || is_master_number(n)
}

#[test]
fn test_domains_over_many_dates() {
    let mut day = ymd(1900, 1, 1);
    let end = ymd(2030, 12, 31);
    while day <= end {
        let n = personal_number(&day);
        assert!(in_personal_domain(n), "{} -> {}", day, n);
        let y = personal_year_number(&day, Some(2026));
        assert!((1..=9).contains(&y), "{} -> {}", day, y);
        day += Duration::days(13);
    }
}

#[test]
fn test_master_numbers_stop_reduction() {
    // 2009 -> 11
    assert_eq!(personal_number(&ymd(1990, 7, 12)), 11);
    // 1993 -> 22
    assert_eq!(personal_number(&ymd(1970, 8, 15)), 22);
    // 29 -> 11 stops; 38 -> 11 stops
    assert_eq!(reduce_number(29, true), 11);
    assert_eq!(reduce_number(38, true), 11);
    assert_eq!(reduce_number(6999, true), 33);
    assert_eq!(reduce_number(4990, true), 22);
}

#[test]
fn test_non_master_two_digit_values_keep_reducing() {
    for value in 10..=99u32 {
        let reduced = reduce_number(value, true);
        if is_master_number(value) {
            assert_eq!(reduced, value);
        } else {
            assert!(in_personal_domain(reduced), "{} -> {}", value, reduced);
            assert_ne!(reduced, value);
        }
    }
}

#[test]
fn test_year_number_never_keeps_master() {
    for value in [11, 22, 33, 29, 6999] {
        assert!((1..=9).contains(&reduce_number(value, false)));
    }
    // 12 + 7 + 1990 = 2009 -> 11 -> 2
    assert_eq!(personal_year_number(&ymd(2001, 7, 12), Some(1990)), 2);
}

#[test]
fn test_personal_year_depends_only_on_day_month_and_target_year() {
    let a = personal_year_number(&ymd(1950, 5, 17), Some(2026));
    let b = personal_year_number(&ymd(2005, 5, 17), Some(2026));
    assert_eq!(a, b);
}

#[test]
fn test_every_reachable_number_has_meaning() {
    for n in [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
        assert_eq!(number_meaning(n).number, n);
        assert!(!number_meaning(n).title.is_empty());
        assert!(!number_meaning(n).description.is_empty());
    }
    for n in 1..=9 {
        assert_eq!(personal_year_meaning(n).year, n);
        assert!(!personal_year_meaning(n).theme.is_empty());
    }
}

#[test]
fn test_meaning_fallbacks() {
    assert_eq!(number_meaning(12).number, 9);
    assert_eq!(number_meaning(u32::MAX).number, 9);
    assert_eq!(personal_year_meaning(10).year, 1);
    assert_eq!(personal_year_meaning(33).year, 1);
}
