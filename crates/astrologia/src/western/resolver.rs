//! Date → sign resolution.

use crate::date::MonthDay;
use crate::western::signs::{Sign, ZODIAC};
use chrono::Datelike;

/// Return the sign whose range contains the date. Only month and day are read.
///
/// `None` means the zodiac table has a gap, which the table tests rule out.
pub fn resolve_sign<D: Datelike>(date: &D) -> Option<Sign> {
    resolve_month_day(MonthDay::of(date))
}

/// Like [`resolve_sign`] for callers holding a bare month/day pair.
/// Pairs that name no calendar day (e.g. 02-30) resolve to `None`.
pub fn resolve_sign_from_month_day(month: u32, day: u32) -> Option<Sign> {
    let md = MonthDay::new(month, day);
    if !md.is_valid() {
        log::debug!("rejecting invalid month/day {:02}-{:02}", month, day);
        return None;
    }
    resolve_month_day(md)
}

fn resolve_month_day(md: MonthDay) -> Option<Sign> {
    let found = ZODIAC.iter().find(|info| info.contains(md)).map(|info| info.sign);
    if found.is_none() {
        log::warn!("no zodiac sign covers {:02}-{:02}", md.month, md.day);
    }
    found
}
