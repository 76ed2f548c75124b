//! Date labels for message headers
//!
//! `now` is always passed in; nothing here reads the wall clock.

use chrono::{DateTime, Datelike, TimeZone};
use std::fmt::Display;

/// Messages older than this (180 days) from a previous year get a numeric date
const OLD_MESSAGE_SECS: i64 = 15_552_000;

/// Full label, e.g. `8 July 2024 14:05`
pub fn absolute_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-d %B %Y %H:%M").to_string()
}

/// Contextual label relative to `now`:
/// - same calendar day: `14:05`
/// - different year and more than 180 days old: `8/7/2023`
/// - otherwise: `8 Jul`
pub fn relative_label<Tz: TimeZone>(at: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    if at.date_naive() == now.date_naive() {
        return at.format("%H:%M").to_string();
    }

    let elapsed = now.timestamp() - at.timestamp();
    if at.year() != now.year() && elapsed > OLD_MESSAGE_SECS {
        at.format("%-d/%-m/%Y").to_string()
    } else {
        at.format("%-d %b").to_string()
    }
}
