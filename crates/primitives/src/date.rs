//! Calendar date helpers.

use chrono::{Datelike, Duration};

use crate::Date;

/// Day formats accepted in the date column, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a calendar-day string.
///
/// Accepts ISO 8601 days (`2024-01-05`), slash-separated ISO days and US
/// `month/day/year` days. A trailing time component after `T` is ignored.
#[must_use]
pub fn parse_date(s: &str) -> Option<Date> {
    let trimmed = s.trim();
    let day = trimmed.split_once('T').map_or(trimmed, |(day, _)| day);

    DATE_FORMATS.iter().find_map(|fmt| Date::parse_from_str(day, fmt).ok())
}

/// The local calendar date.
#[must_use]
pub fn today() -> Date {
    chrono::Local::now().date_naive()
}

/// The Sunday on or before `date`.
#[must_use]
pub fn week_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}
