//! Date and time utility functions
//!
//! This module provides human-readable formatting for deletion timestamps,
//! e.g. "yesterday at 09:05" or "Jan 15 at 10:00".

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc, Weekday};

/// Date format used for plain (non-relative) dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format appended to every formatted timestamp
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Describe `date` relative to `today`
///
/// # Arguments
/// * `date` - The date to describe
/// * `today` - Reference date, normally the current local date
///
/// # Returns
/// * `String` - "today", "yesterday", "last Friday", "12 days ago", "Jan 15"
///   or "Jan 15, 2024" when the year differs
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Format a timestamp in the given timezone as "<date> at <time>"
///
/// With `relative` set the date part goes through [`format_relative_date`],
/// otherwise `date_format` is used verbatim.
pub fn format_datetime_in<Tz: TimeZone>(
    at: DateTime<Utc>,
    tz: &Tz,
    today: NaiveDate,
    date_format: &str,
    time_format: &str,
    relative: bool,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = at.with_timezone(tz);
    let date = if relative {
        format_relative_date(local.date_naive(), today)
    } else {
        local.format(date_format).to_string()
    };

    format!("{} at {}", date, local.format(time_format))
}

/// Format a timestamp in local time relative to the current local date
pub fn format_human_datetime(at: DateTime<Utc>, date_format: &str, time_format: &str, relative: bool) -> String {
    let today = Local::now().date_naive();
    format_datetime_in(at, &Local, today, date_format, time_format, relative)
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
