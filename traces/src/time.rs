//! Commit and deployment time labels.
//!
//! DESIGN
//! ======
//! All functions take `now` explicitly so labels are a pure function of the
//! timestamp and the render clock. The `*_now` wrappers read the local clock
//! for the views.
//!
//! Timestamps arrive as epoch seconds; they are widened to milliseconds
//! before conversion so sub-second precision is never implied.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, Months, TimeZone};

use crate::display::MISSING_VALUE;

/// Past this many whole months a same-year commit shows its date instead of a
/// relative phrase.
pub const RELATIVE_MONTHS_LIMIT: i64 = 1;

const SHORT_DATE_FORMAT: &str = "%b %-d";
const DATE_FORMAT: &str = "%b %-d, %Y";
const FULL_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Converts epoch seconds to a date in `tz`.
///
/// Returns `None` when the value is outside the representable range.
#[must_use]
pub fn from_epoch_seconds<Tz: TimeZone>(seconds: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    let millis = seconds.checked_mul(1000)?;
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(tz))
}

/// Header label for a commit time.
///
/// A commit from another year shows `Mon D, YYYY`; a same-year commit older
/// than [`RELATIVE_MONTHS_LIMIT`] whole months shows `Mon D`; anything newer
/// gets a relative phrase. Absent timestamps render as `-`.
#[must_use]
pub fn format_commit_time<Tz>(commit_timestamp: Option<i64>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(date) = commit_timestamp.and_then(|secs| from_epoch_seconds(secs, &now.timezone())) else {
        return MISSING_VALUE.to_owned();
    };

    if date.year() != now.year() {
        return date.format(DATE_FORMAT).to_string();
    }
    if whole_months_between(now, &date) > RELATIVE_MONTHS_LIMIT {
        return date.format(SHORT_DATE_FORMAT).to_string();
    }
    relative_phrase(&date, now)
}

/// Full absolute label (`Mon D, YYYY h:mm AM`) used as hover text.
#[must_use]
pub fn format_commit_time_full<Tz>(commit_timestamp: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    commit_timestamp
        .and_then(|secs| from_epoch_seconds(secs, tz))
        .map_or_else(|| MISSING_VALUE.to_owned(), |date| date.format(FULL_FORMAT).to_string())
}

/// [`format_commit_time`] against the local clock.
#[must_use]
pub fn format_commit_time_now(commit_timestamp: Option<i64>) -> String {
    format_commit_time(commit_timestamp, &Local::now())
}

/// [`format_commit_time_full`] in the local time zone.
#[must_use]
pub fn format_commit_time_full_local(commit_timestamp: Option<i64>) -> String {
    format_commit_time_full(commit_timestamp, &Local)
}

/// Relative phrase for an epoch-seconds value against the local clock, or `-`.
#[must_use]
pub fn relative_label_now(timestamp: Option<i64>) -> String {
    let now = Local::now();
    timestamp
        .and_then(|secs| from_epoch_seconds(secs, &Local))
        .map_or_else(|| MISSING_VALUE.to_owned(), |date| relative_phrase(&date, &now))
}

/// Whole calendar months from `then` to `now`, truncated toward zero.
///
/// Positive when `then` is in the past. Month `n` counts once `now` reaches
/// `then + n months`, clamped to the end of a shorter month (Jul 31 + 2
/// months is Sep 30).
#[must_use]
pub fn whole_months_between<Tz: TimeZone>(now: &DateTime<Tz>, then: &DateTime<Tz>) -> i64 {
    if now < then {
        return -whole_months_between(then, now);
    }
    let (months, _) = month_anchor(now, then);
    months
}

/// Fractional calendar months from `then` to `now`: whole months plus the
/// elapsed share of the month that follows the last anchor.
#[must_use]
pub fn months_between<Tz: TimeZone>(now: &DateTime<Tz>, then: &DateTime<Tz>) -> f64 {
    if now < then {
        return -months_between(then, now);
    }
    let (months, anchor) = month_anchor(now, then);
    let next = u32::try_from(months + 1)
        .ok()
        .and_then(|n| then.clone().checked_add_months(Months::new(n)));
    #[allow(clippy::cast_precision_loss)]
    let fraction = match (anchor, next) {
        (Some(anchor), Some(next)) => {
            let elapsed = now.clone().signed_duration_since(&anchor).num_milliseconds();
            let span = next.signed_duration_since(&anchor).num_milliseconds();
            if span > 0 { elapsed as f64 / span as f64 } else { 0.0 }
        }
        _ => 0.0,
    };
    #[allow(clippy::cast_precision_loss)]
    let whole = months as f64;
    whole + fraction
}

/// Largest `n` with `then + n months <= now`, and that anchor. Requires
/// `then <= now`.
fn month_anchor<Tz: TimeZone>(now: &DateTime<Tz>, then: &DateTime<Tz>) -> (i64, Option<DateTime<Tz>>) {
    let add = |n: i64| {
        u32::try_from(n)
            .ok()
            .and_then(|n| then.clone().checked_add_months(Months::new(n)))
    };
    let mut months = i64::from(now.year() - then.year()) * 12 + i64::from(now.month()) - i64::from(then.month());
    let mut anchor = add(months);
    while months > 0 && anchor.as_ref().is_none_or(|a| a > now) {
        months -= 1;
        anchor = add(months);
    }
    (months, anchor)
}

/// Human phrase for the distance between `then` and `now`
/// (`a few seconds ago`, `3 hours ago`, `in 2 days`).
#[must_use]
pub fn relative_phrase<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let delta = now.clone().signed_duration_since(then);
    let in_past = delta.num_milliseconds() >= 0;
    let months = months_between(now, then).abs();
    let distance = distance_phrase(delta.num_milliseconds().abs(), months);
    if in_past {
        format!("{distance} ago")
    } else {
        format!("in {distance}")
    }
}

/// Unsigned distance phrase. Each unit is the distance rounded half up in
/// that unit; months and years come from the calendar month difference.
fn distance_phrase(millis: i64, months: f64) -> String {
    let secs = round_div(millis, MILLIS_PER_SECOND);
    if secs <= 44 {
        return "a few seconds".to_owned();
    }
    if secs <= 89 {
        return "a minute".to_owned();
    }
    let minutes = round_div(millis, MILLIS_PER_MINUTE);
    if minutes <= 44 {
        return format!("{minutes} minutes");
    }
    if minutes <= 89 {
        return "an hour".to_owned();
    }
    let hours = round_div(millis, MILLIS_PER_HOUR);
    if hours <= 21 {
        return format!("{hours} hours");
    }
    if hours <= 35 {
        return "a day".to_owned();
    }
    let days = round_div(millis, MILLIS_PER_DAY);
    if days <= 25 {
        return format!("{days} days");
    }
    if days <= 45 {
        return "a month".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let rounded_months = months.round() as i64;
    if rounded_months <= 10 {
        return format!("{} months", rounded_months.max(2));
    }
    if rounded_months <= 17 {
        return "a year".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let years = (months / 12.0).round() as i64;
    format!("{} years", years.max(2))
}

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}
