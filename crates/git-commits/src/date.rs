// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Date normalization for `since`/`until` bounds
//!
//! Bounds are either absolute instants or free-form expressions such as
//! `2023-01-01`, `yesterday`, `3 weeks ago` or `Jan 5 2023`. Expressions
//! without an explicit offset are interpreted in a caller-supplied IANA
//! timezone, and every bound is reduced to a UTC instant before filtering.

use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::error::DateError;

/// Naive date-time layouts, tried in order
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%b %d %Y %H:%M",
    "%b %d, %Y %H:%M",
];

/// Naive date layouts (midnight in the interpreting timezone)
///
/// `%b` also accepts full month names when parsing.
const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d %b, %Y",
];

/// Date layouts with a two-digit year: 00-69 is 20xx, 70-99 is 19xx
const TWO_DIGIT_YEAR_FORMATS: &[&str] = &["%m/%d/%y", "%b %d %y", "%b %d, %y", "%d %b %y"];

/// Month and day only, completed with the current year
const MONTH_DAY_FORMATS: &[&str] = &["%b %d %Y", "%d %b %Y"];

/// Layouts that carry their own UTC offset
///
/// `%#z` also accepts `Z` and offsets without minutes.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%d %H:%M %#z",
    "%Y-%m-%dT%H:%M%#z",
    "%a %b %e %H:%M:%S %Y %z",
];

/// Times of day accepted after `today`, `yesterday` or `tomorrow`
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M %p"];

/// A `since` or `until` bound as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    /// An absolute, already timezone-aware instant
    Instant(DateTime<Utc>),
    /// A date expression interpreted at query time
    Expression(String),
}

impl DateBound {
    /// Resolve the bound to a UTC instant
    ///
    /// Expressions are interpreted in `tz`, with relative forms anchored at `now`.
    ///
    /// # Errors
    ///
    /// Returns `DateError` if the expression cannot be parsed.
    pub fn resolve(&self, tz: Tz, now: DateTime<Utc>) -> Result<DateTime<Utc>, DateError> {
        match self {
            Self::Instant(at) => Ok(*at),
            Self::Expression(expr) => {
                parse_date_string(expr, tz, now).map(|dt| dt.with_timezone(&Utc))
            }
        }
    }
}

impl From<&str> for DateBound {
    fn from(expr: &str) -> Self {
        Self::Expression(expr.to_string())
    }
}

impl From<String> for DateBound {
    fn from(expr: String) -> Self {
        Self::Expression(expr)
    }
}

impl<T: TimeZone> From<DateTime<T>> for DateBound {
    fn from(at: DateTime<T>) -> Self {
        Self::Instant(at.with_timezone(&Utc))
    }
}

/// Look up an IANA timezone by name
///
/// # Errors
///
/// Returns `DateError::InvalidTimezone` for names outside the tz database.
pub fn parse_timezone(name: &str) -> Result<Tz, DateError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DateError::InvalidTimezone {
            name: name.to_string(),
        })
}

/// Parse a date expression into an instant in `tz`
///
/// # Errors
///
/// Returns `DateError::Unparseable` if no supported form matches, or
/// `DateError::OutOfRange` if the result cannot be represented.
pub fn parse_date_string(
    input: &str,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<DateTime<Tz>, DateError> {
    let raw = input.trim();
    let expr = raw.to_lowercase();
    if expr.is_empty() {
        return Err(DateError::unparseable(input));
    }
    let now = now.with_timezone(&tz);
    let out_of_range = || DateError::out_of_range(input);

    match expr.as_str() {
        "now" => return Ok(now),
        "today" => return on_day(&tz, &now, 0, NaiveTime::MIN).ok_or_else(out_of_range),
        "yesterday" => return shift(&now, -1, Unit::Day).ok_or_else(out_of_range),
        "tomorrow" => return shift(&now, 1, Unit::Day).ok_or_else(out_of_range),
        _ => {}
    }

    if let Some((days, time)) = parse_day_and_time(&expr) {
        return on_day(&tz, &now, days, time).ok_or_else(out_of_range);
    }

    if let Some((amount, unit)) = parse_relative(&expr) {
        return shift(&now, amount, unit).ok_or_else(out_of_range);
    }

    if let Some(days) = parse_weekday(&expr, now.weekday()) {
        return shift(&now, days, Unit::Day).ok_or_else(out_of_range);
    }

    // Compact durations such as `1h 30m ago`; a bare duration means the past
    let span = expr.strip_suffix("ago").unwrap_or(&expr).trim();
    if span.ends_with(|c: char| c.is_ascii_alphabetic()) {
        if let Ok(duration) = humantime::parse_duration(span) {
            return TimeDelta::from_std(duration)
                .ok()
                .and_then(|delta| now.clone().checked_sub_signed(delta))
                .ok_or_else(out_of_range);
        }
    }

    if let Some(seconds) = expr.strip_prefix('@') {
        let seconds: i64 = seconds.parse().map_err(|_| DateError::unparseable(input))?;
        return DateTime::from_timestamp(seconds, 0)
            .map(|at| at.with_timezone(&tz))
            .ok_or_else(out_of_range);
    }

    if let Some(at) = parse_with_offset(raw) {
        return Ok(at.with_timezone(&tz));
    }

    if let Some(naive) = parse_naive(raw, now.year()) {
        return localize(&tz, naive).ok_or_else(out_of_range);
    }

    Err(DateError::unparseable(input))
}

/// Calendar units accepted in relative expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

impl Unit {
    fn parse(word: &str) -> Option<Self> {
        let singular = word
            .strip_suffix('s')
            .filter(|w| !w.is_empty())
            .unwrap_or(word);
        match singular {
            "s" | "sec" | "second" => Some(Self::Second),
            "min" | "minute" => Some(Self::Minute),
            "h" | "hr" | "hour" => Some(Self::Hour),
            "d" | "day" => Some(Self::Day),
            "w" | "wk" | "week" => Some(Self::Week),
            "fortnight" => Some(Self::Fortnight),
            "mo" | "mon" | "month" => Some(Self::Month),
            "y" | "yr" | "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Fixed length in seconds; `None` for calendar units
    fn seconds(self) -> Option<i64> {
        match self {
            Self::Second => Some(1),
            Self::Minute => Some(60),
            Self::Hour => Some(3_600),
            Self::Day => Some(86_400),
            Self::Week => Some(7 * 86_400),
            Self::Fortnight => Some(14 * 86_400),
            Self::Month | Self::Year => None,
        }
    }
}

/// Recognise `N unit ago`, `in N unit`, `last unit`, `next unit` and `N unit`
fn parse_relative(expr: &str) -> Option<(i64, Unit)> {
    let words: Vec<&str> = expr.split_whitespace().collect();
    match words.as_slice() {
        [amount, unit, "ago"] => Some((-parse_amount(amount)?, Unit::parse(unit)?)),
        ["in", amount, unit] => Some((parse_amount(amount)?, Unit::parse(unit)?)),
        ["last", unit] => Some((-1, Unit::parse(unit)?)),
        ["next", unit] => Some((1, Unit::parse(unit)?)),
        [amount, unit] => Some((-parse_amount(amount)?, Unit::parse(unit)?)),
        _ => None,
    }
}

/// Days from `today` to the previous or following weekday in `last monday`,
/// `next fri`
///
/// The same weekday is a full week away in either direction.
fn parse_weekday(expr: &str, today: Weekday) -> Option<i64> {
    let words: Vec<&str> = expr.split_whitespace().collect();
    let [direction, name] = words.as_slice() else {
        return None;
    };
    let target: Weekday = name.parse().ok()?;
    let from = i64::from(today.num_days_from_monday());
    let to = i64::from(target.num_days_from_monday());
    match *direction {
        "last" => Some(-((from - to - 1).rem_euclid(7) + 1)),
        "next" => Some((to - from - 1).rem_euclid(7) + 1),
        _ => None,
    }
}

/// `today 09:00`, `yesterday 10:30`, `tomorrow 5:00 pm`
fn parse_day_and_time(expr: &str) -> Option<(i64, NaiveTime)> {
    let (day, time) = expr.split_once(char::is_whitespace)?;
    let days = match day {
        "today" => 0,
        "yesterday" => -1,
        "tomorrow" => 1,
        _ => return None,
    };
    let time = time.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())
        .map(|time| (days, time))
}

fn parse_amount(word: &str) -> Option<i64> {
    match word {
        "a" | "an" | "one" => Some(1),
        _ => word.parse::<i64>().ok().filter(|n| *n >= 0),
    }
}

fn shift(now: &DateTime<Tz>, amount: i64, unit: Unit) -> Option<DateTime<Tz>> {
    if let Some(seconds) = unit.seconds() {
        let delta = TimeDelta::try_seconds(amount.checked_mul(seconds)?)?;
        return now.clone().checked_add_signed(delta);
    }
    let months = if unit == Unit::Year {
        amount.checked_mul(12)?
    } else {
        amount
    };
    let span = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        now.clone().checked_add_months(span)
    } else {
        now.clone().checked_sub_months(span)
    }
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_FORMATS.iter().find_map(|fmt| {
            DateTime::parse_from_str(raw, fmt)
                .ok()
                .filter(|at| writes_year(raw, at.year(), false))
        })
    })
}

fn parse_naive(raw: &str, current_year: i32) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDateTime::parse_from_str(raw, fmt)
                .ok()
                .filter(|at| writes_year(raw, at.year(), false))
        })
        .or_else(|| {
            parse_naive_date(raw, current_year).and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_naive_date(raw: &str, current_year: i32) -> Option<NaiveDate> {
    let with_year = |formats: &[&str], two_digit: bool| {
        formats.iter().find_map(|fmt| {
            NaiveDate::parse_from_str(raw, fmt)
                .ok()
                .filter(|date| writes_year(raw, date.year(), two_digit))
        })
    };
    if let Some(date) = with_year(NAIVE_DATE_FORMATS, false) {
        return Some(date);
    }
    if let Some(date) = parse_month_year(raw) {
        return Some(date);
    }
    if let Some(date) = with_year(TWO_DIGIT_YEAR_FORMATS, true) {
        return Some(date);
    }
    let dated = format!("{raw} {current_year}");
    MONTH_DAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&dated, fmt).ok())
}

/// `Jan 2023`, `January 2023` or `2023-01`: the first of the month
fn parse_month_year(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %b %Y")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-1"), "%Y-%m-%d"))
        .ok()
        .filter(|date| writes_year(raw, date.year(), false))
}

/// Whether `raw` spells `year` out as its own run of digits
///
/// chrono's `%Y` accepts one to four digits, so `Jan 2023` would otherwise
/// match `%b %d %Y` as January 20 of year 23.
fn writes_year(raw: &str, year: i32, two_digit: bool) -> bool {
    let expected = if two_digit {
        format!("{:02}", year.rem_euclid(100))
    } else {
        format!("{year:04}")
    };
    raw.split(|c: char| !c.is_ascii_digit()).any(|run| run == expected)
}

/// `days` from the local date of `now`, at `time` in `tz`
fn on_day(tz: &Tz, now: &DateTime<Tz>, days: i64, time: NaiveTime) -> Option<DateTime<Tz>> {
    let date = now.date_naive().checked_add_signed(TimeDelta::try_days(days)?)?;
    localize(tz, date.and_time(time))
}

/// Attach `tz` to a wall-clock time
///
/// Folded times resolve to the earlier instant; times inside a DST gap are
/// moved forward by an hour.
fn localize(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn parse_utc(expr: &str, tz: &str) -> DateTime<Utc> {
        let tz = parse_timezone(tz).expect("timezone");
        parse_date_string(expr, tz, now())
            .unwrap_or_else(|e| panic!("{expr}: {e}"))
            .with_timezone(&Utc)
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_utc("now", "UTC"), now());
        assert_eq!(parse_utc("  NOW ", "UTC"), now());
        assert_eq!(parse_utc("yesterday", "UTC"), utc(2024, 3, 14, 12, 0));
        assert_eq!(parse_utc("tomorrow", "UTC"), utc(2024, 3, 16, 12, 0));
        assert_eq!(parse_utc("today", "UTC"), utc(2024, 3, 15, 0, 0));
    }

    #[test]
    fn test_today_uses_local_midnight() {
        // 2024-03-15 is after the US switch to EDT (UTC-4)
        assert_eq!(
            parse_utc("today", "America/New_York"),
            utc(2024, 3, 15, 4, 0)
        );
    }

    #[test]
    fn test_relative_ago() {
        assert_eq!(parse_utc("2 days ago", "UTC"), utc(2024, 3, 13, 12, 0));
        assert_eq!(parse_utc("3 weeks ago", "UTC"), utc(2024, 2, 23, 12, 0));
        assert_eq!(parse_utc("1 month ago", "UTC"), utc(2024, 2, 15, 12, 0));
        assert_eq!(parse_utc("2 years ago", "UTC"), utc(2022, 3, 15, 12, 0));
        assert_eq!(parse_utc("an hour ago", "UTC"), utc(2024, 3, 15, 11, 0));
        assert_eq!(parse_utc("90 minutes ago", "UTC"), utc(2024, 3, 15, 10, 30));
        assert_eq!(parse_utc("1 fortnight ago", "UTC"), utc(2024, 3, 1, 12, 0));
        assert_eq!(parse_utc("5 hrs ago", "UTC"), utc(2024, 3, 15, 7, 0));
    }

    #[test]
    fn test_relative_future_and_last() {
        assert_eq!(parse_utc("in 2 hours", "UTC"), utc(2024, 3, 15, 14, 0));
        assert_eq!(parse_utc("last week", "UTC"), utc(2024, 3, 8, 12, 0));
        assert_eq!(parse_utc("next day", "UTC"), utc(2024, 3, 16, 12, 0));
        assert_eq!(parse_utc("last year", "UTC"), utc(2023, 3, 15, 12, 0));
    }

    #[test]
    fn test_month_arithmetic_clamps_to_month_end() {
        let tz = parse_timezone("UTC").unwrap();
        let end_of_march = utc(2024, 3, 31, 12, 0);
        let got = parse_date_string("1 month ago", tz, end_of_march).unwrap();
        assert_eq!(got.with_timezone(&Utc), utc(2024, 2, 29, 12, 0));
    }

    #[test]
    fn test_compact_durations() {
        assert_eq!(parse_utc("1h 30m ago", "UTC"), utc(2024, 3, 15, 10, 30));
        assert_eq!(parse_utc("2days ago", "UTC"), utc(2024, 3, 13, 12, 0));
    }

    #[test]
    fn test_unix_timestamp() {
        assert_eq!(parse_utc("@0", "Europe/Paris"), utc(1970, 1, 1, 0, 0));
    }

    #[test]
    fn test_naive_dates_use_timezone() {
        assert_eq!(parse_utc("2023-01-01", "UTC"), utc(2023, 1, 1, 0, 0));
        assert_eq!(parse_utc("2023-01-01", "Asia/Tokyo"), utc(2022, 12, 31, 15, 0));
        assert_eq!(parse_utc("2023/01/01 10:30", "UTC"), utc(2023, 1, 1, 10, 30));
        assert_eq!(
            parse_utc("2023-06-01T10:30:00", "Europe/London"),
            utc(2023, 6, 1, 9, 30)
        );
    }

    #[test]
    fn test_locale_phrases() {
        let expected = utc(2023, 1, 5, 0, 0);
        assert_eq!(parse_utc("Jan 5 2023", "UTC"), expected);
        assert_eq!(parse_utc("January 5, 2023", "UTC"), expected);
        assert_eq!(parse_utc("5 January 2023", "UTC"), expected);
        assert_eq!(parse_utc("01/05/2023", "UTC"), expected);
    }

    #[test]
    fn test_month_and_year_is_first_of_month() {
        assert_eq!(parse_utc("Jan 2023", "UTC"), utc(2023, 1, 1, 0, 0));
        assert_eq!(parse_utc("January 2024", "UTC"), utc(2024, 1, 1, 0, 0));
        assert_eq!(parse_utc("2023-07", "UTC"), utc(2023, 7, 1, 0, 0));
    }

    #[test]
    fn test_two_digit_years() {
        let expected = utc(2023, 1, 5, 0, 0);
        assert_eq!(parse_utc("01/05/23", "UTC"), expected);
        assert_eq!(parse_utc("Jan 5 23", "UTC"), expected);
        assert_eq!(parse_utc("5 Jan 23", "UTC"), expected);
        assert_eq!(parse_utc("Jan 5, 23", "UTC"), expected);
        assert_eq!(parse_utc("12/31/99", "UTC"), utc(1999, 12, 31, 0, 0));
    }

    #[test]
    fn test_short_years_never_land_in_antiquity() {
        let tz = parse_timezone("UTC").unwrap();
        for input in ["Jan 2023", "01/05/23", "Jan 5 23", "5 Jan 23", "1/5/2", "23-01-05"] {
            if let Ok(at) = parse_date_string(input, tz, now()) {
                assert!(at.year() >= 1970, "{input} parsed as {at}");
            }
        }
        assert!(parse_date_string("23-01-05", tz, now()).is_err());
    }

    #[test]
    fn test_month_and_day_use_current_year() {
        assert_eq!(parse_utc("January 5", "UTC"), utc(2024, 1, 5, 0, 0));
        assert_eq!(parse_utc("5 Jan", "UTC"), utc(2024, 1, 5, 0, 0));
        // The year is the one current in the interpreting timezone
        let tz = parse_timezone("Asia/Tokyo").unwrap();
        let new_years_eve = utc(2024, 12, 31, 20, 0);
        let got = parse_date_string("Mar 1", tz, new_years_eve).unwrap();
        assert_eq!(got.with_timezone(&Utc), utc(2025, 2, 28, 15, 0));
    }

    #[test]
    fn test_weekdays() {
        // now() is Friday 2024-03-15
        assert_eq!(parse_utc("last monday", "UTC"), utc(2024, 3, 11, 12, 0));
        assert_eq!(parse_utc("next friday", "UTC"), utc(2024, 3, 22, 12, 0));
        assert_eq!(parse_utc("last friday", "UTC"), utc(2024, 3, 8, 12, 0));
        assert_eq!(parse_utc("Next Tue", "UTC"), utc(2024, 3, 19, 12, 0));
        assert_eq!(parse_utc("last sunday", "UTC"), utc(2024, 3, 10, 12, 0));
    }

    #[test]
    fn test_keyword_with_time_of_day() {
        assert_eq!(parse_utc("yesterday 10:00", "UTC"), utc(2024, 3, 14, 10, 0));
        assert_eq!(parse_utc("today 09:30:00", "UTC"), utc(2024, 3, 15, 9, 30));
        assert_eq!(parse_utc("tomorrow 5:00 pm", "UTC"), utc(2024, 3, 16, 17, 0));
        assert_eq!(
            parse_utc("yesterday 10:00", "America/New_York"),
            utc(2024, 3, 14, 14, 0)
        );
    }

    #[test]
    fn test_bare_duration_means_past() {
        assert_eq!(parse_utc("2 days", "UTC"), utc(2024, 3, 13, 12, 0));
        assert_eq!(parse_utc("3 weeks", "UTC"), utc(2024, 2, 23, 12, 0));
        assert_eq!(parse_utc("1h 30m", "UTC"), utc(2024, 3, 15, 10, 30));
    }

    #[test]
    fn test_iso_with_minutes_and_zulu() {
        assert_eq!(
            parse_utc("2023-01-01T10:00Z", "Asia/Tokyo"),
            utc(2023, 1, 1, 10, 0)
        );
        assert_eq!(
            parse_utc("2023-01-01T10:00+02:00", "UTC"),
            utc(2023, 1, 1, 8, 0)
        );
        assert_eq!(
            parse_utc("2023-01-01 10:00 -05", "UTC"),
            utc(2023, 1, 1, 15, 0)
        );
        assert_eq!(
            parse_utc("2023-01-01 10:00:00Z", "Europe/Paris"),
            utc(2023, 1, 1, 10, 0)
        );
    }

    #[test]
    fn test_explicit_offset_wins_over_timezone() {
        assert_eq!(
            parse_utc("2023-01-01T10:00:00+02:00", "Asia/Tokyo"),
            utc(2023, 1, 1, 8, 0)
        );
        assert_eq!(
            parse_utc("2023-01-01 10:00:00 -0500", "UTC"),
            utc(2023, 1, 1, 15, 0)
        );
        assert_eq!(
            parse_utc("Sun Jan 1 10:00:00 2023 +0100", "UTC"),
            utc(2023, 1, 1, 9, 0)
        );
    }

    #[test]
    fn test_result_is_in_requested_timezone() {
        let tz = parse_timezone("Asia/Tokyo").unwrap();
        let got = parse_date_string("2023-01-01T00:00:00Z", tz, now()).unwrap();
        assert_eq!(got.timezone(), tz);
        assert_eq!(got.to_rfc3339(), "2023-01-01T09:00:00+09:00");
    }

    #[test]
    fn test_dst_gap_moves_forward() {
        // 02:30 does not exist on 2024-03-10 in New York
        assert_eq!(
            parse_utc("2024-03-10 02:30", "America/New_York"),
            utc(2024, 3, 10, 7, 30)
        );
    }

    #[test]
    fn test_dst_fold_takes_earlier_instant() {
        // 01:30 happens twice on 2024-11-03 in New York
        assert_eq!(
            parse_utc("2024-11-03 01:30", "America/New_York"),
            utc(2024, 11, 3, 5, 30)
        );
    }

    #[test]
    fn test_unparseable() {
        let tz = parse_timezone("UTC").unwrap();
        for input in ["", "   ", "not a date", "5 parsecs ago", "-3 days ago", "@soon"] {
            let err = parse_date_string(input, tz, now()).unwrap_err();
            assert_eq!(
                err,
                DateError::Unparseable {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let tz = parse_timezone("UTC").unwrap();
        let err = parse_date_string("@99999999999999999", tz, now()).unwrap_err();
        assert!(matches!(err, DateError::OutOfRange { .. }));
    }

    #[test]
    fn test_invalid_timezone() {
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidTimezone {
                name: "Mars/Olympus_Mons".to_string()
            }
        );
        assert!(parse_timezone("America/New_York").is_ok());
    }

    #[test]
    fn test_bound_from_aware_datetime() {
        let offset = chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        let bound = DateBound::from(at);
        let tz = parse_timezone("UTC").unwrap();
        assert_eq!(bound.resolve(tz, now()).unwrap(), utc(2023, 5, 1, 9, 0));
    }

    #[test]
    fn test_bound_from_expression() {
        let bound = DateBound::from("yesterday");
        assert_eq!(bound, DateBound::Expression("yesterday".to_string()));
        let tz = parse_timezone("UTC").unwrap();
        assert_eq!(bound.resolve(tz, now()).unwrap(), utc(2024, 3, 14, 12, 0));
    }
}
