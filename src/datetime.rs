//! Epoch-second date/time arithmetic and fixed-format conversion.
//!
//! Timestamps are seconds since the Unix epoch. Calendar arithmetic and
//! the text formats interpret them in the host's local timezone.

use chrono::{DateTime, Days, Local, LocalResult, Months, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{Error, Result};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current epoch seconds.
pub fn now() -> i64 {
    Local::now().timestamp()
}

/// `ts` shifted forward by exactly `minutes * 60` seconds.
pub fn add_minutes(ts: i64, minutes: i64) -> i64 {
    ts + minutes * 60
}

/// `ts` shifted back by exactly `minutes * 60` seconds.
pub fn sub_minutes(ts: i64, minutes: i64) -> i64 {
    ts - minutes * 60
}

/// `ts` shifted forward by `days` calendar days on the local wall clock.
///
/// A day across a DST boundary may be 23 or 25 hours long.
pub fn add_days(ts: i64, days: i64) -> Result<i64> {
    shift_days(ts, days)
}

/// `ts` shifted back by `days` calendar days on the local wall clock.
pub fn sub_days(ts: i64, days: i64) -> Result<i64> {
    shift_days(ts, -days)
}

fn shift_days(ts: i64, days: i64) -> Result<i64> {
    let dt = local_datetime(ts)?;
    let shifted = if days >= 0 {
        dt.checked_add_days(Days::new(days as u64))
    } else {
        dt.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.map(|d| d.timestamp()).ok_or_else(|| out_of_range(ts))
}

/// `ts` shifted by `months` calendar months.
///
/// Month-end overflow clamps: Jan 31 + 1 month is Feb 28 (or 29).
pub fn add_months(ts: i64, months: i32) -> Result<i64> {
    let dt = local_datetime(ts)?;
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(months as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.map(|d| d.timestamp()).ok_or_else(|| out_of_range(ts))
}

/// Whole days between two timestamps, rounding seconds to minutes to
/// hours to days, each step half away from zero.
///
/// With `abs` the difference is made absolute before rounding.
pub fn days_between(from: i64, to: i64, abs: bool) -> i64 {
    let seconds = if abs { (to - from).abs() } else { to - from } as f64;
    let minutes = (seconds / 60.0).round();
    let hours = (minutes / 60.0).round();
    (hours / 24.0).round() as i64
}

/// Format `ts` as `YYYY-MM-DD HH:MM:SS` local time.
pub fn timestamp_to_datetime_text(ts: i64) -> Result<String> {
    Ok(local_datetime(ts)?.format(DATETIME_FORMAT).to_string())
}

/// Parse `YYYY-MM-DD HH:MM:SS` local time back into epoch seconds.
///
/// Ambiguous wall-clock times (DST fall back) resolve to the earlier
/// instant; nonexistent times are errors.
pub fn datetime_text_to_timestamp(text: &str) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .map_err(|e| Error::Date(format!("Invalid datetime text '{}': {}", text, e)))?;
    resolve_local(naive, text)
}

/// Format `ts` as `YYYY-MM-DD` local time.
pub fn timestamp_to_date_text(ts: i64) -> Result<String> {
    Ok(local_datetime(ts)?.format(DATE_FORMAT).to_string())
}

/// Parse `YYYY-MM-DD` into epoch seconds at local midnight.
pub fn date_text_to_timestamp(text: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| Error::Date(format!("Invalid date text '{}': {}", text, e)))?;
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::Date(format!("Invalid date text '{}'", text)))?;
    resolve_local(naive, text)
}

fn local_datetime(ts: i64) -> Result<DateTime<Local>> {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => Ok(dt),
        _ => Err(out_of_range(ts)),
    }
}

fn resolve_local(naive: NaiveDateTime, text: &str) -> Result<i64> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier.timestamp()),
        LocalResult::None => Err(Error::Date(format!(
            "'{}' does not exist in the local timezone",
            text
        ))),
    }
}

fn out_of_range(ts: i64) -> Error {
    Error::Date(format!("Timestamp {} out of range", ts))
}
