//! Timestamp normalization across heterogeneous encodings
//!
//! Parses a textual timestamp into an absolute UTC instant. Caller-supplied
//! chrono patterns are tried first in list order, then a fixed fallback
//! chain of common encodings, then integer epoch seconds as the last
//! resort. The first success wins; nothing is merged across attempts.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// How a fallback pattern is to be interpreted
#[derive(Debug, Clone, Copy)]
enum FormatKind {
    /// Pattern carries an explicit UTC offset
    Zoned,
    /// Pattern is a naive date-time, interpreted as UTC
    NaiveDateTime,
    /// Pattern is a bare date; the time is midnight UTC
    NaiveDate,
}

/// Built-in fallback chain, tried in priority order.
///
/// The order is a documented contract: ambiguous strings such as
/// `03/04/2025 10:00:00` resolve to whichever pattern matches first (the
/// US month/day form), never by inspecting the values.
const FALLBACK_CHAIN: [(&str, FormatKind); 7] = [
    ("%Y-%m-%dT%H:%M:%SZ", FormatKind::NaiveDateTime), // ISO 8601 UTC ("Z" suffix)
    ("%Y-%m-%dT%H:%M:%S%:z", FormatKind::Zoned),       // ISO 8601 with numeric offset
    ("%Y-%m-%d %H:%M:%S", FormatKind::NaiveDateTime),  // space-separated date-time
    ("%m/%d/%Y %H:%M:%S", FormatKind::NaiveDateTime),  // US month/day/year
    ("%d/%m/%Y %H:%M:%S", FormatKind::NaiveDateTime),  // day/month/year
    ("%Y-%m-%dT%H:%M:%S%.3fZ", FormatKind::NaiveDateTime), // ISO 8601 with fractional seconds
    ("%Y-%m-%d", FormatKind::NaiveDate),               // date only, midnight UTC
];

/// Parse a timestamp token into a UTC instant.
///
/// Resolution order: each custom pattern in list order, the built-in
/// fallback chain, then signed 64-bit epoch seconds. Fails with
/// `UnparseableTimestamp` carrying the original text when every attempt
/// fails.
pub fn parse_timestamp(value: &str, custom_formats: &[String]) -> Result<DateTime<Utc>> {
    let value = value.trim();

    // Custom patterns take precedence. Each is tried zoned first, then as a
    // naive date-time in UTC, then as a bare date, so callers do not have to
    // know which interpretation their pattern needs.
    for pattern in custom_formats {
        if let Some(instant) = parse_with_pattern(value, pattern) {
            return Ok(instant);
        }
    }

    for (pattern, kind) in FALLBACK_CHAIN {
        if let Some(instant) = parse_as(value, pattern, kind) {
            return Ok(instant);
        }
    }

    // Last resort: integer seconds since the Unix epoch.
    if let Ok(seconds) = value.parse::<i64>() {
        if let Some(instant) = Utc.timestamp_opt(seconds, 0).single() {
            return Ok(instant);
        }
    }

    Err(Error::unparseable_timestamp(value))
}

/// Try one caller-supplied pattern under every interpretation
fn parse_with_pattern(value: &str, pattern: &str) -> Option<DateTime<Utc>> {
    parse_as(value, pattern, FormatKind::Zoned)
        .or_else(|| parse_as(value, pattern, FormatKind::NaiveDateTime))
        .or_else(|| parse_as(value, pattern, FormatKind::NaiveDate))
}

/// Try one pattern under one interpretation
fn parse_as(value: &str, pattern: &str, kind: FormatKind) -> Option<DateTime<Utc>> {
    match kind {
        FormatKind::Zoned => DateTime::parse_from_str(value, pattern)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        FormatKind::NaiveDateTime => NaiveDateTime::parse_from_str(value, pattern)
            .ok()
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)),
        FormatKind::NaiveDate => NaiveDate::parse_from_str(value, pattern)
            .ok()
            .map(|date| {
                DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
            }),
    }
}
