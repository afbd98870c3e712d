//! Value-level helpers: text unescaping and date/time conversion.

use chrono::{NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{RfcError, RfcResult};

/// Unescapes a directory-format text value.
///
/// Recognized escapes: `\n` newline, `\r` CR, `\t` TAB (emitted by at least
/// one calendar producer), `\;`, `\,`, `\\` and `\"`. An unrecognized escape
/// is passed through literally with a diagnostic; a trailing lone backslash
/// is emitted as a literal backslash.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                tracing::warn!(escape = %other, "unrecognized escape sequence, passing through");
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Converts a directory-format date/time literal to a Unix timestamp.
///
/// Accepted shapes: `YYYYMMDD`, `YYYYMMDDTHHMMSS[Z]`, `YYYY-MM-DD` and
/// `YYYY-MM-DDTHH:MM:SS[Z]`. A trailing `Z` marks the value as UTC;
/// otherwise it is interpreted in local time. A date without a time part
/// means midnight.
///
/// ## Errors
/// Returns [`RfcError::InvalidDateTime`] when the literal matches none of
/// the fixed-width shapes or names an impossible date.
pub fn time_to_unix(literal: &str) -> RfcResult<i64> {
    let invalid = || RfcError::InvalidDateTime(literal.to_string());

    let (body, utc) = match literal.strip_suffix('Z') {
        Some(body) => (body, true),
        None => (literal, false),
    };

    let (date_part, time_part) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };

    let date = parse_fixed_date(date_part).ok_or_else(invalid)?;
    let datetime = match time_part {
        Some(time) => {
            let (hour, minute, second) = parse_fixed_time(time).ok_or_else(invalid)?;
            date.and_hms_opt(hour, minute, second).ok_or_else(invalid)?
        }
        None => date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?,
    };

    if utc {
        Ok(datetime.and_utc().timestamp())
    } else {
        local_timestamp(datetime).ok_or_else(invalid)
    }
}

fn local_timestamp(datetime: NaiveDateTime) -> Option<i64> {
    match chrono::Local.from_local_datetime(&datetime) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            Some(dt.timestamp())
        }
        chrono::LocalResult::None => None,
    }
}

/// `YYYYMMDD` (basic) or `YYYY-MM-DD` (extended).
fn parse_fixed_date(s: &str) -> Option<NaiveDate> {
    match s.len() {
        8 if s.bytes().all(|b| b.is_ascii_digit()) => {
            let year = s[0..4].parse().ok()?;
            let month = s[4..6].parse().ok()?;
            let day = s[6..8].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// `HHMMSS` (basic) or `HH:MM:SS` (extended).
fn parse_fixed_time(s: &str) -> Option<(u32, u32, u32)> {
    match s.len() {
        6 if s.bytes().all(|b| b.is_ascii_digit()) => Some((
            s[0..2].parse().ok()?,
            s[2..4].parse().ok()?,
            s[4..6].parse().ok()?,
        )),
        8 => {
            let mut parts = s.split(':');
            let hour = parts.next()?.parse().ok()?;
            let minute = parts.next()?.parse().ok()?;
            let second = parts.next()?.parse().ok()?;
            parts.next().is_none().then_some((hour, minute, second))
        }
        _ => None,
    }
}
