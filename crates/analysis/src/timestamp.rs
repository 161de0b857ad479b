//! Best-effort syslog timestamp extraction.
//!
//! BSD syslog lines start with `MMM DD HH:MM:SS` and carry no year. The
//! extractor assumes the current calendar year, which misdates lines
//! written in a previous year (e.g. a log rotated across a year boundary).
//! This matches the upstream log format's ambiguity and is a known
//! limitation; callers that need exact dates must supply logs with
//! full timestamps.

use chrono::{Datelike, Local, NaiveDateTime};

/// Parses the first three whitespace-separated tokens of a line as a
/// syslog-style timestamp (`"<Month> <Day> <HH:MM:SS>"`).
///
/// Returns `None` for any failure: short lines, malformed tokens, or an
/// invalid calendar date. Absence of a timestamp is a normal condition
/// for non-syslog lines, never an error.
pub fn extract_timestamp(line: &str) -> Option<NaiveDateTime> {
    let mut tokens = line.split_whitespace();
    let month = tokens.next()?;
    let day = tokens.next()?;
    let time = tokens.next()?;

    let year = Local::now().year();
    let candidate = format!("{year} {month} {day} {time}");

    NaiveDateTime::parse_from_str(&candidate, "%Y %b %d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_syslog_prefix() {
        let ts = extract_timestamp("Jan 5 10:00:01 host sshd: Failed password").unwrap();
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 5);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 0);
        assert_eq!(ts.second(), 1);
        assert_eq!(ts.year(), Local::now().year());
    }

    #[test]
    fn parses_two_digit_day() {
        let ts = extract_timestamp("Dec 31 23:59:59 host kernel: message").unwrap();
        assert_eq!(ts.month(), 12);
        assert_eq!(ts.day(), 31);
    }

    #[test]
    fn garbage_line_yields_none() {
        assert!(extract_timestamp("garbage line with no timestamp").is_none());
    }

    #[test]
    fn short_line_yields_none() {
        assert!(extract_timestamp("").is_none());
        assert!(extract_timestamp("Jan").is_none());
        assert!(extract_timestamp("Jan 5").is_none());
    }

    #[test]
    fn invalid_month_yields_none() {
        assert!(extract_timestamp("Foo 5 10:00:01 host app: msg").is_none());
    }

    #[test]
    fn invalid_day_yields_none() {
        assert!(extract_timestamp("Jan 99 10:00:01 host app: msg").is_none());
    }

    #[test]
    fn invalid_time_yields_none() {
        assert!(extract_timestamp("Jan 5 25:61:00 host app: msg").is_none());
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert!(extract_timestamp("   Jan 5 10:00:01 host app: msg").is_some());
    }
}
