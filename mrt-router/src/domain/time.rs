//! Parsing of user-entered departure times and station opening dates.
//!
//! Departure times are typed as `HH:MM` (24-hour) and `DD/MM/YYYY`.
//! Opening dates in the station file are human-readable (`26 March 1988`),
//! but numeric forms are accepted too.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid time or date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Formats accepted for station opening dates, tried in order.
const OPEN_DATE_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Parse a time of day in "HH:MM" format.
///
/// # Examples
///
/// ```
/// use mrt_router::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("21:09").is_ok());
///
/// assert!(parse_hhmm("2109").is_err());
/// assert!(parse_hhmm("21:9").is_err());
/// assert!(parse_hhmm("24:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    if s.len() != 5 || s.as_bytes()[2] != b':' {
        return Err(TimeError::new("expected HH:MM format"));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| TimeError::new("no such time of day"))
}

/// Parse a calendar date in "DD/MM/YYYY" format.
///
/// # Examples
///
/// ```
/// use mrt_router::domain::parse_dmy;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_dmy("20/08/1995").unwrap(),
///     NaiveDate::from_ymd_opt(1995, 8, 20).unwrap()
/// );
/// assert!(parse_dmy("31/02/2024").is_err());
/// assert!(parse_dmy("2024-02-01").is_err());
/// ```
pub fn parse_dmy(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if s.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(TimeError::new("expected DD/MM/YYYY format"));
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").map_err(|_| TimeError::new("no such calendar date"))
}

/// Combine a "HH:MM" time and a "DD/MM/YYYY" date into a departure timestamp.
pub fn parse_departure(time: &str, date: &str) -> Result<NaiveDateTime, TimeError> {
    let time = parse_hhmm(time)?;
    let date = parse_dmy(date)?;
    Ok(date.and_time(time))
}

/// Parse a station opening date.
///
/// # Examples
///
/// ```
/// use mrt_router::domain::parse_open_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(1988, 3, 26).unwrap();
/// assert_eq!(parse_open_date("26 March 1988").unwrap(), expected);
/// assert_eq!(parse_open_date("26 Mar 1988").unwrap(), expected);
/// assert_eq!(parse_open_date("26/03/1988").unwrap(), expected);
/// assert_eq!(parse_open_date("1988-03-26").unwrap(), expected);
/// ```
pub fn parse_open_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    OPEN_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TimeError::new("unrecognised opening date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hhmm_valid() {
        assert_eq!(
            parse_hhmm("06:00").unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
        assert_eq!(
            parse_hhmm("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
        assert_eq!(
            parse_hhmm(" 21:09 ").unwrap(),
            NaiveTime::from_hms_opt(21, 9, 0).unwrap()
        );
    }

    #[test]
    fn parse_hhmm_invalid() {
        assert!(parse_hhmm("").is_err());
        assert!(parse_hhmm("9:00").is_err());
        assert!(parse_hhmm("09-00").is_err());
        assert!(parse_hhmm("ab:cd").is_err());
        assert!(parse_hhmm("12:60").is_err());
        assert!(parse_hhmm("24:00").is_err());
    }

    #[test]
    fn error_display() {
        let err = parse_hhmm("24:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: no such time of day");

        let err = parse_hhmm("9:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: expected HH:MM format");
    }

    #[test]
    fn parse_dmy_valid() {
        assert_eq!(
            parse_dmy("29/02/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn parse_dmy_invalid() {
        assert!(parse_dmy("29/02/2023").is_err());
        assert!(parse_dmy("1/2/2024").is_err());
        assert!(parse_dmy("01/02").is_err());
        assert!(parse_dmy("01/02/2024/1").is_err());
        assert!(parse_dmy("aa/bb/cccc").is_err());
        assert!(parse_dmy("01/2/20245").is_err());
        assert!(parse_dmy("01-02-2024").is_err());
    }

    #[test]
    fn parse_departure_combines() {
        let dt = parse_departure("08:15", "16/10/2026").unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2026, 10, 16)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap()
        );
        assert!(parse_departure("8:15", "16/10/2026").is_err());
        assert!(parse_departure("08:15", "2026-10-16").is_err());
    }

    #[test]
    fn parse_open_date_rejects_garbage() {
        assert!(parse_open_date("").is_err());
        assert!(parse_open_date("sometime in 1988").is_err());
        assert!(parse_open_date("31 February 2020").is_err());
    }
}
