//! Station codes, lines and station records.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationCode {
    code: String,
    reason: &'static str,
}

/// A valid station code such as `NS12` or `CC1`.
///
/// Codes are uppercase ASCII letters followed by letters or digits, and
/// always start with a letter. The leading run of letters names the line.
///
/// # Examples
///
/// ```
/// use mrt_router::domain::StationCode;
///
/// let code = StationCode::parse("NS12").unwrap();
/// assert_eq!(code.as_str(), "NS12");
/// assert_eq!(code.line().as_str(), "NS");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("ns12").is_err());
///
/// // Must start with a letter
/// assert!(StationCode::parse("12").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let invalid = |reason| InvalidStationCode {
            code: s.to_string(),
            reason,
        };

        let first = s
            .bytes()
            .next()
            .ok_or_else(|| invalid("must not be empty"))?;
        if !first.is_ascii_uppercase() {
            return Err(invalid("must start with an uppercase letter"));
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(invalid("must be uppercase ASCII letters and digits"));
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The line this code belongs to: its leading run of letters.
    pub fn line(&self) -> Line {
        let end = self
            .0
            .bytes()
            .position(|b| !b.is_ascii_uppercase())
            .unwrap_or(self.0.len());
        Line(self.0[..end].to_string())
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rail line, identified by its code prefix (e.g. `EW`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Line(String);

impl Line {
    /// Create a line from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station on one line.
///
/// An interchange served by several lines appears as several `Station`
/// records that share a name but differ in code and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    code: StationCode,
    name: String,
    line: Line,
    open_date: NaiveDate,
}

impl Station {
    /// Create a station whose line is derived from its code.
    pub fn new(code: StationCode, name: impl Into<String>, open_date: NaiveDate) -> Self {
        let line = code.line();
        Self::on_line(code, name, line, open_date)
    }

    /// Create a station on an explicitly given line.
    pub fn on_line(
        code: StationCode,
        name: impl Into<String>,
        line: Line,
        open_date: NaiveDate,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            line,
            open_date,
        }
    }

    pub fn code(&self) -> &StationCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn open_date(&self) -> NaiveDate {
        self.open_date
    }

    /// Whether the station has opened on or before `at`.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.open_date.and_time(chrono::NaiveTime::MIN) <= at
    }

    /// Whether `other` is the same physical station reached on another line.
    pub fn is_interchange_alias_of(&self, other: &Station) -> bool {
        self.name == other.name && self.line != other.line
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}
