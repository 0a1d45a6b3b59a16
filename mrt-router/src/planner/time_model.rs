//! Time-of-day categories and the travel times they imply.
//!
//! Windows are compared at minute resolution: seconds are ignored, so the
//! whole of the 21:00 minute still counts as the evening peak.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::domain::Line;

use super::config::TimingConfig;

/// Minutes since midnight for an hour and minute.
const fn hm(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

const MORNING_PEAK: (u32, u32) = (hm(6, 0), hm(9, 0));
const EVENING_PEAK: (u32, u32) = (hm(18, 0), hm(21, 0));
const WEEKDAY_NON_PEAK: (u32, u32) = (hm(9, 0), hm(18, 0));
const WEEKEND_NON_PEAK: (u32, u32) = (hm(6, 0), hm(22, 0));
const NIGHT_START: u32 = hm(22, 0);

/// Time-of-day category of a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeCategory {
    Peak,
    NonPeak,
    Night,
    Other,
}

/// Classifies timestamps and yields the travel times for their category.
#[derive(Debug, Clone, Default)]
pub struct TimeModel {
    config: TimingConfig,
}

impl TimeModel {
    pub fn new(config: TimingConfig) -> Self {
        Self { config }
    }

    /// Classify a timestamp. Checks run Peak, NonPeak, Night, Other and the
    /// first match wins.
    pub fn classify(&self, at: NaiveDateTime) -> TimeCategory {
        if is_peak(at) {
            TimeCategory::Peak
        } else if is_non_peak(at) {
            TimeCategory::NonPeak
        } else if is_night(at) {
            TimeCategory::Night
        } else {
            TimeCategory::Other
        }
    }

    /// Minutes to travel from one station to the next on `line`.
    pub fn next_station_time(&self, line: &Line, at: NaiveDateTime) -> u32 {
        let c = &self.config;
        match self.classify(at) {
            TimeCategory::Peak if contains(&c.peak_slow_lines, line) => c.peak_slow_mins,
            TimeCategory::Peak => c.peak_mins,
            TimeCategory::NonPeak if contains(&c.non_peak_fast_lines, line) => c.non_peak_fast_mins,
            TimeCategory::NonPeak => c.non_peak_mins,
            TimeCategory::Night if contains(&c.night_fast_lines, line) => c.night_fast_mins,
            TimeCategory::Night => c.night_mins,
            TimeCategory::Other => c.default_next_station_mins,
        }
    }

    /// Minutes to change between lines at an interchange.
    pub fn change_line_time(&self, at: NaiveDateTime) -> u32 {
        match self.classify(at) {
            TimeCategory::Peak => self.config.peak_change_mins,
            TimeCategory::NonPeak | TimeCategory::Night => self.config.off_peak_change_mins,
            TimeCategory::Other => self.config.default_change_mins,
        }
    }

    /// Whether `line` is out of service at `at`.
    pub fn is_line_closed(&self, line: &Line, at: NaiveDateTime) -> bool {
        contains(&self.config.night_closed_lines, line) && self.classify(at) == TimeCategory::Night
    }
}

fn contains(lines: &[String], line: &Line) -> bool {
    lines.iter().any(|l| l == line.as_str())
}

fn minute_of_day(at: NaiveDateTime) -> u32 {
    hm(at.hour(), at.minute())
}

fn is_weekday(at: NaiveDateTime) -> bool {
    !matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

fn is_peak(at: NaiveDateTime) -> bool {
    let m = minute_of_day(at);
    is_weekday(at)
        && ((MORNING_PEAK.0..MORNING_PEAK.1).contains(&m)
            || (EVENING_PEAK.0..=EVENING_PEAK.1).contains(&m))
}

fn is_non_peak(at: NaiveDateTime) -> bool {
    let m = minute_of_day(at);
    let (start, end) = if is_weekday(at) {
        WEEKDAY_NON_PEAK
    } else {
        WEEKEND_NON_PEAK
    };
    (start..end).contains(&m)
}

/// The night window runs from 22:00 to 09:00 the next day, anchored on the
/// departure's own date, so only the evening part can ever match.
fn is_night(at: NaiveDateTime) -> bool {
    minute_of_day(at) >= NIGHT_START
}
