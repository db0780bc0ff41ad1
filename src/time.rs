//! Time-of-day handling: the four fixed traffic bands and `HH:MM-HH:MM`
//! peak-hour ranges.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::SafeRouteError;

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum TimeBand {
    #[serde(rename = "06:00-10:00")]
    #[strum(to_string = "06:00-10:00")]
    MorningRush,
    #[serde(rename = "10:00-16:00")]
    #[strum(to_string = "10:00-16:00")]
    Midday,
    #[serde(rename = "16:00-21:00")]
    #[strum(to_string = "16:00-21:00")]
    EveningRush,
    /// Wraps past midnight.
    #[serde(rename = "21:00-06:00")]
    #[strum(to_string = "21:00-06:00")]
    Night,
}

impl TimeBand {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=9 => Self::MorningRush,
            10..=15 => Self::Midday,
            16..=20 => Self::EveningRush,
            _ => Self::Night,
        }
    }

    pub fn at<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }
}

/// A clock range at minute resolution. `end` may be `24:00`; a range whose
/// end is before its start runs through midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    start: u16,
    end: u16,
}

impl TimeRange {
    pub fn new(start_minute: u16, end_minute: u16) -> Self {
        Self {
            start: start_minute.min(MINUTES_PER_DAY),
            end: end_minute.min(MINUTES_PER_DAY),
        }
    }

    pub fn contains_minute(&self, minute_of_day: u16) -> bool {
        if self.start <= self.end {
            (self.start..self.end).contains(&minute_of_day)
        } else {
            minute_of_day >= self.start || minute_of_day < self.end
        }
    }

    pub fn contains<T: Timelike>(&self, time: &T) -> bool {
        // hour < 24 and minute < 60, so this fits in u16.
        let minute = (time.hour() * 60 + time.minute()) as u16;
        self.contains_minute(minute)
    }
}

/// Minute of day for `HH:MM`. `24:00` is accepted as an end of day.
fn parse_clock(s: &str) -> Option<u16> {
    let s = s.trim();
    if s == "24:00" {
        return Some(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    u16::try_from(time.hour() * 60 + time.minute()).ok()
}

impl FromStr for TimeRange {
    type Err = SafeRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SafeRouteError::InvalidTimeRange(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = parse_clock(start).ok_or_else(invalid)?;
        let end = parse_clock(end).ok_or_else(invalid)?;
        Ok(Self::new(start, end))
    }
}

impl TryFrom<String> for TimeRange {
    type Error = SafeRouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(range: TimeRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn hour_bands() {
        assert_eq!(TimeBand::at(&at(5, 59)), TimeBand::Night);
        assert_eq!(TimeBand::at(&at(6, 0)), TimeBand::MorningRush);
        assert_eq!(TimeBand::at(&at(9, 59)), TimeBand::MorningRush);
        assert_eq!(TimeBand::at(&at(10, 0)), TimeBand::Midday);
        assert_eq!(TimeBand::at(&at(16, 0)), TimeBand::EveningRush);
        assert_eq!(TimeBand::at(&at(20, 59)), TimeBand::EveningRush);
        assert_eq!(TimeBand::at(&at(21, 30)), TimeBand::Night);
        assert_eq!(TimeBand::at(&at(0, 0)), TimeBand::Night);
    }

    #[test]
    fn band_labels() {
        assert_eq!(TimeBand::Night.to_string(), "21:00-06:00");
        assert_eq!("06:00-10:00".parse::<TimeBand>().unwrap(), TimeBand::MorningRush);
    }

    #[test]
    fn parses_and_formats_range() {
        let r: TimeRange = "07:30-09:30".parse().unwrap();
        assert_eq!(r.to_string(), "07:30-09:30");
        assert!(r.contains(&at(7, 30)));
        assert!(r.contains(&at(9, 29)));
        assert!(!r.contains(&at(9, 30)));
    }

    #[test]
    fn range_may_end_at_midnight() {
        let r: TimeRange = "20:00-24:00".parse().unwrap();
        assert!(r.contains(&at(23, 59)));
        assert!(!r.contains(&at(0, 0)));
    }

    #[test]
    fn wrapping_range() {
        let r: TimeRange = "22:00-05:00".parse().unwrap();
        assert!(r.contains(&at(23, 0)));
        assert!(r.contains(&at(4, 59)));
        assert!(!r.contains(&at(12, 0)));
    }

    #[test]
    fn clock_parsing() {
        assert_eq!(parse_clock("00:00"), Some(0));
        assert_eq!(parse_clock(" 17:45 "), Some(17 * 60 + 45));
        assert_eq!(parse_clock("24:00"), Some(MINUTES_PER_DAY));
        assert_eq!(parse_clock("24:01"), None);
        assert_eq!(parse_clock("noon"), None);
    }

    #[test]
    fn rejects_malformed_ranges() {
        for bad in ["", "08:00", "8-10", "25:00-26:00", "08:61-09:00", "24:30-01:00"] {
            assert!(bad.parse::<TimeRange>().is_err(), "{bad} should fail");
        }
    }
}
