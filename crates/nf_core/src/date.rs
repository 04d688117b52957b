use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::error::Error;

/// Row date pattern, e.g. `Mar 03, 1984`.
pub const DATE_PATTERN: &str = "%b %d, %Y";

/// Time zone used when turning a publication instant into a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for DisplayZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(DisplayZone::Local),
            "utc" | "z" => return Ok(DisplayZone::Utc),
            _ => {}
        }

        let invalid = || Error::Config(format!("Invalid time zone: {} (expected local, utc or +HH:MM)", s));

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(invalid());
        }
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 => rest.split_at(2),
            None => (rest, "0"),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(DisplayZone::Fixed)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Utc => write!(f, "utc"),
            DisplayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFormatter {
    zone: DisplayZone,
}

impl DateFormatter {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self.zone {
            DisplayZone::Local => instant.with_timezone(&Local).format(DATE_PATTERN).to_string(),
            DisplayZone::Utc => instant.format(DATE_PATTERN).to_string(),
            DisplayZone::Fixed(offset) => instant.with_timezone(&offset).format(DATE_PATTERN).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc() {
        let formatter = DateFormatter::new(DisplayZone::Utc);
        let instant = Utc.with_ymd_and_hms(1984, 3, 3, 10, 30, 0).unwrap();
        assert_eq!(formatter.format(&instant), "Mar 03, 1984");
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = DateFormatter::new(DisplayZone::Utc);
        let instant = Utc.with_ymd_and_hms(2017, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(formatter.format(&instant), formatter.format(&instant));
        assert_eq!(formatter.format(&instant), "Dec 25, 2017");
    }

    #[test]
    fn test_fixed_offset_shifts_calendar_day() {
        let instant = Utc.with_ymd_and_hms(1984, 3, 3, 23, 30, 0).unwrap();
        let east = DateFormatter::new("+05:30".parse().unwrap());
        let west = DateFormatter::new("-03:00".parse().unwrap());
        assert_eq!(east.format(&instant), "Mar 04, 1984");
        assert_eq!(west.format(&instant), "Mar 03, 1984");
    }

    #[test]
    fn test_parse_zone() {
        assert_eq!("local".parse::<DisplayZone>().unwrap(), DisplayZone::Local);
        assert_eq!("UTC".parse::<DisplayZone>().unwrap(), DisplayZone::Utc);
        assert_eq!(
            "+0200".parse::<DisplayZone>().unwrap(),
            DisplayZone::Fixed(FixedOffset::east_opt(7200).unwrap())
        );
        assert_eq!(
            "-7".parse::<DisplayZone>().unwrap(),
            DisplayZone::Fixed(FixedOffset::west_opt(7 * 3600).unwrap())
        );
        assert!("mars".parse::<DisplayZone>().is_err());
        assert!("+25:00".parse::<DisplayZone>().is_err());
        assert!("+01:75".parse::<DisplayZone>().is_err());
    }

    #[test]
    fn test_parse_zone_rejects_non_ascii_offsets() {
        for zone in ["+1é1", "+é", "-０２００", "+"] {
            assert!(
                matches!(zone.parse::<DisplayZone>(), Err(Error::Config(_))),
                "{:?}",
                zone
            );
        }
    }
}
