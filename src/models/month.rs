//! Calendar month bucket
//!
//! Analytics compare "this month" against "last month"; budgets are monthly.
//! A `Month` is the year+month pair those comparisons bucket by.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (e.g. "2025-08")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month; month must be 1-12, year 1000-9999
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1000..=9999).contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The current calendar month (local clock)
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month a timestamp falls in
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self::from_date(dt.date())
    }

    /// The immediately preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The immediately following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date().pred_opt().unwrap_or(NaiveDate::MIN)
    }

    /// Whether a timestamp falls inside this month
    pub fn contains(&self, dt: NaiveDateTime) -> bool {
        dt.year() == self.year && dt.month() == self.month
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        // YYYY means a four-digit year; anything else is not this format
        if !(1000..=9999).contains(&year) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }

    /// Human-friendly label, e.g. "August 2025"
    pub fn label(&self) -> String {
        self.start_date().format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let aug = Month::new(2025, 8).unwrap();
        assert_eq!(aug.prev(), Month::new(2025, 7).unwrap());
        assert_eq!(aug.next(), Month::new(2025, 9).unwrap());

        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), Month::new(2024, 12).unwrap());

        let dec = Month::new(2024, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2025, 1).unwrap());
    }

    #[test]
    fn test_bounds() {
        let feb = Month::new(2024, 2).unwrap();
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_contains() {
        let aug = Month::new(2025, 8).unwrap();
        let inside = NaiveDate::from_ymd_opt(2025, 8, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let outside = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(aug.contains(inside));
        assert!(!aug.contains(outside));
    }

    #[test]
    fn test_parse_and_display() {
        let m = Month::parse("2025-08").unwrap();
        assert_eq!(m, Month::new(2025, 8).unwrap());
        assert_eq!(format!("{}", m), "2025-08");

        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("August").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_year() {
        assert!(Month::parse("999999-01").is_err());
        assert!(Month::parse("10000-01").is_err());
        assert!(Month::new(999999, 1).is_none());
        assert!(Month::new(999, 1).is_none());
    }

    #[test]
    fn test_extreme_year_dates_degrade_without_panicking() {
        // Constructors bound the year, but a hand-built month past the
        // calendar range must still produce a date, not a panic
        let m = Month {
            year: i32::MAX,
            month: 1,
        };
        assert_eq!(m.start_date(), NaiveDate::MIN);
        assert_eq!(m.end_date(), NaiveDate::MIN);
    }

    #[test]
    fn test_ordering() {
        let a = Month::new(2024, 12).unwrap();
        let b = Month::new(2025, 1).unwrap();
        assert!(a < b);
    }
}
