//! Calendar-month identifiers in the persisted `YYYY-MM` scheme.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Identifies one calendar month. Renders and serializes as `YYYY-MM`,
/// the key scheme persisted bill data relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Builds a key, rejecting months outside `1..=12` and years that do
    /// not render as four digits.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Key for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month, useful as a reporting anchor.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid by construction")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error produced when parsing a malformed `YYYY-MM` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthKeyError(String);

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month key: {:?}", self.0)
    }
}

impl std::error::Error for ParseMonthKeyError {}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthKeyError(value.to_string());
        let (year_part, month_part) = value.split_once('-').ok_or_else(err)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(err());
        }
        let year: i32 = year_part.parse().map_err(|_| err())?;
        let month: u32 = month_part.parse().map_err(|_| err())?;
        MonthKey::new(year, month).ok_or_else(err)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(key.to_string(), "2024-03");
        let early = MonthKey::new(450, 11).unwrap();
        assert_eq!(early.to_string(), "0450-11");
    }

    #[test]
    fn parses_strict_year_month() {
        let key: MonthKey = "2024-12".parse().unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 12);

        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024-0".parse::<MonthKey>().is_err());
        assert!("24-01".parse::<MonthKey>().is_err());
        assert!("2024/01".parse::<MonthKey>().is_err());
        assert!("".parse::<MonthKey>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a = MonthKey::new(2023, 12).unwrap();
        let b = MonthKey::new(2024, 1).unwrap();
        let c = MonthKey::new(2024, 2).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn serde_round_trips_as_string() {
        let key = MonthKey::new(2024, 7).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-07\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<MonthKey>("\"2024-99\"").is_err());
    }

    #[test]
    fn tracks_date_months() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
