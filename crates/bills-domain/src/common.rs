//! Shared traits, calendar helpers, and the early/late month partition.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

/// Exposes a stable identifier for entities held by the store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Last due day that still counts as the early half of the month.
pub const EARLY_SECTION_MAX_DAY: u32 = 14;

/// Fixed early/late partition of a month by due day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSection {
    Early,
    Late,
}

impl MonthSection {
    /// Classifies a due day into its section.
    pub fn from_due_day(due_day: u32) -> Self {
        if due_day <= EARLY_SECTION_MAX_DAY {
            MonthSection::Early
        } else {
            MonthSection::Late
        }
    }

    /// Returns `true` when the due day falls inside this section.
    pub fn contains(self, due_day: u32) -> bool {
        Self::from_due_day(due_day) == self
    }
}

impl fmt::Display for MonthSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MonthSection::Early => "Early Month",
            MonthSection::Late => "Late Month",
        };
        f.write_str(label)
    }
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_partition_covers_every_due_day() {
        for day in 1..=31 {
            let section = MonthSection::from_due_day(day);
            assert!(section.contains(day));
            let other = match section {
                MonthSection::Early => MonthSection::Late,
                MonthSection::Late => MonthSection::Early,
            };
            assert!(!other.contains(day));
        }
        assert_eq!(MonthSection::from_due_day(14), MonthSection::Early);
        assert_eq!(MonthSection::from_due_day(15), MonthSection::Late);
    }

    #[test]
    fn month_lengths_handle_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }
}
