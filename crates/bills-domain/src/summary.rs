//! Derived monthly report types. Computed fresh on read, never persisted.

use serde::{Deserialize, Serialize};

use crate::month_key::MonthKey;

/// Aggregated totals for one group of bills in a given month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionTotals {
    pub total: f64,
    pub paid: f64,
    pub unpaid: f64,
    pub all_paid: bool,
}

impl SectionTotals {
    /// Builds totals from the paid/unpaid sums of a group. `all_paid` is
    /// membership-based, not sum-based: a zero-amount unpaid bill still
    /// counts against it, and an empty group is never all-paid.
    pub fn from_parts(paid: f64, unpaid: f64, all_paid: bool) -> Self {
        Self {
            total: paid + unpaid,
            paid,
            unpaid,
            all_paid,
        }
    }

    pub fn empty() -> Self {
        Self::from_parts(0.0, 0.0, false)
    }
}

/// Complete early/late/overall breakdown for a single month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub early: SectionTotals,
    pub late: SectionTotals,
    pub overall: SectionTotals,
}
