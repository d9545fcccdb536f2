//! The recurring bill entity and its due-date arithmetic.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::{days_in_month, Amounted, Displayable, Identifiable, MonthSection, NamedEntity},
    month_key::MonthKey,
};

/// A recurring monthly bill. Paid status is scoped per calendar month via
/// the private key set; there is no global paid flag.
///
/// Field names serialize in camelCase (`dueDay`, `paidMonths`) so existing
/// persisted records remain readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_day: u32,
    #[serde(default)]
    paid_months: BTreeSet<MonthKey>,
}

impl Bill {
    /// Creates a bill with a fresh identifier and no paid months.
    pub fn new(name: impl Into<String>, amount: f64, due_day: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            due_day,
            paid_months: BTreeSet::new(),
        }
    }

    /// Returns `true` when the bill is marked paid for `month`.
    pub fn is_paid_for(&self, month: MonthKey) -> bool {
        self.paid_months.contains(&month)
    }

    /// Marks or clears the paid flag for `month`. Touches nothing else.
    pub fn set_paid_for(&mut self, month: MonthKey, paid: bool) {
        if paid {
            self.paid_months.insert(month);
        } else {
            self.paid_months.remove(&month);
        }
    }

    /// Flips the paid flag for `month`, returning the new state.
    pub fn toggle_paid_for(&mut self, month: MonthKey) -> bool {
        let paid = !self.is_paid_for(month);
        self.set_paid_for(month, paid);
        paid
    }

    /// Months this bill has been marked paid for.
    pub fn paid_months(&self) -> &BTreeSet<MonthKey> {
        &self.paid_months
    }

    /// Next calendar occurrence of the due day, seen from `reference`.
    ///
    /// If the due day has already passed in the reference month the result
    /// falls in the following month (December rolls into January of the
    /// next year). Due days beyond the target month's length clamp to its
    /// last day, so a day-31 bill lands on Feb 28/29.
    pub fn next_due_date(&self, reference: NaiveDate) -> NaiveDate {
        let mut year = reference.year();
        let mut month = reference.month();
        if reference.day() > self.due_day {
            if month == 12 {
                month = 1;
                year += 1;
            } else {
                month += 1;
            }
        }
        let day = self.due_day.min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(reference)
    }

    /// Early/late-month classification of the due day.
    pub fn section(&self) -> MonthSection {
        MonthSection::from_due_day(self.due_day)
    }
}

impl Identifiable for Bill {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Bill {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Bill {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Bill {
    fn display_label(&self) -> String {
        format!("{} (day {})", self.name, self.due_day)
    }
}
