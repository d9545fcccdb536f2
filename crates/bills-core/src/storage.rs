use std::collections::HashSet;

use bills_domain::Bill;

use crate::CoreError;

/// Abstraction over persistence backends holding the single bill slot.
///
/// Backends persist the full collection as one ordered list and load it
/// back verbatim; an absent slot loads as an empty collection.
pub trait BillStorage: Send + Sync {
    fn save_bills(&self, bills: &[Bill]) -> Result<(), CoreError>;
    fn load_bills(&self) -> Result<Vec<Bill>, CoreError>;
}

/// Detects anomalies in an externally produced bill collection.
///
/// Hand-edited or legacy slot data can carry duplicate ids or out-of-range
/// fields; warnings are reported to the caller but never block a load.
pub fn collection_warnings(bills: &[Bill]) -> Vec<String> {
    let mut seen_ids = HashSet::new();
    let mut warnings = Vec::new();

    for bill in bills {
        if !seen_ids.insert(bill.id) {
            warnings.push(format!("duplicate bill id {}", bill.id));
        }
        if bill.name.trim().is_empty() {
            warnings.push(format!("bill {} has a blank name", bill.id));
        }
        if !(1..=31).contains(&bill.due_day) {
            warnings.push(format!(
                "bill {} has due day {} outside 1-31",
                bill.id, bill.due_day
            ));
        }
        if !bill.amount.is_finite() || bill.amount < 0.0 {
            warnings.push(format!(
                "bill {} has invalid amount {}",
                bill.id, bill.amount
            ));
        }
    }
    warnings
}
