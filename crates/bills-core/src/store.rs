//! The bill store: an in-memory collection with derived views, guarded by
//! a single mutex and persisted in full on every mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};
use uuid::Uuid;

use bills_domain::{Bill, MonthKey, MonthSection, MonthlySummary, SectionTotals};

use crate::{storage::collection_warnings, BillStorage, Clock, CoreError};

/// Checks the store invariants for a single bill.
pub fn validate_bill(bill: &Bill) -> Result<(), CoreError> {
    if bill.name.trim().is_empty() {
        return Err(CoreError::Validation("bill name must not be empty".into()));
    }
    if !bill.amount.is_finite() || bill.amount < 0.0 {
        return Err(CoreError::Validation(format!(
            "bill amount must be a non-negative number, got {}",
            bill.amount
        )));
    }
    if !(1..=31).contains(&bill.due_day) {
        return Err(CoreError::Validation(format!(
            "bill due day must be between 1 and 31, got {}",
            bill.due_day
        )));
    }
    Ok(())
}

/// Owns the ordered bill collection and its persistence timing.
///
/// Collection order is always the derived stable sort by due day; every
/// mutation re-saves the full collection before returning, under the same
/// lock that guards the in-memory state, so a read immediately following
/// a mutation observes its effect. Consumers re-query the derived views
/// after known mutation points; there is no observer list.
pub struct BillStore {
    bills: Mutex<Vec<Bill>>,
    storage: Arc<dyn BillStorage>,
    clock: Arc<dyn Clock>,
    last_save_error: Mutex<Option<CoreError>>,
}

impl BillStore {
    /// Opens a store over `storage`, loading whatever the slot holds.
    ///
    /// An unreadable or malformed slot is downgraded to a warning and an
    /// empty collection; the session's in-memory state is authoritative
    /// from then on.
    pub fn open(storage: Arc<dyn BillStorage>, clock: Arc<dyn Clock>) -> Self {
        let bills = match storage.load_bills() {
            Ok(mut bills) => {
                for warning in collection_warnings(&bills) {
                    warn!("loaded bill data: {warning}");
                }
                bills.sort_by_key(|bill| bill.due_day);
                bills
            }
            Err(err) => {
                warn!("failed to load bills, starting empty: {err}");
                Vec::new()
            }
        };
        Self {
            bills: Mutex::new(bills),
            storage,
            clock,
            last_save_error: Mutex::new(None),
        }
    }

    /// Key of the month paid-state is currently evaluated against.
    pub fn current_month(&self) -> MonthKey {
        self.clock.current_month()
    }

    /// Adds a bill, returning its id. Fails validation before any state
    /// changes.
    pub fn add(&self, bill: Bill) -> Result<Uuid, CoreError> {
        validate_bill(&bill)?;
        let id = bill.id;
        let mut bills = self.lock();
        bills.push(bill);
        bills.sort_by_key(|bill| bill.due_day);
        self.persist(&bills);
        Ok(id)
    }

    /// Replaces the bill with a matching id. Returns `Ok(false)` without
    /// touching anything when the id is unknown.
    pub fn update(&self, bill: Bill) -> Result<bool, CoreError> {
        validate_bill(&bill)?;
        let mut bills = self.lock();
        match bills.iter_mut().find(|existing| existing.id == bill.id) {
            Some(slot) => *slot = bill,
            None => {
                debug!("update for unknown bill {} ignored", bill.id);
                return Ok(false);
            }
        }
        bills.sort_by_key(|bill| bill.due_day);
        self.persist(&bills);
        Ok(true)
    }

    /// Removes the bill with a matching id. Unknown ids are a no-op.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut bills = self.lock();
        let before = bills.len();
        bills.retain(|bill| bill.id != id);
        if bills.len() == before {
            debug!("remove for unknown bill {id} ignored");
            return false;
        }
        self.persist(&bills);
        true
    }

    /// Flips the current month's paid flag for the matching bill,
    /// returning the new state. Unknown ids are a no-op returning `false`.
    pub fn toggle_paid(&self, id: Uuid) -> bool {
        let month = self.current_month();
        let mut bills = self.lock();
        let paid = match bills.iter_mut().find(|bill| bill.id == id) {
            Some(bill) => bill.toggle_paid_for(month),
            None => {
                debug!("toggle for unknown bill {id} ignored");
                return false;
            }
        };
        self.persist(&bills);
        paid
    }

    /// Sets the current month's paid flag on every bill matching
    /// `predicate`, persisting once. Returns the number of bills touched.
    pub fn set_paid_for_group(&self, predicate: impl Fn(&Bill) -> bool, paid: bool) -> usize {
        let month = self.current_month();
        let mut bills = self.lock();
        let mut touched = 0;
        for bill in bills.iter_mut().filter(|bill| predicate(bill)) {
            bill.set_paid_for(month, paid);
            touched += 1;
        }
        if touched > 0 {
            self.persist(&bills);
        }
        touched
    }

    /// All-or-nothing flip for the bills matching `predicate`: when every
    /// match is already paid this month they all become unpaid, otherwise
    /// they all become paid. An empty match counts as not-all-paid and
    /// flips nothing. Returns the paid state the group was driven to.
    pub fn toggle_group(&self, predicate: impl Fn(&Bill) -> bool) -> bool {
        let month = self.current_month();
        let mut bills = self.lock();
        let mut matched = 0;
        let mut unpaid = 0;
        for bill in bills.iter().filter(|bill| predicate(bill)) {
            matched += 1;
            if !bill.is_paid_for(month) {
                unpaid += 1;
            }
        }
        if matched == 0 {
            return false;
        }
        let target = unpaid > 0;
        for bill in bills.iter_mut().filter(|bill| predicate(bill)) {
            bill.set_paid_for(month, target);
        }
        self.persist(&bills);
        target
    }

    /// Marks every bill paid for the current month.
    pub fn mark_all_paid(&self) -> usize {
        self.set_paid_for_group(|_| true, true)
    }

    /// Clears the current month's paid flag on every bill.
    pub fn mark_all_unpaid(&self) -> usize {
        self.set_paid_for_group(|_| true, false)
    }

    /// Seeds the starter bill set into an empty store, persisting once.
    /// Returns the number of bills added; a non-empty store stays
    /// untouched. Never invoked implicitly by load.
    pub fn seed_starter_bills(&self) -> usize {
        let mut bills = self.lock();
        if !bills.is_empty() {
            debug!("starter seed skipped, store already has bills");
            return 0;
        }
        *bills = crate::seed::starter_bills();
        bills.sort_by_key(|bill| bill.due_day);
        self.persist(&bills);
        bills.len()
    }

    /// Snapshot of the whole collection, sorted by due day.
    pub fn bills(&self) -> Vec<Bill> {
        self.lock().clone()
    }

    /// Snapshot of the bill with a matching id.
    pub fn bill(&self, id: Uuid) -> Option<Bill> {
        self.lock().iter().find(|bill| bill.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Bills in the given section, sorted by due day.
    pub fn section(&self, section: MonthSection) -> Vec<Bill> {
        self.lock()
            .iter()
            .filter(|bill| bill.section() == section)
            .cloned()
            .collect()
    }

    /// Bills due on day 1 through 14.
    pub fn early_month(&self) -> Vec<Bill> {
        self.section(MonthSection::Early)
    }

    /// Bills due on day 15 through 31.
    pub fn late_month(&self) -> Vec<Bill> {
        self.section(MonthSection::Late)
    }

    /// Sum of amounts over `bills`, paid or not.
    pub fn total_amount(&self, bills: &[Bill]) -> f64 {
        bills.iter().map(|bill| bill.amount).sum()
    }

    /// Sum of amounts over the bills paid for the current month.
    pub fn total_paid(&self, bills: &[Bill]) -> f64 {
        let month = self.current_month();
        bills
            .iter()
            .filter(|bill| bill.is_paid_for(month))
            .map(|bill| bill.amount)
            .sum()
    }

    /// Sum of amounts over the bills not yet paid for the current month.
    pub fn total_unpaid(&self, bills: &[Bill]) -> f64 {
        let month = self.current_month();
        bills
            .iter()
            .filter(|bill| !bill.is_paid_for(month))
            .map(|bill| bill.amount)
            .sum()
    }

    /// `true` iff `bills` is non-empty and every member is paid for the
    /// current month.
    pub fn all_paid(&self, bills: &[Bill]) -> bool {
        let month = self.current_month();
        !bills.is_empty() && bills.iter().all(|bill| bill.is_paid_for(month))
    }

    /// Early/late/overall totals for the current month, computed fresh.
    pub fn monthly_summary(&self) -> MonthlySummary {
        let month = self.current_month();
        let bills = self.lock();
        let early = totals_for(&bills, month, |bill| bill.section() == MonthSection::Early);
        let late = totals_for(&bills, month, |bill| bill.section() == MonthSection::Late);
        let overall = totals_for(&bills, month, |_| true);
        MonthlySummary {
            month,
            early,
            late,
            overall,
        }
    }

    /// Most recent persistence failure, if any. Saves are best-effort:
    /// a failed write keeps the in-memory state authoritative and is
    /// reported here instead of failing the mutating call.
    pub fn take_save_error(&self) -> Option<CoreError> {
        self.last_save_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Bill>> {
        self.bills
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, bills: &[Bill]) {
        let outcome = self.storage.save_bills(bills);
        let mut last = self
            .last_save_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match outcome {
            Ok(()) => *last = None,
            Err(err) => {
                warn!("failed to persist bills, keeping in-memory state: {err}");
                *last = Some(err);
            }
        }
    }
}

fn totals_for(bills: &[Bill], month: MonthKey, member: impl Fn(&Bill) -> bool) -> SectionTotals {
    let mut paid = 0.0;
    let mut unpaid = 0.0;
    let mut members = 0usize;
    let mut unpaid_members = 0usize;
    for bill in bills.iter().filter(|bill| member(bill)) {
        members += 1;
        if bill.is_paid_for(month) {
            paid += bill.amount;
        } else {
            unpaid += bill.amount;
            unpaid_members += 1;
        }
    }
    SectionTotals::from_parts(paid, unpaid, members > 0 && unpaid_members == 0)
}
