//! Fixed starter data for first-run stores.

use bills_domain::Bill;

/// The starter set offered to new users: typical household bills split
/// across both halves of the month.
const STARTER_BILLS: &[(&str, f64, u32)] = &[
    // Early month (1-14)
    ("Mortgage/Rent", 2500.00, 1),
    ("HOA Fees", 350.00, 1),
    ("Car Payment", 450.00, 5),
    ("Car Insurance", 175.00, 5),
    ("Home Insurance", 180.00, 8),
    ("Internet/Cable", 120.00, 10),
    ("Cell Phone", 150.00, 12),
    // Late month (15-31)
    ("Electric Bill", 200.00, 15),
    ("Gas Bill", 85.00, 15),
    ("Water & Sewage", 95.00, 18),
    ("Credit Card", 500.00, 20),
    ("Student Loan", 375.00, 21),
    ("Streaming Services", 45.00, 25),
    ("Gym Membership", 55.00, 28),
];

/// Builds fresh starter bills, each with its own new identifier.
pub fn starter_bills() -> Vec<Bill> {
    STARTER_BILLS
        .iter()
        .map(|(name, amount, due_day)| Bill::new(*name, *amount, *due_day))
        .collect()
}
