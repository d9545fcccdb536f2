//! bills-domain
//!
//! Pure domain models for the bill tracker (Bill, MonthKey, MonthSection,
//! summary report types). No I/O, no CLI, no storage. Only data types and
//! calendar helpers.

pub mod bill;
pub mod common;
pub mod month_key;
pub mod summary;

pub use bill::*;
pub use common::*;
pub use month_key::*;
pub use summary::*;
