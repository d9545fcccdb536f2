//! bills-core
//!
//! Business logic for the bill tracker: the bill store, validation, the
//! persistence and clock abstractions, and starter seeding. Depends on
//! bills-domain. No CLI, no terminal I/O, no direct storage backend.

pub mod error;
pub mod seed;
pub mod storage;
pub mod store;
pub mod time;

pub use error::CoreError;
pub use seed::starter_bills;
pub use storage::{collection_warnings, BillStorage};
pub use store::{validate_bill, BillStore};
pub use time::Clock;
