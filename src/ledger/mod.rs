//! Expense records and the ledger that owns, persists, and aggregates them.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use expense::{Expense, CSV_HEADERS, DEFAULT_CATEGORY};
pub use ledger::ExpenseLedger;
