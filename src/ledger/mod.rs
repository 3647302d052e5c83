//! Ledger domain models and persistence-friendly types.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind, TIMESTAMP_FORMAT};
