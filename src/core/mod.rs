//! Bookkeeping services sitting between the ledger model and the shell.

pub mod amount;
pub mod clock;
pub mod ledger_manager;
pub mod utils;

pub use amount::parse_amount;
pub use clock::{Clock, SystemClock};
pub use ledger_manager::LedgerManager;
