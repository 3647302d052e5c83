use chrono::{Local, NaiveDateTime};

/// Clock abstracts access to the current time so the ledger stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Local wall-clock time used to stamp new transactions.
    fn now(&self) -> NaiveDateTime;
}

/// Real-time clock backed by the system local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
