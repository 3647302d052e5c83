#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pocket_ledger::{
    core::{Clock, LedgerManager},
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Clock that advances one minute per reading, so every transaction gets a distinct stamp.
pub struct SteppingClock {
    next: Mutex<NaiveDateTime>,
}

impl SteppingClock {
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .expect("valid date")
                .and_hms_opt(9, 0, 0)
                .expect("valid time"),
        )
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let mut guard = self.next.lock().expect("clock lock poisoned");
        let current = *guard;
        *guard = current + Duration::minutes(1);
        current
    }
}

/// Temp directory holding one ledger document.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.path().join("finances.json")
    }

    pub fn manager(&self) -> LedgerManager {
        LedgerManager::load(
            Box::new(JsonStorage::new(self.ledger_path())),
            Box::new(SteppingClock::default()),
        )
        .expect("load ledger manager")
    }
}
