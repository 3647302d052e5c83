use std::path::Path;

use tracing::{info, warn};

use crate::core::clock::{Clock, SystemClock};
use crate::errors::{LedgerError, Result};
use crate::ledger::{Ledger, Transaction, TransactionKind};
use crate::storage::{JsonStorage, StorageBackend};

const UNCATEGORIZED: &str = "uncategorized";

/// Facade that owns the ledger and writes it through to storage on every change.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl LedgerManager {
    /// Loads persisted state, starting from an empty ledger when none exists.
    pub fn load(storage: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Result<Self> {
        let ledger = match storage.load()? {
            Some(ledger) => {
                if !ledger.balance_matches_history() {
                    warn!(
                        stored = ledger.balance(),
                        recomputed = ledger.recomputed_balance(),
                        "stored balance disagrees with transaction history"
                    );
                }
                info!(
                    path = %storage.path().display(),
                    transactions = ledger.transaction_count(),
                    "ledger loaded"
                );
                ledger
            }
            None => {
                info!(path = %storage.path().display(), "starting empty ledger");
                Ledger::new()
            }
        };
        Ok(Self {
            ledger,
            storage,
            clock,
        })
    }

    /// Opens the JSON document at `path` using the system clock.
    pub fn open(path: &Path) -> Result<Self> {
        Self::load(Box::new(JsonStorage::new(path)), Box::new(SystemClock))
    }

    /// Records a transaction stamped with the current time, persists, and returns the new balance.
    ///
    /// The in-memory ledger only changes once the document has been written.
    pub fn record(&mut self, amount: f64, category: &str, kind: TransactionKind) -> Result<f64> {
        let transaction = Transaction::new(self.clock.now(), amount, normalize_category(category), kind);
        let mut next = self.ledger.clone();
        let balance = next.append(transaction);
        if !balance.is_finite() {
            return Err(LedgerError::InvalidAmount(
                "amount would overflow the balance".into(),
            ));
        }
        self.storage.save(&next)?;
        self.ledger = next;
        info!(%kind, amount, balance, "transaction recorded");
        Ok(balance)
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn recent(&self, n: usize) -> &[Transaction] {
        self.ledger.recent(n)
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.transaction_count()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage_path(&self) -> &Path {
        self.storage.path()
    }
}

fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}
