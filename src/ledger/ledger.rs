use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Tolerance used when comparing a stored balance against the history.
const BALANCE_EPSILON: f64 = 1e-9;

/// Append-only list of transactions plus the running balance.
///
/// The balance is stored alongside the history so the persisted document reads
/// the same way it is reported, and is updated incrementally on every append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    balance: f64,
}

impl Ledger {
    /// Window size of the history view.
    pub const DEFAULT_RECENT: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction and returns the updated balance.
    pub fn append(&mut self, transaction: Transaction) -> f64 {
        self.balance += transaction.signed_amount();
        self.transactions.push(transaction);
        self.balance
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The last `n` transactions, oldest first.
    pub fn recent(&self, n: usize) -> &[Transaction] {
        let start = self.transactions.len().saturating_sub(n);
        &self.transactions[start..]
    }

    /// Balance derived from the history alone, ignoring the stored value.
    pub fn recomputed_balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |acc, txn| acc + txn.signed_amount())
    }

    pub fn balance_matches_history(&self) -> bool {
        (self.balance - self.recomputed_balance()).abs() <= BALANCE_EPSILON
    }
}
