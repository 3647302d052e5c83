use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in persisted documents and history output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single recorded income or expense event.
///
/// Fields are private: once a transaction is in the ledger it is never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "date", with = "minute_timestamp")]
    timestamp: NaiveDateTime,
    amount: f64,
    category: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        timestamp: NaiveDateTime,
        amount: f64,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            timestamp: truncate_to_minute(timestamp),
            amount,
            category: category.into(),
            kind,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount with the sign this transaction contributes to the balance.
    pub fn signed_amount(&self) -> f64 {
        self.kind.apply(self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[serde(alias = "доход")]
    Income,
    #[serde(alias = "расход")]
    Expense,
}

impl TransactionKind {
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }

    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn truncate_to_minute(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .date()
        .and_hms_opt(timestamp.hour(), timestamp.minute(), 0)
        .unwrap_or(timestamp)
}

mod minute_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
