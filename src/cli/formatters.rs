use crate::ledger::{Transaction, TIMESTAMP_FORMAT};

/// Two-decimal money value followed by the configured currency symbol.
pub fn format_money(value: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format!("{value:.2}")
    } else {
        format!("{value:.2} {symbol}")
    }
}

/// One numbered history row: `1. 2024-03-01 09:15 | +1000.00 ₽ | salary (income)`.
pub fn format_history_line(position: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}. {} | {}{} | {} ({})",
        position,
        txn.timestamp().format(TIMESTAMP_FORMAT),
        txn.kind().sign(),
        format_money(txn.amount(), symbol),
        txn.category(),
        txn.kind()
    )
}
