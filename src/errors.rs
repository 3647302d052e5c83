use rustyline::error::ReadlineError;
use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed ledger data: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// True for failures caused by user input, which the shell reports and survives.
    pub fn is_input_error(&self) -> bool {
        matches!(self, LedgerError::InvalidAmount(_))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Input error: {0}")]
    Readline(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Io(io) => CliError::Io(io),
            other => CliError::Readline(other.to_string()),
        }
    }
}
