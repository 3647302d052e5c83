pub mod json_backend;

use std::path::Path;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over persistence backends holding the single ledger document.
pub trait StorageBackend: Send + Sync {
    /// Reads the stored ledger, or `None` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<Ledger>>;
    /// Overwrites the stored ledger in full.
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn path(&self) -> &Path;
}

pub use json_backend::JsonStorage;
