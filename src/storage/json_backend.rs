use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    core::utils::replace_file,
    errors::{LedgerError, Result},
    ledger::Ledger,
};

use super::StorageBackend;

/// File backend storing the ledger as a pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<Ledger>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ledger document on disk");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let ledger = serde_json::from_str(&data).map_err(LedgerError::Parse)?;
        Ok(Some(ledger))
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)?;
        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger).map_err(LedgerError::Serialize)?;
    replace_file(path, &json)?;
    Ok(())
}
