use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{self, config_file_in, ensure_dir, ledger_file_in};
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ledger document; defaults to `finances.json` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
    pub currency_symbol: String,
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: None,
            currency_symbol: "₽".into(),
            history_limit: Ledger::DEFAULT_RECENT,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{}: {}", self.path.display(), err))
        })?;
        config.history_limit = config.history_limit.max(1);
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config).map_err(LedgerError::Serialize)?;
        utils::replace_file(&self.path, &json)?;
        Ok(())
    }

    /// Effective ledger document; relative paths resolve against the data directory.
    pub fn resolved_ledger_path(&self, config: &Config) -> PathBuf {
        match &config.ledger_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.base.join(path),
            None => ledger_file_in(&self.base),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }
}
