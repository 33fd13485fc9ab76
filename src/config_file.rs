//! Application configuration file
//!
//! A small JSON document that says where the record databases live and how
//! loud logging is. Every field is optional in the file; missing ones take
//! the defaults below.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding both database files
    pub data_dir: PathBuf,
    pub personnel_db: String,
    pub supply_db: String,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            personnel_db: "personnel.db".to_string(),
            supply_db: "supply.db".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("data_dir must be specified");
        }

        for (key, name) in [("personnel_db", &self.personnel_db), ("supply_db", &self.supply_db)] {
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("{} must be specified", key);
            }
            if name.contains('/') || name.contains('\\') {
                anyhow::bail!("{} must be a file name, not a path", key);
            }
        }

        if self.personnel_db.trim() == self.supply_db.trim() {
            anyhow::bail!("personnel_db and supply_db must be different files");
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("log_level must be specified");
        }

        Ok(())
    }

    pub fn personnel_db_path(&self) -> PathBuf {
        self.data_dir.join(self.personnel_db.trim())
    }

    pub fn supply_db_path(&self) -> PathBuf {
        self.data_dir.join(self.supply_db.trim())
    }
}
