//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{EffectiveSettings, JurisdictionMetadata, PayrollConfig};
use super::validation::validate_settings;

/// Loads and provides access to payroll settings.
///
/// # Directory Structure
///
/// ```text
/// config/kenya/
/// ├── jurisdiction.yaml      # Jurisdiction metadata
/// └── settings/
///     ├── 2024-10-01.yaml    # Snapshot effective from this date
///     └── 2025-02-01.yaml
/// ```
///
/// Every snapshot is validated when loaded, so calculations never see
/// malformed rates or brackets.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kenya")?;
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let snapshot = loader.settings_for(date)?;
/// println!("Using settings {}", snapshot.version);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `jurisdiction.yaml` or the `settings` directory is missing
    /// - any file contains invalid YAML
    /// - the `settings` directory holds no snapshots
    /// - any snapshot fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;

        let settings_dir = path.join("settings");
        let snapshots = Self::load_snapshots(&settings_dir)?;

        info!(
            jurisdiction = %metadata.code,
            snapshots = snapshots.len(),
            "Loaded payroll configuration"
        );

        Ok(Self::from_config(PayrollConfig::new(metadata, snapshots)))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all snapshots from the settings directory.
    fn load_snapshots(settings_dir: &Path) -> EngineResult<Vec<EffectiveSettings>> {
        let settings_dir_str = settings_dir.display().to_string();

        let entries = fs::read_dir(settings_dir).map_err(|_| EngineError::ConfigNotFound {
            path: settings_dir_str.clone(),
        })?;

        let mut snapshots = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: settings_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let snapshot = Self::load_yaml::<EffectiveSettings>(&path)?;
                validate_settings(&snapshot.settings)?;
                debug!(
                    version = %snapshot.version,
                    effective_date = %snapshot.effective_date,
                    "Validated settings snapshot"
                );
                snapshots.push(snapshot);
            }
        }

        if snapshots.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no settings files found)", settings_dir_str),
            });
        }

        Ok(snapshots)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Gets the most recent snapshot effective on or before `date`.
    pub fn settings_for(&self, date: NaiveDate) -> EngineResult<&EffectiveSettings> {
        self.config
            .snapshots()
            .iter()
            .rfind(|s| s.effective_date <= date)
            .ok_or(EngineError::SettingsNotFound { date })
    }
}
