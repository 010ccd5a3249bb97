//! Configuration types for payroll settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::PayrollSettings;

/// Metadata about the jurisdiction the settings apply to.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Country code (e.g., "KE").
    pub code: String,
    /// Human-readable name of the rule set.
    pub name: String,
    /// The authority that publishes the rates.
    pub authority: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// One settings file: a versioned snapshot and the date it takes effect.
#[derive(Debug, Clone, Deserialize)]
pub struct EffectiveSettings {
    /// Version label recorded on every calculation that uses this snapshot.
    pub version: String,
    /// First date the snapshot applies to.
    pub effective_date: NaiveDate,
    /// The rates, caps and brackets.
    pub settings: PayrollSettings,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Settings snapshots (sorted oldest first).
    snapshots: Vec<EffectiveSettings>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig, sorting snapshots by effective date.
    pub fn new(metadata: JurisdictionMetadata, snapshots: Vec<EffectiveSettings>) -> Self {
        let mut sorted = snapshots;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            snapshots: sorted,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns all snapshots, oldest first.
    pub fn snapshots(&self) -> &[EffectiveSettings] {
        &self.snapshots
    }
}
