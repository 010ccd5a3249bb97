//! Configuration loading and validation for the payroll engine.
//!
//! Settings are versioned, effective-dated YAML snapshots. Each one is
//! validated once at load time.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kenya").unwrap();
//! println!("Loaded rules: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;
mod validation;

pub use loader::ConfigLoader;
pub use types::{EffectiveSettings, JurisdictionMetadata, PayrollConfig};
pub use validation::validate_settings;
