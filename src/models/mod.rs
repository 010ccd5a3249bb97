//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod calculation_result;
mod compensation;
mod p9;
mod pay_period;
mod remittance;
mod settings;

pub use breakdown::PayrollBreakdown;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, PayrollCalculationResult};
pub use compensation::{CategoryAmounts, EmployeeCompensationInput};
pub use p9::{P9Row, P9Summary};
pub use pay_period::PayPeriod;
pub use remittance::RemittanceTotals;
pub use settings::{PayrollSettings, TaxBracket};
