//! Statutory rate settings.
//!
//! [`PayrollSettings`] is a read-only snapshot of the rates, caps and PAYE
//! brackets in force for a period. The calculator never mutates it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single PAYE band.
///
/// `max: None` marks the unbounded top band.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let top = TaxBracket::unbounded(Decimal::new(800001, 0), Decimal::new(35, 2));
/// assert!(top.is_unbounded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the band.
    pub min: Decimal,
    /// Upper bound of the band, or `None` for the top band.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal rate applied within the band.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bounded band.
    pub fn bounded(min: Decimal, max: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    /// Creates the unbounded top band.
    pub fn unbounded(min: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }

    /// Returns true if the band has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

/// Rates, caps and brackets for one effective-dated settings version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Flat monthly PAYE relief.
    pub personal_relief: Decimal,
    /// NSSF employee rate.
    pub nssf_employee_rate: Decimal,
    /// NSSF employer rate.
    pub nssf_employer_rate: Decimal,
    /// Cap applied to each side of the NSSF contribution.
    pub nssf_max_contribution: Decimal,
    /// SHIF employee rate.
    pub shif_employee_rate: Decimal,
    /// SHIF employer rate, zero under current law.
    #[serde(default)]
    pub shif_employer_rate: Decimal,
    /// Housing levy employee rate.
    pub ahl_employee_rate: Decimal,
    /// Housing levy employer rate.
    pub ahl_employer_rate: Decimal,
    /// PAYE bands, ascending by `min`, last one unbounded.
    pub paye_brackets: Vec<TaxBracket>,
}
