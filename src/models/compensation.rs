//! Employee compensation inputs.
//!
//! This module defines the raw per-period figures the calculator consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open-ended named amounts, such as allowances or voluntary deductions.
///
/// A `None` entry (JSON `null`) counts as zero.
pub type CategoryAmounts = BTreeMap<String, Option<Decimal>>;

/// The compensation figures for one employee in one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeCompensationInput;
/// use rust_decimal::Decimal;
///
/// let input: EmployeeCompensationInput = serde_json::from_str(r#"{
///     "basic_salary": "50000",
///     "allowances": { "housing": "8000", "transport": null }
/// }"#).unwrap();
///
/// assert_eq!(input.basic_salary, Decimal::new(50000, 0));
/// assert_eq!(input.bonuses, Decimal::ZERO);
/// assert!(input.voluntary_deductions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCompensationInput {
    /// Fixed monthly base pay.
    pub basic_salary: Decimal,
    /// Allowances by category (housing, transport, medical, ...).
    #[serde(default)]
    pub allowances: CategoryAmounts,
    /// Voluntary deductions by category (insurance, pension, union fees, loans, ...).
    #[serde(default)]
    pub voluntary_deductions: CategoryAmounts,
    /// Fixed HELB loan repayment.
    #[serde(default)]
    pub helb_amount: Decimal,
    /// Bonuses paid in this period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Overtime paid in this period.
    #[serde(default)]
    pub overtime: Decimal,
}

impl EmployeeCompensationInput {
    /// Creates an input with only a basic salary.
    pub fn with_basic_salary(basic_salary: Decimal) -> Self {
        Self {
            basic_salary,
            ..Self::default()
        }
    }
}
