//! Gross-to-net payroll breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fully itemised result of one payroll calculation.
///
/// The calculator guarantees:
///
/// - `gross_salary = basic_salary + allowances_total + bonuses + overtime`
/// - `taxable_income = gross_salary - nssf_employee - shif_employee`
/// - `paye_after_relief = max(paye_before_relief - personal_relief, 0)`
/// - `total_deductions = nssf_employee + shif_employee + ahl_employee + helb
///   + voluntary_deductions_total + paye_after_relief`
/// - `net_salary = gross_salary - total_deductions`, which may be negative
/// - `total_employer_cost = gross_salary + nssf_employer + shif_employer + ahl_employer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Basic salary plus allowances, bonuses and overtime.
    pub gross_salary: Decimal,
    /// Fixed monthly base pay.
    pub basic_salary: Decimal,
    /// Sum of all allowance categories.
    pub allowances_total: Decimal,
    /// Overtime paid in the period.
    pub overtime: Decimal,
    /// Bonuses paid in the period.
    pub bonuses: Decimal,
    /// Employee NSSF contribution (capped).
    pub nssf_employee: Decimal,
    /// Employer NSSF contribution (capped).
    pub nssf_employer: Decimal,
    /// Employee SHIF contribution.
    pub shif_employee: Decimal,
    /// Employer SHIF contribution.
    pub shif_employer: Decimal,
    /// Employee housing levy.
    pub ahl_employee: Decimal,
    /// Employer housing levy.
    pub ahl_employer: Decimal,
    /// HELB loan repayment.
    pub helb: Decimal,
    /// Sum of all voluntary deduction categories.
    pub voluntary_deductions_total: Decimal,
    /// Income subject to PAYE.
    pub taxable_income: Decimal,
    /// PAYE from the bracket schedule, before relief.
    pub paye_before_relief: Decimal,
    /// Personal relief configured for the period.
    pub personal_relief: Decimal,
    /// PAYE actually withheld.
    pub paye_after_relief: Decimal,
    /// All employee-side deductions.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_salary: Decimal,
    /// Gross salary plus employer contributions.
    pub total_employer_cost: Decimal,
}

impl PayrollBreakdown {
    /// Allowances, bonuses and overtime: everything in gross besides basic salary.
    pub fn benefits_total(&self) -> Decimal {
        self.allowances_total + self.bonuses + self.overtime
    }

    /// Relief actually consumed, never more than the pre-relief tax.
    pub fn relief_applied(&self) -> Decimal {
        self.paye_before_relief - self.paye_after_relief
    }

    /// True when deductions exceed gross pay.
    pub fn is_over_deducted(&self) -> bool {
        self.net_salary < Decimal::ZERO
    }
}
