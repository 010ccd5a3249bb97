//! Agency remittance totals for one pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Field-wise totals across every employee in a payroll run.
///
/// These are the amounts owed to NSSF, SHA (for SHIF), the housing levy
/// account, KRA (for PAYE) and HELB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemittanceTotals {
    /// Number of breakdowns summed.
    pub employee_count: u32,
    /// Total gross salary.
    pub gross_total: Decimal,
    /// Employee NSSF.
    pub nssf_employee: Decimal,
    /// Employer NSSF.
    pub nssf_employer: Decimal,
    /// NSSF remittance.
    pub nssf_total: Decimal,
    /// Employee SHIF.
    pub shif_employee: Decimal,
    /// Employer SHIF.
    pub shif_employer: Decimal,
    /// SHIF remittance.
    pub shif_total: Decimal,
    /// Employee housing levy.
    pub ahl_employee: Decimal,
    /// Employer housing levy.
    pub ahl_employer: Decimal,
    /// Housing levy remittance.
    pub ahl_total: Decimal,
    /// PAYE remittance.
    pub paye_total: Decimal,
    /// HELB remittance.
    pub helb_total: Decimal,
    /// Voluntary deductions withheld.
    pub voluntary_deductions_total: Decimal,
    /// Total net pay.
    pub net_total: Decimal,
    /// Total cost to the employer.
    pub employer_cost_total: Decimal,
}
