//! P9 annual tax deduction card.
//!
//! A [`P9Summary`] lists one [`P9Row`] per month of the year for a single
//! employee, plus a totals row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month (or the totals line) on a P9 card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct P9Row {
    /// Month number 1 to 12. Zero on the totals row.
    pub month: u32,
    /// Basic salary.
    pub basic_salary: Decimal,
    /// Allowances, bonuses and overtime.
    pub benefits: Decimal,
    /// Total gross pay.
    pub gross_pay: Decimal,
    /// Employee NSSF, the retirement contribution column.
    pub retirement_contribution: Decimal,
    /// Employee SHIF.
    pub shif: Decimal,
    /// Employee housing levy.
    pub housing_levy: Decimal,
    /// Chargeable pay (taxable income).
    pub chargeable_pay: Decimal,
    /// Tax charged before relief.
    pub tax_charged: Decimal,
    /// Personal relief actually consumed.
    pub relief_applied: Decimal,
    /// PAYE withheld.
    pub paye: Decimal,
}

/// The annual P9 card for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P9Summary {
    /// The employee the card belongs to.
    pub employee_id: String,
    /// The tax year.
    pub year: i32,
    /// Monthly rows, ascending by month.
    pub rows: Vec<P9Row>,
    /// Sum of all rows.
    pub totals: P9Row,
}
