//! Monthly remittance totals across a payroll run.

use crate::models::{PayrollBreakdown, RemittanceTotals};

/// Sums the statutory amounts of every breakdown in a run.
///
/// Breakdowns are independent, so the order they arrive in does not matter.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_remittance_totals;
/// use payroll_engine::models::PayrollBreakdown;
/// use rust_decimal::Decimal;
///
/// let run: Vec<PayrollBreakdown> = Vec::new();
/// let totals = calculate_remittance_totals(&run);
/// assert_eq!(totals.employee_count, 0);
/// assert_eq!(totals.paye_total, Decimal::ZERO);
/// ```
pub fn calculate_remittance_totals<'a, I>(breakdowns: I) -> RemittanceTotals
where
    I: IntoIterator<Item = &'a PayrollBreakdown>,
{
    let mut totals = breakdowns
        .into_iter()
        .fold(RemittanceTotals::default(), |mut acc, b| {
            acc.employee_count += 1;
            acc.gross_total += b.gross_salary;
            acc.nssf_employee += b.nssf_employee;
            acc.nssf_employer += b.nssf_employer;
            acc.shif_employee += b.shif_employee;
            acc.shif_employer += b.shif_employer;
            acc.ahl_employee += b.ahl_employee;
            acc.ahl_employer += b.ahl_employer;
            acc.paye_total += b.paye_after_relief;
            acc.helb_total += b.helb;
            acc.voluntary_deductions_total += b.voluntary_deductions_total;
            acc.net_total += b.net_salary;
            acc.employer_cost_total += b.total_employer_cost;
            acc
        });

    totals.nssf_total = totals.nssf_employee + totals.nssf_employer;
    totals.shif_total = totals.shif_employee + totals.shif_employer;
    totals.ahl_total = totals.ahl_employee + totals.ahl_employer;
    totals
}
