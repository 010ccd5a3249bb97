//! P9 annual tax card aggregation.
//!
//! A P9 card lists a single employee's monthly pay and tax for a year. It is
//! built either from up to twelve monthly breakdowns or, when pay is flat,
//! from one breakdown repeated across the year.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{P9Row, P9Summary, PayrollBreakdown};

/// Months in a tax year.
pub const MONTHS_PER_YEAR: u32 = 12;

fn row_from_breakdown(month: u32, b: &PayrollBreakdown) -> P9Row {
    P9Row {
        month,
        basic_salary: b.basic_salary,
        benefits: b.benefits_total(),
        gross_pay: b.gross_salary,
        retirement_contribution: b.nssf_employee,
        shif: b.shif_employee,
        housing_levy: b.ahl_employee,
        chargeable_pay: b.taxable_income,
        tax_charged: b.paye_before_relief,
        relief_applied: b.relief_applied(),
        paye: b.paye_after_relief,
    }
}

fn sum_rows(rows: &[P9Row]) -> P9Row {
    rows.iter().fold(P9Row::default(), |mut acc, row| {
        acc.basic_salary += row.basic_salary;
        acc.benefits += row.benefits;
        acc.gross_pay += row.gross_pay;
        acc.retirement_contribution += row.retirement_contribution;
        acc.shif += row.shif;
        acc.housing_levy += row.housing_levy;
        acc.chargeable_pay += row.chargeable_pay;
        acc.tax_charged += row.tax_charged;
        acc.relief_applied += row.relief_applied;
        acc.paye += row.paye;
        acc
    })
}

/// Builds a P9 card from `(month, breakdown)` pairs.
///
/// Rows are ordered by month regardless of input order. Months outside
/// 1..=12 and repeated months are rejected. Months with no entry are simply
/// absent from the card.
pub fn build_p9_summary(
    employee_id: &str,
    year: i32,
    months: &[(u32, PayrollBreakdown)],
) -> EngineResult<P9Summary> {
    let mut by_month: BTreeMap<u32, P9Row> = BTreeMap::new();

    for (month, breakdown) in months {
        if !(1..=MONTHS_PER_YEAR).contains(month) {
            return Err(EngineError::InvalidPayPeriod {
                message: format!("month {} is out of range for P9 {}", month, year),
            });
        }
        if by_month
            .insert(*month, row_from_breakdown(*month, breakdown))
            .is_some()
        {
            return Err(EngineError::InvalidPayPeriod {
                message: format!("month {} appears more than once in P9 {}", month, year),
            });
        }
    }

    let rows: Vec<P9Row> = by_month.into_values().collect();
    let totals = sum_rows(&rows);

    Ok(P9Summary {
        employee_id: employee_id.to_string(),
        year,
        rows,
        totals,
    })
}

/// Builds a P9 card by repeating one monthly breakdown for all twelve months.
pub fn annualize_breakdown(employee_id: &str, year: i32, breakdown: &PayrollBreakdown) -> P9Summary {
    let rows: Vec<P9Row> = (1..=MONTHS_PER_YEAR)
        .map(|month| row_from_breakdown(month, breakdown))
        .collect();
    let totals = sum_rows(&rows);

    P9Summary {
        employee_id: employee_id.to_string(),
        year,
        rows,
        totals,
    }
}
