//! Gross-to-net payroll calculation.
//!
//! [`calculate_payroll`] turns one employee's compensation for a month into a
//! [`PayrollBreakdown`] under the supplied [`PayrollSettings`]. It performs no
//! I/O, holds no state, and never fails: out-of-range inputs or settings flow
//! through the arithmetic unchanged. Validation belongs to the settings loader
//! and the request layer.

use rust_decimal::Decimal;

use crate::models::{CategoryAmounts, EmployeeCompensationInput, PayrollBreakdown, PayrollSettings};

use super::progressive_tax::apply_tax_brackets;

/// Sums a category map, counting `None` entries as zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sum_categories;
/// use payroll_engine::models::CategoryAmounts;
/// use rust_decimal_macros::dec;
///
/// let mut amounts = CategoryAmounts::new();
/// amounts.insert("housing".to_string(), Some(dec!(8000)));
/// amounts.insert("transport".to_string(), None);
/// amounts.insert("medical".to_string(), Some(dec!(1500.50)));
///
/// assert_eq!(sum_categories(&amounts), dec!(9500.50));
/// ```
pub fn sum_categories(amounts: &CategoryAmounts) -> Decimal {
    amounts.values().flatten().sum()
}

/// Calculates the full statutory breakdown for one employee and one period.
///
/// NSSF is `gross x rate` capped at `nssf_max_contribution` on each side.
/// SHIF and AHL are uncapped percentages of gross. Only the employee NSSF and
/// SHIF reduce taxable income. Personal relief cannot push PAYE below zero,
/// but net salary is returned as computed even when negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::{EmployeeCompensationInput, PayrollSettings, TaxBracket};
/// use rust_decimal_macros::dec;
///
/// let settings = PayrollSettings {
///     personal_relief: dec!(2400),
///     nssf_employee_rate: dec!(0.06),
///     nssf_employer_rate: dec!(0.06),
///     nssf_max_contribution: dec!(4320),
///     shif_employee_rate: dec!(0.0275),
///     shif_employer_rate: dec!(0),
///     ahl_employee_rate: dec!(0.015),
///     ahl_employer_rate: dec!(0.015),
///     paye_brackets: vec![
///         TaxBracket::bounded(dec!(0), dec!(24000), dec!(0.10)),
///         TaxBracket::unbounded(dec!(24001), dec!(0.25)),
///     ],
/// };
///
/// let input = EmployeeCompensationInput::with_basic_salary(dec!(50000));
/// let breakdown = calculate_payroll(&input, &settings);
///
/// assert_eq!(breakdown.taxable_income, dec!(45625));
/// assert_eq!(breakdown.net_salary, dec!(39468.75));
/// ```
pub fn calculate_payroll(
    employee: &EmployeeCompensationInput,
    settings: &PayrollSettings,
) -> PayrollBreakdown {
    let allowances_total = sum_categories(&employee.allowances);
    let voluntary_deductions_total = sum_categories(&employee.voluntary_deductions);

    let gross_salary =
        employee.basic_salary + allowances_total + employee.bonuses + employee.overtime;

    let nssf_employee =
        (gross_salary * settings.nssf_employee_rate).min(settings.nssf_max_contribution);
    let nssf_employer =
        (gross_salary * settings.nssf_employer_rate).min(settings.nssf_max_contribution);

    let shif_employee = gross_salary * settings.shif_employee_rate;
    let shif_employer = gross_salary * settings.shif_employer_rate;

    let ahl_employee = gross_salary * settings.ahl_employee_rate;
    let ahl_employer = gross_salary * settings.ahl_employer_rate;

    let helb = employee.helb_amount;

    let taxable_income = gross_salary - nssf_employee - shif_employee;
    let paye_before_relief = apply_tax_brackets(taxable_income, &settings.paye_brackets);
    let paye_after_relief = (paye_before_relief - settings.personal_relief).max(Decimal::ZERO);

    let total_deductions = nssf_employee
        + shif_employee
        + ahl_employee
        + helb
        + voluntary_deductions_total
        + paye_after_relief;
    let net_salary = gross_salary - total_deductions;
    let total_employer_cost = gross_salary + nssf_employer + shif_employer + ahl_employer;

    PayrollBreakdown {
        gross_salary,
        basic_salary: employee.basic_salary,
        allowances_total,
        overtime: employee.overtime,
        bonuses: employee.bonuses,
        nssf_employee,
        nssf_employer,
        shif_employee,
        shif_employer,
        ahl_employee,
        ahl_employer,
        helb,
        voluntary_deductions_total,
        taxable_income,
        paye_before_relief,
        personal_relief: settings.personal_relief,
        paye_after_relief,
        total_deductions,
        net_salary,
        total_employer_cost,
    }
}
