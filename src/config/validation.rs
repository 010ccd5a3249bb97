//! One-time validation of settings snapshots.
//!
//! The calculator trusts its settings, so every snapshot is checked here when
//! it is loaded rather than on each calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollSettings;

fn invalid(field: impl Into<String>, message: impl Into<String>) -> EngineError {
    EngineError::InvalidSettings {
        field: field.into(),
        message: message.into(),
    }
}

fn check_rate(field: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(invalid(field, format!("rate {} must be between 0 and 1", rate)));
    }
    Ok(())
}

fn check_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(invalid(field, format!("amount {} must not be negative", amount)));
    }
    Ok(())
}

/// Validates a settings snapshot.
///
/// Checks that:
/// - every rate is within [0, 1]
/// - personal relief and the NSSF cap are not negative
/// - there is at least one PAYE bracket, the first starting at or above zero
/// - bounded brackets have `max >= min`
/// - each bracket starts one above the previous `max`
/// - only the last bracket, and always the last bracket, is unbounded
///
/// # Examples
///
/// ```
/// use payroll_engine::config::validate_settings;
/// use payroll_engine::models::{PayrollSettings, TaxBracket};
/// use rust_decimal_macros::dec;
///
/// let mut settings = PayrollSettings {
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
/// assert!(validate_settings(&settings).is_ok());
///
/// settings.paye_brackets.pop();
/// assert!(validate_settings(&settings).is_err());
/// ```
pub fn validate_settings(settings: &PayrollSettings) -> EngineResult<()> {
    check_non_negative("personal_relief", settings.personal_relief)?;
    check_non_negative("nssf_max_contribution", settings.nssf_max_contribution)?;
    check_rate("nssf_employee_rate", settings.nssf_employee_rate)?;
    check_rate("nssf_employer_rate", settings.nssf_employer_rate)?;
    check_rate("shif_employee_rate", settings.shif_employee_rate)?;
    check_rate("shif_employer_rate", settings.shif_employer_rate)?;
    check_rate("ahl_employee_rate", settings.ahl_employee_rate)?;
    check_rate("ahl_employer_rate", settings.ahl_employer_rate)?;

    let brackets = &settings.paye_brackets;
    let Some(first) = brackets.first() else {
        return Err(invalid("paye_brackets", "at least one bracket is required"));
    };
    check_non_negative("paye_brackets[0].min", first.min)?;

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        let field = format!("paye_brackets[{}]", index);
        check_rate(&format!("{}.rate", field), bracket.rate)?;

        match bracket.max {
            Some(max) if max < bracket.min => {
                return Err(invalid(
                    field,
                    format!("max {} is below min {}", max, bracket.min),
                ));
            }
            None if index != last_index => {
                return Err(invalid(field, "only the last bracket may be unbounded"));
            }
            Some(_) if index == last_index => {
                return Err(invalid(field, "the last bracket must be unbounded"));
            }
            _ => {}
        }

        if index > 0 {
            // The previous bracket is bounded, checked on its own iteration.
            let previous_max = brackets[index - 1].max.unwrap_or(bracket.min);
            if bracket.min != previous_max + Decimal::ONE {
                return Err(invalid(
                    field,
                    format!(
                        "min {} does not continue from previous max {}",
                        bracket.min, previous_max
                    ),
                ));
            }
        }
    }

    Ok(())
}
