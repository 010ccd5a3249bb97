//! Progressive PAYE bracket application.
//!
//! Brackets are walked in the order supplied and each band taxes the slice of
//! income that falls inside it at its own marginal rate. The bands are not
//! sorted or validated here; see [`crate::config::validate_settings`].
//!
//! The first bounded band is `max - min` wide, so `[0, 24000]` holds exactly
//! 24 000. Every later bounded band is `max - min + 1` wide, counting both
//! integer edges. With the usual schedule (`0..=24000`, `24001..=32333`, ...)
//! this gives widths of 24 000, 8 333, and so on. Gaps or overlaps between
//! bands are taken as written.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// The portion of income taxed in one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketAllocation {
    /// 1-based band number.
    pub band: usize,
    /// Lower edge of the band.
    pub lower: Decimal,
    /// Upper edge of the band, `None` for the top band.
    pub upper: Option<Decimal>,
    /// Marginal rate of the band.
    pub rate: Decimal,
    /// Income taxed in this band.
    pub taxable_amount: Decimal,
    /// Tax contributed by this band.
    pub tax: Decimal,
}

fn band_width(index: usize, bracket: &TaxBracket) -> Option<Decimal> {
    bracket.max.map(|max| {
        if index == 0 {
            max - bracket.min
        } else {
            max - bracket.min + Decimal::ONE
        }
    })
}

fn amount_in_band(remaining: Decimal, index: usize, bracket: &TaxBracket) -> Decimal {
    match band_width(index, bracket) {
        None => remaining,
        Some(width) => remaining.min(width),
    }
}

/// Applies the bracket schedule to `taxable_income`, returning pre-relief PAYE.
///
/// Returns zero when `taxable_income` is zero or negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_tax_brackets;
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     TaxBracket::bounded(dec!(0), dec!(24000), dec!(0.10)),
///     TaxBracket::unbounded(dec!(24001), dec!(0.25)),
/// ];
///
/// assert_eq!(apply_tax_brackets(dec!(45625), &brackets), dec!(7806.25));
/// assert_eq!(apply_tax_brackets(dec!(-10), &brackets), dec!(0));
/// ```
pub fn apply_tax_brackets(taxable_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut remaining = taxable_income;
    let mut tax = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_in_band = amount_in_band(remaining, index, bracket);

        tax += taxable_in_band * bracket.rate;
        remaining -= taxable_in_band;
    }

    tax
}

/// Walks the schedule like [`apply_tax_brackets`] and reports every band touched.
///
/// The allocation taxes always sum to the value `apply_tax_brackets` returns.
pub fn allocate_tax_brackets(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Vec<BracketAllocation> {
    let mut remaining = taxable_income;
    let mut allocations = Vec::new();

    for (index, bracket) in brackets.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_in_band = amount_in_band(remaining, index, bracket);

        allocations.push(BracketAllocation {
            band: index + 1,
            lower: bracket.min,
            upper: bracket.max,
            rate: bracket.rate,
            taxable_amount: taxable_in_band,
            tax: taxable_in_band * bracket.rate,
        });

        remaining -= taxable_in_band;
    }

    allocations
}
