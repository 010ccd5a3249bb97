//! Calculation logic for the payroll engine.
//!
//! This module contains the progressive PAYE bracket walk, the gross-to-net
//! payroll calculator, the audit trace builder, and the reductions used for
//! monthly remittances and annual P9 cards.

mod audit;
mod p9;
mod payroll;
mod progressive_tax;
mod remittance;

pub use audit::{NEGATIVE_NET_SALARY, NSSF_CAP_APPLIED, RELIEF_EXCEEDS_TAX, explain_breakdown};
pub use p9::{MONTHS_PER_YEAR, annualize_breakdown, build_p9_summary};
pub use payroll::{calculate_payroll, sum_categories};
pub use progressive_tax::{BracketAllocation, allocate_tax_brackets, apply_tax_brackets};
pub use remittance::calculate_remittance_totals;
