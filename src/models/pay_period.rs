//! Monthly pay period model.
//!
//! Payroll runs are monthly, so a [`PayPeriod`] is a calendar year and month.
//! Its start date is what selects the effective settings snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A monthly pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod { year: 2025, month: 3 };
/// assert_eq!(period.start_date().unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 to 12.
    pub month: u32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let period = Self { year, month };
        period.start_date()?;
        Ok(period)
    }

    /// Returns the first day of the period.
    pub fn start_date(&self) -> EngineResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            EngineError::InvalidPayPeriod {
                message: format!("{}-{:02} is not a valid month", self.year, self.month),
            }
        })
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
