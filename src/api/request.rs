//! Request types for the payroll engine API.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeCompensationInput, PayPeriod};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The month being paid.
    pub pay_period: PayPeriod,
    /// The employee's compensation for the month.
    pub compensation: EmployeeCompensationInput,
}

/// One employee in a payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunEmployee {
    /// The employee identifier.
    pub employee_id: String,
    /// The employee's compensation for the month.
    pub compensation: EmployeeCompensationInput,
}

/// Request body for the `/payroll-run` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// The month being paid.
    pub pay_period: PayPeriod,
    /// Every employee on the payroll.
    pub employees: Vec<PayrollRunEmployee>,
}

/// One month of compensation on a P9 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P9MonthRequest {
    /// Month number 1 to 12.
    pub month: u32,
    /// The employee's compensation for that month.
    pub compensation: EmployeeCompensationInput,
}

/// Request body for the `/p9` endpoint.
///
/// Either list each month in `months`, or give a single `compensation` that
/// is repeated for the whole year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P9Request {
    /// The employee identifier.
    pub employee_id: String,
    /// The tax year.
    pub year: i32,
    /// Per-month compensation.
    #[serde(default)]
    pub months: Vec<P9MonthRequest>,
    /// Flat monthly compensation for the whole year.
    #[serde(default)]
    pub compensation: Option<EmployeeCompensationInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "pay_period": { "year": 2025, "month": 6 },
            "compensation": {
                "basic_salary": "50000",
                "allowances": { "housing": "5000" }
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.pay_period, PayPeriod { year: 2025, month: 6 });
        assert_eq!(request.compensation.basic_salary, dec!(50000));
    }

    #[test]
    fn test_p9_request_defaults() {
        let json = r#"{ "employee_id": "emp_001", "year": 2025 }"#;
        let request: P9Request = serde_json::from_str(json).unwrap();

        assert!(request.months.is_empty());
        assert!(request.compensation.is_none());
    }
}
