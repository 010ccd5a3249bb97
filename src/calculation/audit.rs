//! Audit trace for a payroll breakdown.
//!
//! The trace is rebuilt from a finished [`PayrollBreakdown`] and the settings
//! it was computed under, so the calculator itself stays free of bookkeeping.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditTrace, AuditWarning, PayrollBreakdown, PayrollSettings};

use super::progressive_tax::allocate_tax_brackets;

/// Warning code raised when deductions exceed gross salary.
pub const NEGATIVE_NET_SALARY: &str = "NEGATIVE_NET_SALARY";
/// Warning code raised when either NSSF contribution hit the cap.
pub const NSSF_CAP_APPLIED: &str = "NSSF_CAP_APPLIED";
/// Warning code raised when personal relief exceeds the pre-relief tax.
pub const RELIEF_EXCEEDS_TAX: &str = "RELIEF_EXCEEDS_TAX";

fn fmt(value: Decimal) -> String {
    value.normalize().to_string()
}

struct StepBuilder {
    steps: Vec<AuditStep>,
}

impl StepBuilder {
    fn push(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        statute_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            statute_ref: statute_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }
}

/// Builds the step-by-step explanation of a breakdown.
///
/// `duration_us` is left at zero for the caller to fill in.
pub fn explain_breakdown(breakdown: &PayrollBreakdown, settings: &PayrollSettings) -> AuditTrace {
    let b = breakdown;
    let mut builder = StepBuilder { steps: Vec::new() };

    builder.push(
        "gross_salary",
        "Gross Salary",
        "Employment Act 2007",
        serde_json::json!({
            "basic_salary": fmt(b.basic_salary),
            "allowances_total": fmt(b.allowances_total),
            "bonuses": fmt(b.bonuses),
            "overtime": fmt(b.overtime)
        }),
        serde_json::json!({ "gross_salary": fmt(b.gross_salary) }),
        format!(
            "{} + {} + {} + {} = {}",
            fmt(b.basic_salary),
            fmt(b.allowances_total),
            fmt(b.bonuses),
            fmt(b.overtime),
            fmt(b.gross_salary)
        ),
    );

    let nssf_capped = b.gross_salary * settings.nssf_employee_rate
        > settings.nssf_max_contribution
        || b.gross_salary * settings.nssf_employer_rate > settings.nssf_max_contribution;
    builder.push(
        "nssf",
        "NSSF Contribution",
        "NSSF Act 2013",
        serde_json::json!({
            "gross_salary": fmt(b.gross_salary),
            "employee_rate": fmt(settings.nssf_employee_rate),
            "employer_rate": fmt(settings.nssf_employer_rate),
            "max_contribution": fmt(settings.nssf_max_contribution)
        }),
        serde_json::json!({
            "nssf_employee": fmt(b.nssf_employee),
            "nssf_employer": fmt(b.nssf_employer),
            "cap_applied": nssf_capped
        }),
        format!(
            "min({} x {}, {}) = {} employee; min({} x {}, {}) = {} employer",
            fmt(b.gross_salary),
            fmt(settings.nssf_employee_rate),
            fmt(settings.nssf_max_contribution),
            fmt(b.nssf_employee),
            fmt(b.gross_salary),
            fmt(settings.nssf_employer_rate),
            fmt(settings.nssf_max_contribution),
            fmt(b.nssf_employer)
        ),
    );

    builder.push(
        "shif",
        "SHIF Contribution",
        "Social Health Insurance Act 2023",
        serde_json::json!({
            "gross_salary": fmt(b.gross_salary),
            "employee_rate": fmt(settings.shif_employee_rate),
            "employer_rate": fmt(settings.shif_employer_rate)
        }),
        serde_json::json!({
            "shif_employee": fmt(b.shif_employee),
            "shif_employer": fmt(b.shif_employer)
        }),
        format!(
            "{} x {} = {} employee; {} x {} = {} employer",
            fmt(b.gross_salary),
            fmt(settings.shif_employee_rate),
            fmt(b.shif_employee),
            fmt(b.gross_salary),
            fmt(settings.shif_employer_rate),
            fmt(b.shif_employer)
        ),
    );

    builder.push(
        "ahl",
        "Affordable Housing Levy",
        "Affordable Housing Act 2024",
        serde_json::json!({
            "gross_salary": fmt(b.gross_salary),
            "employee_rate": fmt(settings.ahl_employee_rate),
            "employer_rate": fmt(settings.ahl_employer_rate)
        }),
        serde_json::json!({
            "ahl_employee": fmt(b.ahl_employee),
            "ahl_employer": fmt(b.ahl_employer)
        }),
        format!(
            "{} x {} = {} employee; {} x {} = {} employer",
            fmt(b.gross_salary),
            fmt(settings.ahl_employee_rate),
            fmt(b.ahl_employee),
            fmt(b.gross_salary),
            fmt(settings.ahl_employer_rate),
            fmt(b.ahl_employer)
        ),
    );

    builder.push(
        "taxable_income",
        "Taxable Income",
        "Income Tax Act Cap 470",
        serde_json::json!({
            "gross_salary": fmt(b.gross_salary),
            "nssf_employee": fmt(b.nssf_employee),
            "shif_employee": fmt(b.shif_employee)
        }),
        serde_json::json!({ "taxable_income": fmt(b.taxable_income) }),
        format!(
            "{} - {} - {} = {}",
            fmt(b.gross_salary),
            fmt(b.nssf_employee),
            fmt(b.shif_employee),
            fmt(b.taxable_income)
        ),
    );

    for allocation in allocate_tax_brackets(b.taxable_income, &settings.paye_brackets) {
        let upper = allocation
            .upper
            .map(fmt)
            .unwrap_or_else(|| "unbounded".to_string());
        builder.push(
            &format!("paye_band_{}", allocation.band),
            &format!("PAYE Band {}", allocation.band),
            "Income Tax Act Cap 470, Third Schedule",
            serde_json::json!({
                "lower": fmt(allocation.lower),
                "upper": upper,
                "rate": fmt(allocation.rate)
            }),
            serde_json::json!({
                "taxable_amount": fmt(allocation.taxable_amount),
                "tax": fmt(allocation.tax)
            }),
            format!(
                "{} x {} = {}",
                fmt(allocation.taxable_amount),
                fmt(allocation.rate),
                fmt(allocation.tax)
            ),
        );
    }

    builder.push(
        "personal_relief",
        "Personal Relief",
        "Income Tax Act Cap 470, s.30",
        serde_json::json!({
            "paye_before_relief": fmt(b.paye_before_relief),
            "personal_relief": fmt(b.personal_relief)
        }),
        serde_json::json!({ "paye_after_relief": fmt(b.paye_after_relief) }),
        format!(
            "max({} - {}, 0) = {}",
            fmt(b.paye_before_relief),
            fmt(b.personal_relief),
            fmt(b.paye_after_relief)
        ),
    );

    builder.push(
        "net_salary",
        "Net Salary",
        "Employment Act 2007, s.19",
        serde_json::json!({
            "gross_salary": fmt(b.gross_salary),
            "total_deductions": fmt(b.total_deductions),
            "helb": fmt(b.helb),
            "voluntary_deductions_total": fmt(b.voluntary_deductions_total)
        }),
        serde_json::json!({
            "net_salary": fmt(b.net_salary),
            "total_employer_cost": fmt(b.total_employer_cost)
        }),
        format!(
            "{} - {} = {}",
            fmt(b.gross_salary),
            fmt(b.total_deductions),
            fmt(b.net_salary)
        ),
    );

    let mut warnings = Vec::new();
    if b.is_over_deducted() {
        warnings.push(AuditWarning {
            code: NEGATIVE_NET_SALARY.to_string(),
            message: format!(
                "Deductions of {} exceed gross salary of {}",
                fmt(b.total_deductions),
                fmt(b.gross_salary)
            ),
            severity: "high".to_string(),
        });
    }
    if nssf_capped {
        warnings.push(AuditWarning {
            code: NSSF_CAP_APPLIED.to_string(),
            message: format!(
                "NSSF limited to the maximum contribution of {}",
                fmt(settings.nssf_max_contribution)
            ),
            severity: "low".to_string(),
        });
    }
    if b.personal_relief > b.paye_before_relief {
        warnings.push(AuditWarning {
            code: RELIEF_EXCEEDS_TAX.to_string(),
            message: format!(
                "Personal relief of {} exceeds tax of {}; PAYE set to zero",
                fmt(b.personal_relief),
                fmt(b.paye_before_relief)
            ),
            severity: "low".to_string(),
        });
    }

    AuditTrace {
        steps: builder.steps,
        warnings,
        duration_us: 0,
    }
}
