//! Integration tests for the payroll engine HTTP API.
//!
//! This test suite covers:
//! - The illustrative 50 000 basic salary scenario
//! - Relief exceeding tax
//! - Allowances and voluntary deductions with null entries
//! - NSSF cap and settings snapshot selection
//! - Negative net salary surfaced as-is
//! - Payroll runs with remittance totals
//! - P9 cards
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/kenya").expect("Failed to load config");
    create_router(AppState::new(config))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(employee_id: &str, year: i32, month: u32, compensation: Value) -> Value {
    json!({
        "employee_id": employee_id,
        "pay_period": { "year": year, "month": month },
        "compensation": compensation
    })
}

fn assert_amount(result: &Value, field: &str, expected: &str) {
    let actual = result["breakdown"][field]
        .as_str()
        .unwrap_or_else(|| panic!("breakdown.{} missing", field));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

fn has_warning(result: &Value, code: &str) -> bool {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w["code"] == code)
}

// =============================================================================
// SECTION 1: Single calculations
// =============================================================================

#[tokio::test]
async fn test_basic_salary_50000() {
    let router = create_router_for_test();
    let request = create_request("emp_001", 2025, 6, json!({ "basic_salary": "50000" }));

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["settings_version"], "2025.02");
    assert_amount(&result, "gross_salary", "50000");
    assert_amount(&result, "nssf_employee", "3000");
    assert_amount(&result, "shif_employee", "1375");
    assert_amount(&result, "ahl_employee", "750");
    assert_amount(&result, "taxable_income", "45625");
    // 24000 x 0.10 + 8333 x 0.25 + 13292 x 0.30
    assert_amount(&result, "paye_before_relief", "8470.85");
    assert_amount(&result, "paye_after_relief", "6070.85");
    assert_amount(&result, "total_deductions", "11195.85");
    assert_amount(&result, "net_salary", "38804.15");
    assert_amount(&result, "total_employer_cost", "53750");
}

#[tokio::test]
async fn test_relief_exceeds_tax() {
    let router = create_router_for_test();
    let request = create_request("emp_002", 2025, 6, json!({ "basic_salary": "20000" }));

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // taxable = 20000 - 1200 - 550 = 18250, tax 1825 < 2400
    assert_amount(&result, "paye_before_relief", "1825");
    assert_amount(&result, "paye_after_relief", "0");
    assert_amount(&result, "total_deductions", "2050");
    assert_amount(&result, "net_salary", "17950");
    assert!(has_warning(&result, "RELIEF_EXCEEDS_TAX"));
}

#[tokio::test]
async fn test_allowances_and_deductions_with_null_entries() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_003",
        2025,
        6,
        json!({
            "basic_salary": "40000",
            "allowances": { "housing": "8000", "transport": null, "medical": "2000" },
            "voluntary_deductions": { "insurance": "1200", "union": null },
            "helb_amount": "1500"
        }),
    );

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "allowances_total", "10000");
    assert_amount(&result, "voluntary_deductions_total", "1200");
    assert_amount(&result, "helb", "1500");
    assert_amount(&result, "gross_salary", "50000");
    assert_amount(&result, "total_deductions", "13895.85");
    assert_amount(&result, "net_salary", "36104.15");
}

#[tokio::test]
async fn test_nssf_cap_depends_on_settings_snapshot() {
    let before = create_request("emp_004", 2024, 12, json!({ "basic_salary": "100000" }));
    let after = create_request("emp_004", 2025, 3, json!({ "basic_salary": "100000" }));

    let (_, result_before) = post_json(create_router_for_test(), "/calculate", before).await;
    let (_, result_after) = post_json(create_router_for_test(), "/calculate", after).await;

    assert_eq!(result_before["settings_version"], "2024.10");
    assert_amount(&result_before, "nssf_employee", "2160");
    assert_amount(&result_before, "nssf_employer", "2160");
    assert_eq!(result_after["settings_version"], "2025.02");
    assert_amount(&result_after, "nssf_employee", "4320");
    assert!(has_warning(&result_after, "NSSF_CAP_APPLIED"));
}

#[tokio::test]
async fn test_negative_net_salary_is_not_clamped() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_005",
        2025,
        6,
        json!({
            "basic_salary": "10000",
            "voluntary_deductions": { "sacco_loan": "15000" }
        }),
    );

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 600 + 275 + 150 + 15000 = 16025
    assert_amount(&result, "total_deductions", "16025");
    assert_amount(&result, "net_salary", "-6025");
    assert!(has_warning(&result, "NEGATIVE_NET_SALARY"));
}

#[tokio::test]
async fn test_bonuses_and_overtime_enter_gross() {
    let router = create_router_for_test();
    let request = create_request(
        "emp_006",
        2025,
        6,
        json!({ "basic_salary": "30000", "bonuses": "5000", "overtime": "2000" }),
    );

    let (_, result) = post_json(router, "/calculate", request).await;

    assert_amount(&result, "gross_salary", "37000");
    assert_amount(&result, "bonuses", "5000");
    assert_amount(&result, "overtime", "2000");
}

#[tokio::test]
async fn test_audit_trace_lists_paye_bands() {
    let router = create_router_for_test();
    let request = create_request("emp_007", 2025, 6, json!({ "basic_salary": "50000" }));

    let (_, result) = post_json(router, "/calculate", request).await;

    let rule_ids: Vec<&str> = result["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert!(rule_ids.contains(&"paye_band_1"));
    assert!(rule_ids.contains(&"paye_band_3"));
    assert!(!rule_ids.contains(&"paye_band_4"));
}

// =============================================================================
// SECTION 2: Payroll runs
// =============================================================================

#[tokio::test]
async fn test_payroll_run_returns_remittance_totals() {
    let router = create_router_for_test();
    let request = json!({
        "pay_period": { "year": 2025, "month": 6 },
        "employees": [
            { "employee_id": "emp_001", "compensation": { "basic_salary": "50000" } },
            { "employee_id": "emp_002", "compensation": { "basic_salary": "20000" } },
            { "employee_id": "emp_003", "compensation": { "basic_salary": "100000", "helb_amount": "2000" } }
        ]
    });

    let (status, result) = post_json(router, "/payroll-run", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["results"].as_array().unwrap().len(), 3);
    assert_eq!(result["results"][2]["employee_id"], "emp_003");

    let remittance = &result["remittance"];
    assert_eq!(remittance["employee_count"], 3);
    assert_eq!(normalize_decimal(remittance["gross_total"].as_str().unwrap()), "170000");
    // 3000 + 1200 + 4320 per side
    assert_eq!(normalize_decimal(remittance["nssf_employee"].as_str().unwrap()), "8520");
    assert_eq!(normalize_decimal(remittance["nssf_total"].as_str().unwrap()), "17040");
    assert_eq!(normalize_decimal(remittance["shif_total"].as_str().unwrap()), "4675");
    assert_eq!(normalize_decimal(remittance["ahl_total"].as_str().unwrap()), "5100");
    assert_eq!(normalize_decimal(remittance["helb_total"].as_str().unwrap()), "2000");
}

#[tokio::test]
async fn test_empty_payroll_run() {
    let router = create_router_for_test();
    let request = json!({ "pay_period": { "year": 2025, "month": 6 }, "employees": [] });

    let (status, result) = post_json(router, "/payroll-run", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["remittance"]["employee_count"], 0);
}

// =============================================================================
// SECTION 3: P9 cards
// =============================================================================

#[tokio::test]
async fn test_p9_from_monthly_entries() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_001",
        "year": 2025,
        "months": [
            { "month": 7, "compensation": { "basic_salary": "50000" } },
            { "month": 6, "compensation": { "basic_salary": "50000" } }
        ]
    });

    let (status, result) = post_json(router, "/p9", request).await;

    assert_eq!(status, StatusCode::OK);
    let rows = result["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["month"], 6);
    assert_eq!(rows[1]["month"], 7);
    assert_eq!(normalize_decimal(result["totals"]["gross_pay"].as_str().unwrap()), "100000");
    assert_eq!(normalize_decimal(result["totals"]["paye"].as_str().unwrap()), "12141.7");
}

#[tokio::test]
async fn test_p9_flat_compensation_covers_twelve_months() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_001",
        "year": 2025,
        "compensation": { "basic_salary": "50000" }
    });

    let (status, result) = post_json(router, "/p9", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["rows"].as_array().unwrap().len(), 12);
    assert_eq!(normalize_decimal(result["totals"]["gross_pay"].as_str().unwrap()), "600000");
}

#[tokio::test]
async fn test_p9_duplicate_month_returns_400() {
    let router = create_router_for_test();
    let request = json!({
        "employee_id": "emp_001",
        "year": 2025,
        "months": [
            { "month": 3, "compensation": { "basic_salary": "50000" } },
            { "month": 3, "compensation": { "basic_salary": "60000" } }
        ]
    });

    let (status, result) = post_json(router, "/p9", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_p9_without_months_or_compensation_returns_400() {
    let router = create_router_for_test();
    let request = json!({ "employee_id": "emp_001", "year": 2025 });

    let (status, result) = post_json(router, "/p9", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 4: Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_month_returns_400() {
    let router = create_router_for_test();
    let request = create_request("emp_001", 2025, 13, json!({ "basic_salary": "50000" }));

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_period_before_any_settings_returns_422() {
    let router = create_router_for_test();
    let request = create_request("emp_001", 2019, 1, json!({ "basic_salary": "50000" }));

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "SETTINGS_NOT_FOUND");
}

#[tokio::test]
async fn test_missing_basic_salary_returns_validation_error() {
    let router = create_router_for_test();
    let request = create_request("emp_001", 2025, 6, json!({ "bonuses": "1000" }));

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_numeric_amount_returns_malformed_json() {
    let router = create_router_for_test();
    let request = create_request("emp_001", 2025, 6, json!({ "basic_salary": "lots" }));

    let (status, result) = post_json(router, "/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}
