//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    MONTHS_PER_YEAR, build_p9_summary, calculate_payroll, calculate_remittance_totals,
    explain_breakdown,
};
use crate::config::{ConfigLoader, EffectiveSettings};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeCompensationInput, P9Summary, PayPeriod, PayrollBreakdown, PayrollCalculationResult,
};

use super::request::{CalculationRequest, P9Request, PayrollRunRequest};
use super::response::{ApiError, ApiErrorResponse, PayrollRunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll-run", post(payroll_run_handler))
        .route("/p9", post(p9_handler))
        .with_state(state)
}

/// Turns a JSON body rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn ok_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /calculate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_calculation(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                pay_period = %result.pay_period,
                settings_version = %result.settings_version,
                net_salary = %result.breakdown.net_salary,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            ok_response(result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /payroll-run.
async fn payroll_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_payroll_run(&request, state.config()) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %run.run_id,
                pay_period = %run.pay_period,
                employees = run.remittance.employee_count,
                paye_total = %run.remittance.paye_total,
                "Payroll run completed successfully"
            );
            ok_response(run)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /p9.
async fn p9_handler(
    State(state): State<AppState>,
    payload: Result<Json<P9Request>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing P9 request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_p9(&request, state.config()) {
        Ok(card) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %card.employee_id,
                year = card.year,
                months = card.rows.len(),
                paye = %card.totals.paye,
                "P9 completed successfully"
            );
            ok_response(card)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Resolves the settings snapshot for a pay period.
fn settings_for_period(
    pay_period: PayPeriod,
    config: &ConfigLoader,
) -> EngineResult<&EffectiveSettings> {
    let start = pay_period.start_date()?;
    config.settings_for(start)
}

/// Calculates one employee against an already-resolved snapshot.
fn calculate_with_snapshot(
    employee_id: &str,
    pay_period: PayPeriod,
    compensation: &EmployeeCompensationInput,
    snapshot: &EffectiveSettings,
) -> PayrollCalculationResult {
    let start_time = Instant::now();

    let breakdown = calculate_payroll(compensation, &snapshot.settings);
    let mut audit_trace = explain_breakdown(&breakdown, &snapshot.settings);
    audit_trace.duration_us = start_time.elapsed().as_micros() as u64;

    PayrollCalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.to_string(),
        pay_period,
        settings_version: snapshot.version.clone(),
        breakdown,
        audit_trace,
    }
}

/// Performs the calculation for a single employee.
fn perform_calculation(
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollCalculationResult> {
    let snapshot = settings_for_period(request.pay_period, config)?;

    Ok(calculate_with_snapshot(
        &request.employee_id,
        request.pay_period,
        &request.compensation,
        snapshot,
    ))
}

/// Performs a payroll run for every employee in one month.
fn perform_payroll_run(
    request: &PayrollRunRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollRunResponse> {
    let snapshot = settings_for_period(request.pay_period, config)?;

    let results: Vec<PayrollCalculationResult> = request
        .employees
        .iter()
        .map(|employee| {
            calculate_with_snapshot(
                &employee.employee_id,
                request.pay_period,
                &employee.compensation,
                snapshot,
            )
        })
        .collect();

    let remittance = calculate_remittance_totals(results.iter().map(|r| &r.breakdown));

    Ok(PayrollRunResponse {
        run_id: Uuid::new_v4(),
        pay_period: request.pay_period,
        settings_version: snapshot.version.clone(),
        results,
        remittance,
    })
}

/// Builds a P9 card, using each month's own settings snapshot.
fn perform_p9(request: &P9Request, config: &ConfigLoader) -> EngineResult<P9Summary> {
    let monthly: Vec<(u32, &EmployeeCompensationInput)> =
        match (&request.compensation, request.months.is_empty()) {
            (Some(_), false) => {
                return Err(EngineError::InvalidRequest {
                    message: "provide either months or compensation, not both".to_string(),
                });
            }
            (None, true) => {
                return Err(EngineError::InvalidRequest {
                    message: "provide months or a flat monthly compensation".to_string(),
                });
            }
            (Some(compensation), true) => (1..=MONTHS_PER_YEAR)
                .map(|m| (m, compensation))
                .collect(),
            (None, false) => request
                .months
                .iter()
                .map(|m| (m.month, &m.compensation))
                .collect(),
        };

    let mut breakdowns: Vec<(u32, PayrollBreakdown)> = Vec::with_capacity(monthly.len());
    for (month, compensation) in monthly {
        let period = PayPeriod::new(request.year, month)?;
        let snapshot = settings_for_period(period, config)?;
        breakdowns.push((month, calculate_payroll(compensation, &snapshot.settings)));
    }

    build_p9_summary(&request.employee_id, request.year, &breakdowns)
}
