//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for single calculations, monthly
//! payroll runs with remittance totals, and annual P9 cards.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, P9MonthRequest, P9Request, PayrollRunEmployee, PayrollRunRequest,
};
pub use response::{ApiError, PayrollRunResponse};
pub use state::AppState;
