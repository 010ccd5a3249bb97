//! Statutory payroll engine for Kenyan employers.
//!
//! This crate turns an employee's basic salary, allowances and deductions into
//! an itemised gross-to-net breakdown: NSSF, SHIF, the housing levy, HELB,
//! voluntary deductions and progressive PAYE after personal relief. It also
//! aggregates breakdowns into monthly remittance totals and annual P9 cards.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
