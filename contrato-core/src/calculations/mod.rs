//! Conversion calculations between Colombian contracting modalities.
//!
//! This module provides the two directions of the equivalence: from an
//! indefinite-term salary to a services-contract rate, and back.

pub mod base_salary;
pub mod common;
pub mod service_rate;

pub use base_salary::{BaseSalaryCalculator, BaseSalaryEquivalence, BaseSalaryError};
pub use service_rate::{ServiceRateCalculator, ServiceRateError, ServiceRateQuote};
