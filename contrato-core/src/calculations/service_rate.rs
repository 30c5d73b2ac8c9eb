//! Services-contract rate calculation from an indefinite-term salary.
//!
//! Converts a monthly base salary under a Colombian indefinite-term labor
//! contract into the equivalent monthly rate to request under a
//! services-rendered contract, where the contractor bears the
//! social-security contributions and forgoes social benefits.
//!
//! # Calculation Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Contribution base: base salary × 40% |
//! | 2    | Health contribution: contribution base × health ratio |
//! | 3    | Pension contribution: contribution base × pension ratio |
//! | 4    | Work-risk contribution: contribution base × work-risk ratio |
//! | 5    | Social-security cost: steps 2 + 3 + 4 |
//! | 6    | Social-benefits cost: base salary × benefits ratio |
//! | 7    | Total rate: base salary + steps 5 + 6 |
//!
//! The contribution base is always 40% of the salary, per the Colombian
//! minimum-contribution-base rule for independent contractors.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use contrato_core::{ContributionRates, ServiceRateCalculator};
//!
//! let calculator = ServiceRateCalculator::new(ContributionRates::default());
//! let quote = calculator.calculate(dec!(2500000.00)).unwrap();
//!
//! assert_eq!(quote.social_security_cost, dec!(295000.00));
//! assert_eq!(quote.benefits_cost, dec!(875000.00));
//! assert_eq!(quote.total_rate, dec!(3670000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{CONTRIBUTION_BASE_FACTOR, ContributionRates, RatesError};

/// Errors that can occur when quoting a services-contract rate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceRateError {
    /// One of the contribution ratios is outside [0, 1].
    #[error("invalid contribution rates: {0}")]
    InvalidRates(#[from] RatesError),

    /// The base salary must be non-negative.
    #[error("base salary must be non-negative, got {0}")]
    NegativeSalary(Decimal),
}

/// Result of a services-contract rate calculation.
///
/// Carries the total rate together with every intermediate line, so a
/// front end can render the full cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRateQuote {
    /// Amount on which social-security contributions are calculated
    /// (40% of the base salary).
    pub contribution_base: Decimal,

    /// Health contribution (contribution base × health ratio).
    pub health: Decimal,

    /// Pension contribution (contribution base × pension ratio).
    pub pension: Decimal,

    /// Work-risk contribution (contribution base × work-risk ratio).
    pub work_risk: Decimal,

    /// Total social-security cost (health + pension + work risk).
    pub social_security_cost: Decimal,

    /// Social-benefits cost (base salary × benefits ratio).
    pub benefits_cost: Decimal,

    /// Monthly rate to request under a services contract
    /// (base salary + social security + benefits).
    pub total_rate: Decimal,
}

/// Calculator for the salary-to-service-rate direction of the equivalence.
///
/// Holds an immutable set of [`ContributionRates`]; each call to
/// [`calculate`](Self::calculate) is an independent pure computation.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrato_core::{ContributionRates, ServiceRateCalculator};
///
/// let rates = ContributionRates {
///     benefits_ratio: dec!(0.35),
///     health_ratio: dec!(0.125),
///     pension_ratio: dec!(0.16),
///     work_risk_ratio: dec!(0.01),
/// };
///
/// let calculator = ServiceRateCalculator::new(rates);
/// let quote = calculator.calculate(dec!(2500000.00)).unwrap();
///
/// assert_eq!(quote.contribution_base, dec!(1000000.00));
/// assert_eq!(quote.health, dec!(125000.00));
/// assert_eq!(quote.pension, dec!(160000.00));
/// assert_eq!(quote.work_risk, dec!(10000.00));
/// ```
#[derive(Debug, Clone)]
pub struct ServiceRateCalculator {
    rates: ContributionRates,
}

impl ServiceRateCalculator {
    /// Creates a new calculator with the given contribution rates.
    pub fn new(rates: ContributionRates) -> Self {
        Self { rates }
    }

    /// Returns the contribution rates this calculator was built with.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Calculates the equivalent services-contract rate for a base salary.
    ///
    /// Each monetary line is rounded to two decimal places, half-up. This
    /// includes the contribution base itself, so the individual
    /// contributions are taken from the rounded base rather than the raw
    /// 40% product.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRateError`] if the rates are outside [0, 1] or the
    /// salary is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use contrato_core::{ContributionRates, ServiceRateCalculator};
    ///
    /// let calculator = ServiceRateCalculator::new(ContributionRates::default());
    /// let quote = calculator.calculate(dec!(2500000.00)).unwrap();
    ///
    /// assert_eq!(quote.total_rate, dec!(3670000.00));
    /// ```
    pub fn calculate(&self, base_salary: Decimal) -> Result<ServiceRateQuote, ServiceRateError> {
        self.rates.validate()?;

        if base_salary < Decimal::ZERO {
            return Err(ServiceRateError::NegativeSalary(base_salary));
        }
        if base_salary.is_zero() {
            warn!("base salary is zero; quote will be all zeros");
        }

        // Step 1: contribution base, always 40% of the salary
        let contribution_base = round_half_up(base_salary * CONTRIBUTION_BASE_FACTOR);

        // Steps 2-4: individual social-security contributions
        let health = round_half_up(contribution_base * self.rates.health_ratio);
        let pension = round_half_up(contribution_base * self.rates.pension_ratio);
        let work_risk = round_half_up(contribution_base * self.rates.work_risk_ratio);

        // Step 5: total social-security cost
        let social_security_cost = health + pension + work_risk;

        // Step 6: social benefits on the full salary
        let benefits_cost = round_half_up(base_salary * self.rates.benefits_ratio);

        // Step 7: total rate to request
        let total_rate = base_salary + social_security_cost + benefits_cost;

        Ok(ServiceRateQuote {
            contribution_base,
            health,
            pension,
            work_risk,
            social_security_cost,
            benefits_cost,
            total_rate,
        })
    }
}
