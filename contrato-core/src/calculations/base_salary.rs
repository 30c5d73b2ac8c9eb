//! Base-salary calculation from a services-contract rate.
//!
//! The inverse direction of the equivalence: given the monthly rate agreed
//! under a services-rendered contract, recover the indefinite-term base
//! salary it corresponds to.
//!
//! The forward calculation can be rewritten in factor form:
//!
//! ```text
//! total_rate = base_salary × (1 + 0.40 × (health + pension + work_risk) + benefits)
//! ```
//!
//! so dividing the rate by that total factor recovers the salary. The 40%
//! contribution-base factor applies to the salary side of the relationship,
//! which is why it appears inside the social-security factor here rather
//! than being taken from the service rate directly.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use contrato_core::{BaseSalaryCalculator, ContributionRates};
//!
//! let calculator = BaseSalaryCalculator::new(ContributionRates::default());
//! let equivalence = calculator.calculate(dec!(3500000.00)).unwrap();
//!
//! assert_eq!(equivalence.social_security_factor, dec!(0.118));
//! assert_eq!(equivalence.total_factor, dec!(1.468));
//! assert_eq!(equivalence.base_salary, dec!(2384196.19));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{CONTRIBUTION_BASE_FACTOR, ContributionRates, RatesError};

/// Errors that can occur when recovering a base salary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaseSalaryError {
    /// One of the contribution ratios is outside [0, 1].
    #[error("invalid contribution rates: {0}")]
    InvalidRates(#[from] RatesError),

    /// The services-contract rate must be non-negative.
    #[error("service rate must be non-negative, got {0}")]
    NegativeRate(Decimal),

    /// All four ratios are zero, so the equivalence is undefined.
    #[error("all contribution rates are zero; the equivalence is undefined")]
    DegenerateRates,
}

/// Result of a base-salary calculation.
///
/// The factors are kept at full decimal precision; only the recovered
/// salary is rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSalaryEquivalence {
    /// Indefinite-term base salary equivalent to the given rate.
    pub base_salary: Decimal,

    /// Divisor applied to the service rate
    /// (1 + social-security factor + benefits factor).
    pub total_factor: Decimal,

    /// Combined social-security factor: 40% of the sum of the health,
    /// pension and work-risk ratios.
    pub social_security_factor: Decimal,

    /// Benefits factor, equal to the benefits ratio.
    pub benefits_factor: Decimal,
}

/// Calculator for the service-rate-to-salary direction of the equivalence.
#[derive(Debug, Clone)]
pub struct BaseSalaryCalculator {
    rates: ContributionRates,
}

impl BaseSalaryCalculator {
    /// Creates a new calculator with the given contribution rates.
    pub fn new(rates: ContributionRates) -> Self {
        Self { rates }
    }

    /// Returns the contribution rates this calculator was built with.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Calculates the base salary equivalent to a services-contract rate.
    ///
    /// # Errors
    ///
    /// Returns [`BaseSalaryError`] if the rates are outside [0, 1], the rate
    /// is negative, or all four ratios are zero
    /// ([`BaseSalaryError::DegenerateRates`]).
    pub fn calculate(&self, service_rate: Decimal) -> Result<BaseSalaryEquivalence, BaseSalaryError> {
        self.rates.validate()?;

        if service_rate < Decimal::ZERO {
            return Err(BaseSalaryError::NegativeRate(service_rate));
        }
        if self.rates.is_degenerate() {
            warn!("all contribution rates are zero; refusing to compute equivalence");
            return Err(BaseSalaryError::DegenerateRates);
        }

        let social_security_factor = CONTRIBUTION_BASE_FACTOR * self.rates.health_ratio
            + CONTRIBUTION_BASE_FACTOR * self.rates.pension_ratio
            + CONTRIBUTION_BASE_FACTOR * self.rates.work_risk_ratio;
        let benefits_factor = self.rates.benefits_ratio;
        let total_factor = Decimal::ONE + social_security_factor + benefits_factor;

        // With ratios in [0, 1] the factor is at least 1, but the division
        // stays checked rather than relying on that.
        let base_salary = service_rate
            .checked_div(total_factor)
            .ok_or(BaseSalaryError::DegenerateRates)?;

        Ok(BaseSalaryEquivalence {
            base_salary: round_half_up(base_salary),
            total_factor,
            social_security_factor,
            benefits_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn default_calculator() -> BaseSalaryCalculator {
        BaseSalaryCalculator::new(ContributionRates::default())
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // inverse correctness
    // =========================================================================

    #[test]
    fn calculate_returns_reference_values_for_default_rates() {
        let calculator = default_calculator();

        let equivalence = calculator.calculate(dec!(3500000.00)).unwrap();

        // 0.40 × (0.125 + 0.16 + 0.01) = 0.118
        assert_eq!(equivalence.social_security_factor, dec!(0.118));
        assert_eq!(equivalence.benefits_factor, dec!(0.35));
        assert_eq!(equivalence.total_factor, dec!(1.468));
        // 3500000 / 1.468 = 2384196.1852..., rounds to 2384196.19
        assert_eq!(equivalence.base_salary, dec!(2384196.19));
    }

    #[test]
    fn calculate_keeps_factors_unrounded() {
        let rates = ContributionRates {
            benefits_ratio: dec!(0.333),
            health_ratio: dec!(0.111),
            pension_ratio: dec!(0.101),
            work_risk_ratio: dec!(0.007),
        };
        let calculator = BaseSalaryCalculator::new(rates);

        let equivalence = calculator.calculate(dec!(1000000.00)).unwrap();

        // 0.40 × (0.111 + 0.101 + 0.007) = 0.0876
        assert_eq!(equivalence.social_security_factor, dec!(0.0876));
        assert_eq!(equivalence.total_factor, dec!(1.4206));
    }

    #[test]
    fn calculate_divides_by_total_factor() {
        let calculator = default_calculator();

        let equivalence = calculator.calculate(dec!(1468000.00)).unwrap();

        assert_eq!(equivalence.base_salary, dec!(1000000.00));
    }

    // =========================================================================
    // zero boundary
    // =========================================================================

    #[test]
    fn calculate_returns_zero_salary_for_zero_rate() {
        let calculator = default_calculator();

        let equivalence = calculator.calculate(dec!(0.00)).unwrap();

        assert_eq!(equivalence.base_salary, dec!(0.00));
        assert_eq!(equivalence.total_factor, dec!(1.468));
    }

    // =========================================================================
    // validation
    // =========================================================================

    #[test]
    fn calculate_rejects_negative_rate() {
        let calculator = default_calculator();

        let result = calculator.calculate(dec!(-500000.00));

        assert_eq!(result, Err(BaseSalaryError::NegativeRate(dec!(-500000.00))));
    }

    #[test]
    fn calculate_rejects_out_of_range_rates() {
        let rates = ContributionRates {
            work_risk_ratio: dec!(-0.01),
            ..ContributionRates::default()
        };
        let calculator = BaseSalaryCalculator::new(rates);

        let result = calculator.calculate(dec!(3500000.00));

        assert_eq!(
            result,
            Err(BaseSalaryError::InvalidRates(
                RatesError::InvalidWorkRiskRatio(dec!(-0.01))
            ))
        );
    }

    // =========================================================================
    // degenerate configuration
    // =========================================================================

    #[test]
    fn calculate_reports_degenerate_rates_when_all_ratios_zero() {
        let _guard = init_test_tracing();
        let rates = ContributionRates {
            benefits_ratio: dec!(0.00),
            health_ratio: dec!(0.00),
            pension_ratio: dec!(0.00),
            work_risk_ratio: dec!(0.00),
        };
        let calculator = BaseSalaryCalculator::new(rates);

        let result = calculator.calculate(dec!(3500000.00));

        assert_eq!(result, Err(BaseSalaryError::DegenerateRates));
    }

    #[test]
    fn calculate_accepts_single_nonzero_ratio() {
        let rates = ContributionRates {
            benefits_ratio: dec!(0.00),
            health_ratio: dec!(0.00),
            pension_ratio: dec!(0.16),
            work_risk_ratio: dec!(0.00),
        };
        let calculator = BaseSalaryCalculator::new(rates);

        let equivalence = calculator.calculate(dec!(1064000.00)).unwrap();

        // Total factor: 1 + 0.40 × 0.16 = 1.064
        assert_eq!(equivalence.total_factor, dec!(1.064));
        assert_eq!(equivalence.base_salary, dec!(1000000.00));
    }

    // =========================================================================
    // monotonicity
    // =========================================================================

    #[test]
    fn calculate_base_salary_decreases_with_each_ratio() {
        let rate = dec!(3500000.00);
        let baseline = default_calculator().calculate(rate).unwrap().base_salary;

        let bumps = [
            ContributionRates {
                benefits_ratio: dec!(0.36),
                ..ContributionRates::default()
            },
            ContributionRates {
                health_ratio: dec!(0.135),
                ..ContributionRates::default()
            },
            ContributionRates {
                pension_ratio: dec!(0.17),
                ..ContributionRates::default()
            },
            ContributionRates {
                work_risk_ratio: dec!(0.02),
                ..ContributionRates::default()
            },
        ];

        for rates in bumps {
            let bumped = BaseSalaryCalculator::new(rates.clone())
                .calculate(rate)
                .unwrap()
                .base_salary;
            assert!(
                bumped < baseline,
                "base salary {bumped} not below baseline {baseline} for {rates:?}"
            );
        }
    }
}
