use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fraction of the base salary on which social-security contributions are
/// calculated.
///
/// Colombian regulation fixes the minimum contribution base for independent
/// contractors at 40% of monthly income. The base is always taken from the
/// salary side of the equivalence, never from the services-contract rate
/// directly.
pub const CONTRIBUTION_BASE_FACTOR: Decimal = dec!(0.40);

/// Errors raised when a contribution ratio is outside its valid range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatesError {
    /// The social-benefits ratio must be between 0 and 1.
    #[error("benefits ratio must be between 0 and 1, got {0}")]
    InvalidBenefitsRatio(Decimal),

    /// The health contribution ratio must be between 0 and 1.
    #[error("health ratio must be between 0 and 1, got {0}")]
    InvalidHealthRatio(Decimal),

    /// The pension contribution ratio must be between 0 and 1.
    #[error("pension ratio must be between 0 and 1, got {0}")]
    InvalidPensionRatio(Decimal),

    /// The work-risk contribution ratio must be between 0 and 1.
    #[error("work risk ratio must be between 0 and 1, got {0}")]
    InvalidWorkRiskRatio(Decimal),
}

/// Contribution and benefit ratios used by both conversion calculators.
///
/// The three contribution ratios (`health_ratio`, `pension_ratio`,
/// `work_risk_ratio`) apply to the contribution base, which is
/// [`CONTRIBUTION_BASE_FACTOR`] (40%) of the base salary. The
/// `benefits_ratio` applies to the full base salary.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrato_core::ContributionRates;
///
/// let rates = ContributionRates::default();
///
/// assert_eq!(rates.benefits_ratio, dec!(0.35));
/// assert_eq!(rates.health_ratio, dec!(0.125));
/// assert_eq!(rates.pension_ratio, dec!(0.16));
/// assert_eq!(rates.work_risk_ratio, dec!(0.01));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Prestaciones sociales (severance, bonus, vacation) as a fraction of
    /// the base salary. Typically 35%.
    pub benefits_ratio: Decimal,

    /// Health contribution as a fraction of the contribution base.
    /// Typically 12.5%.
    pub health_ratio: Decimal,

    /// Pension contribution as a fraction of the contribution base.
    /// Typically 16%.
    pub pension_ratio: Decimal,

    /// Work-risk (ARL) contribution as a fraction of the contribution base.
    /// 1% corresponds to risk class I, the lowest.
    pub work_risk_ratio: Decimal,
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            benefits_ratio: dec!(0.35),
            health_ratio: dec!(0.125),
            pension_ratio: dec!(0.16),
            work_risk_ratio: dec!(0.01),
        }
    }
}

impl ContributionRates {
    /// Validates that every ratio lies in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`RatesError`] naming the first ratio found outside its range.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use contrato_core::{ContributionRates, RatesError};
    ///
    /// let rates = ContributionRates {
    ///     pension_ratio: dec!(1.5),
    ///     ..ContributionRates::default()
    /// };
    ///
    /// assert_eq!(rates.validate(), Err(RatesError::InvalidPensionRatio(dec!(1.5))));
    /// ```
    pub fn validate(&self) -> Result<(), RatesError> {
        if self.benefits_ratio < Decimal::ZERO || self.benefits_ratio > Decimal::ONE {
            return Err(RatesError::InvalidBenefitsRatio(self.benefits_ratio));
        }
        if self.health_ratio < Decimal::ZERO || self.health_ratio > Decimal::ONE {
            return Err(RatesError::InvalidHealthRatio(self.health_ratio));
        }
        if self.pension_ratio < Decimal::ZERO || self.pension_ratio > Decimal::ONE {
            return Err(RatesError::InvalidPensionRatio(self.pension_ratio));
        }
        if self.work_risk_ratio < Decimal::ZERO || self.work_risk_ratio > Decimal::ONE {
            return Err(RatesError::InvalidWorkRiskRatio(self.work_risk_ratio));
        }
        Ok(())
    }

    /// Returns `true` when every ratio is zero.
    ///
    /// A fully zero configuration makes the two contract modalities trivially
    /// identical and is treated as a configuration error by the inverse
    /// calculator rather than silently computed.
    pub fn is_degenerate(&self) -> bool {
        self.benefits_ratio.is_zero()
            && self.health_ratio.is_zero()
            && self.pension_ratio.is_zero()
            && self.work_risk_ratio.is_zero()
    }
}
