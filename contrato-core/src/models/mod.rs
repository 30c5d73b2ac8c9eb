mod contribution_rates;

pub use contribution_rates::{CONTRIBUTION_BASE_FACTOR, ContributionRates, RatesError};
