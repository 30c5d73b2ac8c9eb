pub mod calculations;
pub mod models;

pub use calculations::{
    BaseSalaryCalculator, BaseSalaryEquivalence, BaseSalaryError, ServiceRateCalculator,
    ServiceRateError, ServiceRateQuote,
};
pub use models::*;
