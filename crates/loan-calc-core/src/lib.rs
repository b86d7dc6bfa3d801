pub mod amortization;
pub mod error;
pub mod products;
pub mod record;
pub mod schedule;
pub mod types;
pub mod validation;

pub use amortization::{calculate_loan, calculate_product_loan};
pub use error::LoanCalcError;
pub use products::{get_calculator_defaults, CalculatorDefaults};
pub use types::*;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
