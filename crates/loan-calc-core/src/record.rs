use serde::{Deserialize, Serialize};

use crate::types::{LoanInputs, LoanResults, Money, Percent};

/// Flat summary of one calculation, in the shape stored alongside leads and
/// calculation-tracking events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub calculator_type: String,
    pub loan_amount: Money,
    pub loan_term: u32,
    pub interest_rate: Percent,
    pub down_payment: Money,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_cost: Money,
}

impl CalculationRecord {
    pub fn new(calculator_type: impl Into<String>, inputs: &LoanInputs, results: &LoanResults) -> Self {
        Self {
            calculator_type: calculator_type.into(),
            loan_amount: inputs.loan_amount,
            loan_term: inputs.loan_term_months,
            interest_rate: inputs.interest_rate,
            down_payment: inputs.down_payment,
            monthly_payment: results.monthly_payment,
            total_interest: results.total_interest,
            total_cost: results.total_cost,
        }
    }
}
