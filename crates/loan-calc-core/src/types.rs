use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates as entered by borrowers (11.5 = 11.5% per year).
pub type Percent = Decimal;

/// Periodic rates expressed as decimals (0.0095 = 0.95% per period).
pub type Rate = Decimal;

/// Loan parameters as entered into a calculator.
///
/// The camelCase aliases accept the payloads posted by the web layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    #[serde(alias = "loanAmount")]
    pub loan_amount: Money,
    #[serde(alias = "interestRate")]
    pub interest_rate: Percent,
    #[serde(alias = "loanTermMonths", alias = "loanTerm")]
    pub loan_term_months: u32,
    #[serde(default, alias = "downPayment")]
    pub down_payment: Money,
}

impl LoanInputs {
    /// Amount actually financed.
    pub fn principal(&self) -> Money {
        self.loan_amount - self.down_payment
    }
}

/// One month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Payment, totals and the month-by-month schedule for a level-payment loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResults {
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_cost: Money,
    pub amortization_schedule: Vec<AmortizationRow>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_inputs_accept_web_field_names() {
        let json = r#"{"loanAmount": 250000, "interestRate": 9.5, "loanTermMonths": 60, "downPayment": 50000}"#;
        let inputs: LoanInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.loan_amount, dec!(250000));
        assert_eq!(inputs.interest_rate, dec!(9.5));
        assert_eq!(inputs.loan_term_months, 60);
        assert_eq!(inputs.principal(), dec!(200000));
    }

    #[test]
    fn test_down_payment_defaults_to_zero() {
        let json = r#"{"loan_amount": "100000", "interest_rate": "12", "loan_term_months": 12}"#;
        let inputs: LoanInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.down_payment, Decimal::ZERO);
        assert_eq!(inputs.principal(), dec!(100000));
    }
}
