use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use std::time::Instant;

use crate::error::LoanCalcError;
use crate::products::{self, DEFAULT_PRODUCT_KEY};
use crate::types::*;
use crate::validation;
use crate::LoanCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Longest supported term (100 years); bounds the schedule allocation.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Residual balance below this on the final row is shown as fully settled.
const SETTLEMENT_TOLERANCE: Decimal = dec!(0.000001);

/// Settlement tolerance relative to principal, for loans large enough that
/// 28-digit rounding drift exceeds the absolute tolerance.
const RELATIVE_SETTLEMENT_TOLERANCE: Decimal = dec!(0.000000001);

fn settlement_tolerance(principal: Money) -> Money {
    (principal * RELATIVE_SETTLEMENT_TOLERANCE).max(SETTLEMENT_TOLERANCE)
}

/// Convert an annual percentage into a monthly periodic rate.
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / PERCENT / MONTHS_PER_YEAR
}

/// Level payment that retires `principal` over `months` periods.
///
/// `P * r(1+r)^n / ((1+r)^n - 1)`, or `P / n` when the rate is zero.
pub fn level_payment(principal: Money, monthly_rate: Rate, months: u32) -> LoanCalcResult<Money> {
    if months == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "loan_term_months".into(),
            reason: "Loan term must be at least 1 month".into(),
        });
    }

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let factor = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(months))
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: format!("compound factor over {months} months"),
        })?;

    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(LoanCalcError::DivisionByZero {
            context: "level payment annuity factor".into(),
        });
    }

    principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: "level payment".into(),
        })
}

fn validate_inputs(inputs: &LoanInputs) -> LoanCalcResult<()> {
    if inputs.loan_term_months == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "loan_term_months".into(),
            reason: "Loan term must be at least 1 month".into(),
        });
    }
    if inputs.loan_term_months > MAX_TERM_MONTHS {
        return Err(LoanCalcError::InvalidInput {
            field: "loan_term_months".into(),
            reason: format!("Loan term cannot exceed {MAX_TERM_MONTHS} months"),
        });
    }
    if inputs.interest_rate < Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if inputs.down_payment < Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "down_payment".into(),
            reason: "Down payment cannot be negative".into(),
        });
    }
    if inputs.loan_amount <= inputs.down_payment {
        return Err(LoanCalcError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount must exceed the down payment".into(),
        });
    }
    Ok(())
}

fn build_schedule(principal: Money, rate: Rate, payment: Money, months: u32) -> Vec<AmortizationRow> {
    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;
    let tolerance = settlement_tolerance(principal);

    for month in 1..=months {
        let interest = balance * rate;
        let principal_portion = payment - interest;
        balance -= principal_portion;

        // Clamp drift on the displayed balance only; the running balance is never rounded.
        let mut shown = balance.max(Decimal::ZERO);
        if month == months && shown < tolerance {
            shown = Decimal::ZERO;
        }

        schedule.push(AmortizationRow {
            month,
            payment,
            principal: principal_portion,
            interest,
            balance: shown,
        });
    }

    schedule
}

/// Compute the level monthly payment, totals and full amortization schedule.
pub fn calculate_loan(inputs: &LoanInputs) -> LoanCalcResult<ComputationOutput<LoanResults>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_inputs(inputs)?;

    let principal = inputs.principal();
    let rate = monthly_rate(inputs.interest_rate);
    let months = inputs.loan_term_months;

    if rate.is_zero() {
        warnings.push("Zero interest rate: payment is principal divided evenly over the term".into());
    }

    let monthly_payment = level_payment(principal, rate, months)?;
    let total_paid = monthly_payment
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: "total paid".into(),
        })?;
    let total_interest = total_paid
        .checked_sub(principal)
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: "total interest".into(),
        })?;
    let total_cost = total_paid
        .checked_add(inputs.down_payment)
        .ok_or_else(|| LoanCalcError::ArithmeticOverflow {
            context: "total cost".into(),
        })?;

    tracing::debug!(
        principal = %principal,
        monthly_rate = %rate,
        months,
        monthly_payment = %monthly_payment,
        "calculated level payment"
    );

    let output = LoanResults {
        monthly_payment,
        total_interest,
        total_cost,
        amortization_schedule: build_schedule(principal, rate, monthly_payment, months),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-payment amortization (annuity formula)",
        &serde_json::json!({
            "principal": principal.to_string(),
            "monthly_rate": rate.to_string(),
            "term_months": months,
            "down_payment": inputs.down_payment.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Calculate a loan for a named calculator product, attaching advisory range warnings.
///
/// Unknown product keys fall back to the default product.
pub fn calculate_product_loan(
    product_key: &str,
    inputs: &LoanInputs,
) -> LoanCalcResult<ComputationOutput<LoanResults>> {
    let mut output = calculate_loan(inputs)?;

    let defaults = match products::find_calculator_defaults(product_key) {
        Some(d) => d,
        None => {
            tracing::warn!(product_key, fallback = DEFAULT_PRODUCT_KEY, "unknown calculator product");
            output.warnings.push(format!(
                "Unknown calculator product '{product_key}'; using {DEFAULT_PRODUCT_KEY} limits"
            ));
            products::get_calculator_defaults(DEFAULT_PRODUCT_KEY)
        }
    };

    output
        .warnings
        .extend(validation::advisory_warnings(defaults, inputs));
    output.methodology = format!("{} ({})", output.methodology, defaults.name);

    Ok(output)
}
