use crate::products::CalculatorDefaults;
use crate::types::LoanInputs;

/// Range checks mirroring a calculator's slider and select limits.
///
/// Advisory only: the amortization engine accepts any valid input, so the
/// returned messages are attached as warnings rather than raised as errors.
///
/// The down-payment check only fires when this is called on its own, e.g. to
/// pre-validate a form. `calculate_loan` already rejects a down payment at or
/// above the loan amount, so `calculate_product_loan` never reaches it.
pub fn advisory_warnings(defaults: &CalculatorDefaults, inputs: &LoanInputs) -> Vec<String> {
    let mut warnings = Vec::new();

    if inputs.loan_amount < defaults.min_amount {
        warnings.push(format!(
            "Loan amount {} is below the {} minimum of {}",
            inputs.loan_amount, defaults.name, defaults.min_amount
        ));
    } else if inputs.loan_amount > defaults.max_amount {
        warnings.push(format!(
            "Loan amount {} is above the {} maximum of {}",
            inputs.loan_amount, defaults.name, defaults.max_amount
        ));
    }

    if !defaults.allows_term(inputs.loan_term_months) {
        let options: Vec<String> = defaults.term_options.iter().map(u32::to_string).collect();
        warnings.push(format!(
            "Term of {} months is not offered by the {} (options: {})",
            inputs.loan_term_months,
            defaults.name,
            options.join(", ")
        ));
    }

    if inputs.down_payment > inputs.loan_amount {
        warnings.push(format!(
            "Down payment {} exceeds the loan amount {}",
            inputs.down_payment, inputs.loan_amount
        ));
    }

    warnings
}
