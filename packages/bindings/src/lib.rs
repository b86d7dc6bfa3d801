use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use loan_calc_core::types::LoanInputs;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_inputs(input_json: &str) -> NapiResult<LoanInputs> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input = parse_inputs(&input_json)?;
    let output = loan_calc_core::amortization::calculate_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_product_loan(product_key: String, input_json: String) -> NapiResult<String> {
    let input = parse_inputs(&input_json)?;
    let output = loan_calc_core::amortization::calculate_product_loan(&product_key, &input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn chart_points(input_json: String, interval: u32) -> NapiResult<String> {
    let input = parse_inputs(&input_json)?;
    let output = loan_calc_core::amortization::calculate_loan(&input).map_err(to_napi_error)?;
    let points =
        loan_calc_core::schedule::chart_points(&output.result.amortization_schedule, interval as usize);
    serde_json::to_string(&points).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[napi]
pub fn get_calculator_defaults(product_key: String) -> NapiResult<String> {
    let defaults = loan_calc_core::products::get_calculator_defaults(&product_key);
    serde_json::to_string(defaults).map_err(to_napi_error)
}

#[napi]
pub fn list_calculators() -> NapiResult<String> {
    serde_json::to_string(loan_calc_core::products::calculator_catalogue()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordRequest {
    calculator_type: String,
    #[serde(flatten)]
    inputs: LoanInputs,
}

/// Build the flat record stored with a lead from `{calculatorType, ...inputs}`.
#[napi]
pub fn calculation_record(request_json: String) -> NapiResult<String> {
    let request: RecordRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let output = loan_calc_core::amortization::calculate_loan(&request.inputs).map_err(to_napi_error)?;
    let record = loan_calc_core::record::CalculationRecord::new(
        request.calculator_type,
        &request.inputs,
        &output.result,
    );
    serde_json::to_string(&record).map_err(to_napi_error)
}
