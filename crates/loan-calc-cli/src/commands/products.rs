use clap::Args;
use serde_json::Value;

use loan_calc_core::products;
use loan_calc_core::LoanCalcError;

/// Arguments for a single product lookup
#[derive(Args)]
pub struct ProductArgs {
    /// Product key, e.g. sba-504
    pub key: String,
}

pub fn run_products() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(products::calculator_catalogue())?)
}

pub fn run_product(args: ProductArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let defaults = products::find_calculator_defaults(&args.key)
        .ok_or_else(|| LoanCalcError::UnknownProduct(args.key.clone()))?;
    Ok(serde_json::to_value(defaults)?)
}
