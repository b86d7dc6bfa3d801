use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::amortization;
use loan_calc_core::products::{self, DEFAULT_PRODUCT_KEY};
use loan_calc_core::record::CalculationRecord;
use loan_calc_core::schedule;
use loan_calc_core::types::LoanInputs;

use crate::input;

/// Loan parameters shared by every loan command
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Calculator product key (e.g. sba-7a, equipment); missing flags use its defaults
    #[arg(long)]
    pub product: Option<String>,

    /// Loan amount before down payment
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent (11.5 = 11.5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Down payment
    #[arg(long, alias = "down")]
    pub down_payment: Option<Decimal>,
}

type Piped = Result<Option<LoanInputs>, Box<dyn std::error::Error>>;

impl LoanArgs {
    /// Build strict loan inputs from a file, piped stdin, or flags (in that order).
    pub fn resolve(&self) -> Result<LoanInputs, Box<dyn std::error::Error>> {
        self.resolve_with(input::stdin::read_piped)
    }

    /// Like [`resolve`](Self::resolve), with the stdin reader supplied by the caller.
    /// `piped` is only consulted when no `--input` file is given.
    fn resolve_with(
        &self,
        piped: impl FnOnce() -> Piped,
    ) -> Result<LoanInputs, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_input(path);
        }
        if let Some(inputs) = piped()? {
            return Ok(inputs);
        }
        self.inputs_from_flags()
    }

    /// Inputs from individual flags, with `--product` defaults filling the gaps.
    fn inputs_from_flags(&self) -> Result<LoanInputs, Box<dyn std::error::Error>> {
        let defaults = self.product.as_deref().map(products::get_calculator_defaults);

        let loan_amount = self
            .amount
            .or(defaults.map(|d| d.default_amount))
            .ok_or("--amount is required (or provide --product or --input)")?;
        let interest_rate = self
            .rate
            .or(defaults.map(|d| d.default_rate))
            .ok_or("--rate is required (or provide --product or --input)")?;
        let loan_term_months = self
            .term
            .or(defaults.map(|d| d.default_term))
            .ok_or("--term is required (or provide --product or --input)")?;

        Ok(LoanInputs {
            loan_amount,
            interest_rate,
            loan_term_months,
            down_payment: self.down_payment.unwrap_or(Decimal::ZERO),
        })
    }
}

/// Arguments for a full loan calculation
#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.loan.resolve()?;
    let result = match args.loan.product {
        Some(ref key) => amortization::calculate_product_loan(key, &inputs)?,
        None => amortization::calculate_loan(&inputs)?,
    };
    Ok(serde_json::to_value(result)?)
}

/// Arguments for amortization schedule output
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Sample every N months for charting (first and final month always kept)
    #[arg(long, conflicts_with = "yearly")]
    pub every: Option<usize>,

    /// Roll the schedule up into loan years
    #[arg(long)]
    pub yearly: bool,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.loan.resolve()?;
    let rows = amortization::calculate_loan(&inputs)?
        .result
        .amortization_schedule;

    let value = if args.yearly {
        serde_json::to_value(schedule::yearly_summary(&rows))?
    } else if let Some(every) = args.every {
        serde_json::to_value(schedule::chart_points(&rows, every))?
    } else {
        serde_json::to_value(rows)?
    };
    Ok(value)
}

/// Arguments for the flat calculation record
#[derive(Args)]
pub struct RecordArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Calculator type stored on the record (defaults to --product, then sba-7a)
    #[arg(long)]
    pub calculator_type: Option<String>,
}

pub fn run_record(args: RecordArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.loan.resolve()?;
    let results = amortization::calculate_loan(&inputs)?.result;
    let calculator_type = args
        .calculator_type
        .or(args.loan.product)
        .unwrap_or_else(|| DEFAULT_PRODUCT_KEY.to_string());

    let record = CalculationRecord::new(calculator_type, &inputs, &results);
    Ok(serde_json::to_value(record)?)
}
