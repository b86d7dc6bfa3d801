mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{CalculateArgs, RecordArgs, ScheduleArgs};
use commands::products::ProductArgs;

/// Commercial loan calculators for brokers
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "Commercial loan payment and amortization calculator",
    long_about = "Computes level monthly payments, totals and month-by-month amortization \
                  schedules with decimal precision. Ships the default limits for SBA, \
                  equipment, property, working-capital and other broker calculator products."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log calculation details to stderr (overridden by LOANCALC_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly payment, totals and amortization schedule
    Calculate(CalculateArgs),
    /// Print the amortization schedule, chart points or yearly roll-up
    Schedule(ScheduleArgs),
    /// Print the flat calculation record stored with leads
    Record(RecordArgs),
    /// List every calculator product and its defaults
    Products,
    /// Show the defaults for one calculator product
    Product(ProductArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::loan::run_calculate(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Record(args) => commands::loan::run_record(args),
        Commands::Products => commands::products::run_products(),
        Commands::Product(args) => commands::products::run_product(args),
        Commands::Version => {
            println!("loancalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
