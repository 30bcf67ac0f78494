//! Compute an amortization schedule from the command line
//!
//! Takes the same three fields as the calculator form (thousands
//! separators allowed), prints the summary figures, and optionally
//! writes a schedule as CSV or the full result as JSON.

use anyhow::{bail, Context};
use clap::Parser;
use std::fs::File;
use std::time::Instant;

use mortgage_engine::input::LoanForm;
use mortgage_engine::report::{write_schedule_csv, LoanSummary, WorkedExample};
use mortgage_engine::schedule::calculate;

#[derive(Debug, Parser)]
#[command(about = "Compute a fixed-rate mortgage amortization schedule")]
struct Args {
    /// Loan principal, e.g. 800000 or 800,000
    #[arg(long)]
    principal: String,

    /// Annual interest rate in percent, e.g. 6 or 6.25
    #[arg(long)]
    rate: String,

    /// Term in years, e.g. 30
    #[arg(long)]
    years: String,

    /// Write a schedule as CSV to this path
    #[arg(long)]
    csv: Option<String>,

    /// Export the annual schedule instead of the monthly one
    #[arg(long)]
    annual: bool,

    /// Print the full result as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let form = LoanForm::new(&args.principal, &args.rate, &args.years);
    let messages = form.validation_messages();
    if !messages.is_empty() {
        bail!("invalid input:\n  {}", messages.join("\n  "));
    }

    let inputs = form.to_inputs();

    let start = Instant::now();
    let result = calculate(&inputs);
    log::info!("computed {} months in {:?}", result.monthly_schedule.len(), start.elapsed());

    if result.is_empty() {
        bail!("inputs do not describe a computable loan");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = LoanSummary::from_result(&inputs, &result);
    println!("Loan Summary:");
    println!("  Monthly payment: ${:.2}", summary.monthly_payment);
    println!("  Annual payment:  ${:.2}", summary.annual_payment);
    println!("  Monthly rate:    {:.4}%", summary.monthly_rate_percent);
    println!("  Total interest:  ${:.2}", summary.total_interest);
    println!("  Total paid:      ${:.2}", summary.total_paid);

    if let Some(example) = WorkedExample::from_result(&inputs, &result) {
        println!("\nFirst month:");
        println!("  Interest:  ${:.2}", example.first_month_interest);
        println!("  Principal: ${:.2}", example.first_month_principal);
    }

    if let Some(path) = args.csv {
        let schedule = if args.annual {
            &result.annual_schedule
        } else {
            &result.monthly_schedule
        };
        let file = File::create(&path).with_context(|| format!("creating {}", path))?;
        write_schedule_csv(file, schedule)?;
        println!("\nSchedule written to {}", path);
    }

    Ok(())
}
