//! GAP Advisor CLI
//!
//! Evaluates loans and reports whether GAP insurance should be offered

use anyhow::{bail, Context, Result};
use clap::Parser;
use gap_advisor::loan::{load_loans, sample_loans};
use gap_advisor::{LoanParameters, ScenarioRunner, DEFAULT_REFERENCE_NEW_YEAR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gap_advisor", version, about = "Recommend GAP insurance for auto loans")]
struct Args {
    /// CSV of loans (label,carValue,modelYear,amountFinanced,apr,loanTermMonths).
    /// Defaults to the built-in sample loans.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Model year classified as a new vehicle
    #[arg(short, long, default_value_t = DEFAULT_REFERENCE_NEW_YEAR)]
    reference_year: i32,

    /// Print evaluations as JSON
    #[arg(long)]
    json: bool,

    /// Write the monthly gap series of the loan with this label as CSV
    #[arg(long, value_name = "LABEL")]
    series: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let loans = match &args.input {
        Some(path) => load_loans(path)
            .with_context(|| format!("Failed to load loans from {}", path.display()))?,
        None => sample_loans(),
    };
    let runner = ScenarioRunner::new().with_reference_year(args.reference_year);
    log::info!("Evaluating {} loans (reference year {})", loans.len(), runner.reference_year());

    if let Some(label) = &args.series {
        return write_series(&runner, &loans, label);
    }

    let results = runner.run_batch_parallel(&loans);

    if args.json {
        let evaluations = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&evaluations)?);
        return Ok(());
    }

    for (loan, result) in loans.iter().zip(results) {
        println!("{}", loan.label);
        println!("  Car Value: ${:.2}", loan.car_value);
        println!("  Model Year: {}", loan.model_year);
        println!("  Amount Financed: ${:.2}", loan.amount_financed);
        println!("  APR: {:.2}%", loan.apr * 100.0);
        println!("  Term: {} months", loan.loan_term_months);

        match result {
            Ok(eval) => {
                println!("  Monthly Payment: ${:.2}", eval.monthly_payment);
                println!(
                    "  Max Gap: ${:.2} (latest positive month {})",
                    eval.stats.max_gap, eval.stats.latest_positive_month
                );
                if eval.should_offer {
                    println!("Should offer GAP insurance");
                } else {
                    println!("Should not offer GAP insurance");
                }
            }
            Err(e) => println!("Could not evaluate: {}", e),
        }
        println!();
    }

    Ok(())
}

fn write_series(runner: &ScenarioRunner, loans: &[LoanParameters], label: &str) -> Result<()> {
    let Some(loan) = loans.iter().find(|l| l.label == label) else {
        bail!("No loan labeled '{}'", label);
    };

    let series = runner.series(loan)?;
    let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
    for point in series {
        writer.serialize(point)?;
    }
    writer.flush().context("Failed to write gap series")?;

    Ok(())
}
