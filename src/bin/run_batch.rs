//! Run savings projections for every scenario in a CSV file
//!
//! Usage: run_batch <scenarios.csv>
//! Output path comes from BATCH_OUTPUT (default: batch_projection_output.csv)

use anyhow::{bail, Context, Result};
use investment_simulator::investment::load_scenarios;
use investment_simulator::report::format_amount;
use investment_simulator::ScenarioRunner;
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct BatchRow {
    #[serde(rename = "Scenario")]
    scenario: usize,
    #[serde(rename = "MonthlyInvestment")]
    monthly_investment: f64,
    #[serde(rename = "InitialCapital")]
    initial_capital: f64,
    #[serde(rename = "InvestmentYears")]
    investment_years: u32,
    #[serde(rename = "AnnualReturnRate")]
    annual_return_rate: f64,
    #[serde(rename = "TotalDeposits")]
    total_deposits: f64,
    #[serde(rename = "TotalGrowth")]
    total_growth: f64,
    #[serde(rename = "FinalBalance")]
    final_balance: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(input_path) = env::args().nth(1) else {
        bail!("usage: run_batch <scenarios.csv>");
    };
    let output_path =
        env::var("BATCH_OUTPUT").unwrap_or_else(|_| "batch_projection_output.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);
    let scenarios = load_scenarios(&input_path)
        .with_context(|| format!("failed to load scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let results = ScenarioRunner::new().run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;

    for (i, (inputs, result)) in scenarios.iter().zip(&results).enumerate() {
        let summary = result.summary();
        writer.serialize(BatchRow {
            scenario: i + 1,
            monthly_investment: inputs.monthly_investment,
            initial_capital: inputs.initial_capital,
            investment_years: inputs.investment_years,
            annual_return_rate: inputs.annual_return_rate,
            total_deposits: summary.total_deposits,
            total_growth: summary.total_growth,
            final_balance: summary.final_balance,
        })?;
    }
    writer.flush()?;

    let best = results
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.final_balance().total_cmp(&b.1.final_balance()));
    if let Some((i, result)) = best {
        println!(
            "\nLargest final balance: scenario {} with {}",
            i + 1,
            format_amount(result.final_balance())
        );
    }

    println!("Results written to: {}", output_path);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
