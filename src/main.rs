//! Investment Simulator CLI
//!
//! Command-line front end for the savings projection and option payoff calculators

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::path::PathBuf;

use investment_simulator::investment::{
    InvestmentConfig, InvestmentInputs, InvestmentProjector, DEFAULT_ANNUAL_RETURN_RATE,
    DEFAULT_INITIAL_CAPITAL, DEFAULT_INVESTMENT_YEARS, DEFAULT_MONTHLY_INVESTMENT,
};
use investment_simulator::options::{
    payoff, price_sweep, ChartAxes, OptionPosition, OptionType, SeriesSelection,
    DEFAULT_NUM_OPTIONS, DEFAULT_OPTION_PREMIUM, DEFAULT_STOCKS_OWNED, DEFAULT_STRIKE_PRICE,
};
use investment_simulator::report::{self, format_amount};

#[derive(Parser, Debug)]
#[command(name = "investment_simulator", about = "Savings growth and option payoff calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project year-end savings with monthly deposits and quarterly compounding
    Invest {
        /// Deposit made at the start of every month
        #[arg(long, default_value_t = DEFAULT_MONTHLY_INVESTMENT, allow_negative_numbers = true)]
        monthly_investment: f64,
        /// Capital on hand before the first deposit
        #[arg(long, default_value_t = DEFAULT_INITIAL_CAPITAL, allow_negative_numbers = true)]
        initial_capital: f64,
        /// Plan length in years
        #[arg(long, default_value_t = DEFAULT_INVESTMENT_YEARS)]
        years: u32,
        /// Expected annual return in percent
        #[arg(long, default_value_t = DEFAULT_ANNUAL_RETURN_RATE * 100.0, allow_negative_numbers = true)]
        annual_rate_pct: f64,
        /// Also print the balance after every month
        #[arg(long)]
        monthly: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Write year-end balances to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Profit curves for a written call or put at expiry
    Options {
        /// Call or Put
        #[arg(long, default_value = "Call")]
        option_type: OptionType,
        /// Hold the underlying alongside the option
        #[arg(long)]
        covered: bool,
        /// Shares held (only used with --covered)
        #[arg(long, default_value_t = DEFAULT_STOCKS_OWNED)]
        stocks_owned: u32,
        #[arg(long, default_value_t = DEFAULT_STRIKE_PRICE, allow_negative_numbers = true)]
        strike: f64,
        /// Premium received per contract
        #[arg(long, default_value_t = DEFAULT_OPTION_PREMIUM, allow_negative_numbers = true)]
        premium: f64,
        /// Contracts written (one contract = one share)
        #[arg(long, default_value_t = DEFAULT_NUM_OPTIONS)]
        contracts: u32,
        #[arg(long)]
        hide_option: bool,
        #[arg(long)]
        hide_stock: bool,
        #[arg(long)]
        hide_total: bool,
        /// Print curves and axis layout as JSON
        #[arg(long)]
        json: bool,
        /// Write the curves to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Invest {
            monthly_investment,
            initial_capital,
            years,
            annual_rate_pct,
            monthly,
            json,
            csv,
        } => {
            let inputs = InvestmentInputs::new(
                monthly_investment,
                initial_capital,
                years,
                annual_rate_pct / 100.0,
            );
            run_invest(&inputs, monthly, json, csv)
        }
        Command::Options {
            option_type,
            covered,
            stocks_owned,
            strike,
            premium,
            contracts,
            hide_option,
            hide_stock,
            hide_total,
            json,
            csv,
        } => {
            let position =
                OptionPosition::new(option_type, covered, stocks_owned, strike, premium, contracts);
            let selection =
                SeriesSelection::for_position(&position, !hide_option, !hide_stock, !hide_total);
            run_options(&position, selection, json, csv)
        }
    }
}

fn run_invest(inputs: &InvestmentInputs, monthly: bool, json: bool, csv: Option<PathBuf>) -> Result<()> {
    inputs.validate()?;

    let projector = InvestmentProjector::new(InvestmentConfig { detailed_output: false });
    let result = projector.project(inputs);
    info!("projection complete: {} months", result.monthly_balances.len() - 1);

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_yearly_csv(file, &result)?;
        println!("Year-end balances written to: {}", path.display());
    }

    if json {
        println!("{}", report::to_json(&result)?);
        return Ok(());
    }

    println!("Investment Simulation");
    println!("=====================\n");
    println!("  Monthly investment: {}", format_amount(inputs.monthly_investment));
    println!("  Initial capital:    {}", format_amount(inputs.initial_capital));
    println!("  Years:              {}", inputs.investment_years);
    println!("  Annual return:      {:.1}%", inputs.annual_return_rate * 100.0);
    println!("  Quarterly return:   {:.4}%", result.quarterly_return_rate * 100.0);
    println!();

    println!("{:>8} {:>22}", "Year", "Cumulative assets");
    println!("{}", "-".repeat(31));
    for entry in &result.yearly_cumulative_assets {
        println!("{:>8} {:>22}", entry.label(), format_amount(entry.balance));
    }

    if monthly {
        println!("\n{:>8} {:>22}", "Month", "Balance");
        println!("{}", "-".repeat(31));
        for (month, balance) in result.monthly_balances.iter().enumerate() {
            let label = if month == 0 { "Initial".to_string() } else { month.to_string() };
            println!("{:>8} {:>22}", label, format_amount(*balance));
        }
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total deposits: {}", format_amount(summary.total_deposits));
    println!("  Total growth:   {}", format_amount(summary.total_growth));
    println!(
        "\nExpected cumulative assets after {} years: {}",
        inputs.investment_years,
        format_amount(summary.final_balance)
    );

    Ok(())
}

fn run_options(
    position: &OptionPosition,
    selection: SeriesSelection,
    json: bool,
    csv: Option<PathBuf>,
) -> Result<()> {
    position.validate()?;

    let sweep = price_sweep(position.strike_price);
    let curves = payoff(position, &sweep);
    let axes = ChartAxes::for_curves(&curves, position.strike_price);

    if let Some(path) = csv {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_payoff_csv(file, &curves)?;
        println!("Payoff curves written to: {}", path.display());
    }

    if json {
        let body = serde_json::json!({
            "position": position,
            "series": selection,
            "axes": axes,
            "curves": curves,
        });
        println!("{}", body);
        return Ok(());
    }

    let covered = if position.is_covered { "covered" } else { "naked" };
    println!("Option Payoff Simulation");
    println!("========================\n");
    println!("  Position: {} written {}", covered, position.option_type);
    println!("  Strike:    {}", format_amount(position.strike_price));
    println!("  Premium:   {} x {} contracts", format_amount(position.option_premium), position.num_options);
    if position.is_covered {
        println!("  Shares:    {}", position.num_stocks_owned);
    }
    println!();

    let mut header = format!("{:>12}", "Price");
    if selection.option {
        header.push_str(&format!(" {:>14}", "Option"));
    }
    if selection.stock {
        header.push_str(&format!(" {:>14}", "Stock"));
    }
    if selection.total {
        header.push_str(&format!(" {:>14}", "Total"));
    }
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));

    // Print at the x tick prices rather than all sweep points
    for &price in &axes.x_ticks {
        let mut line = format!("{:>12}", format_amount(price));
        if selection.option {
            line.push_str(&format!(" {:>14}", format_amount(position.option_profit(price))));
        }
        if selection.stock {
            line.push_str(&format!(" {:>14}", format_amount(position.stock_profit(price))));
        }
        if selection.total {
            line.push_str(&format!(" {:>14}", format_amount(position.total_profit(price))));
        }
        println!("{}", line);
    }

    println!(
        "\nProfit axis: {} to {} (step 10,000), strike marker at {}",
        format_amount(axes.y_min as f64),
        format_amount(axes.y_max as f64),
        format_amount(axes.strike_marker)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use investment_simulator::investment::INVALID_PLAN_MESSAGE;

    #[test]
    fn test_negative_amounts_reach_validation() {
        let cli = Cli::try_parse_from(["investment_simulator", "invest", "--monthly-investment", "-5"])
            .expect("negative amounts should parse");

        match cli.command {
            Command::Invest { monthly_investment, initial_capital, years, annual_rate_pct, monthly, json, csv } => {
                assert_eq!(monthly_investment, -5.0);
                let inputs = InvestmentInputs::new(monthly_investment, initial_capital, years, annual_rate_pct / 100.0);
                let err = run_invest(&inputs, monthly, json, csv).unwrap_err();
                assert!(err.to_string().contains(INVALID_PLAN_MESSAGE));
            }
            other => panic!("expected invest command, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_strike_and_premium_parse() {
        for flag in ["--strike", "--premium"] {
            let cli = Cli::try_parse_from(["investment_simulator", "options", flag, "-100"]);
            assert!(cli.is_ok(), "{} should accept a negative value", flag);
        }

        let cli = Cli::try_parse_from(["investment_simulator", "options", "--premium", "-1"]).unwrap();
        if let Command::Options { option_type, covered, stocks_owned, strike, premium, contracts, .. } = cli.command {
            let position = OptionPosition::new(option_type, covered, stocks_owned, strike, premium, contracts);
            assert!(position.validate().is_err());
        }
    }
}
