//! Tabular and JSON export of calculator results

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::investment::InvestmentResult;
use crate::options::PayoffCurves;

/// Format an amount as a whole number with comma thousands separators.
///
/// The fractional part is truncated, not rounded: `12345.99` -> `"12,345"`.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Serialize)]
struct YearlyRecord<'a> {
    #[serde(rename = "Year")]
    year: &'a str,
    #[serde(rename = "CumulativeAssets")]
    cumulative_assets: f64,
}

#[derive(Serialize)]
struct MonthlyRecord {
    #[serde(rename = "Month")]
    month: usize,
    #[serde(rename = "Balance")]
    balance: f64,
}

#[derive(Serialize)]
struct PayoffRecord {
    #[serde(rename = "StockPrice")]
    stock_price: f64,
    #[serde(rename = "OptionProfit")]
    option_profit: f64,
    #[serde(rename = "StockProfit")]
    stock_profit: f64,
    #[serde(rename = "TotalProfit")]
    total_profit: f64,
}

/// Write one row per plan year
pub fn write_yearly_csv<W: Write>(writer: W, result: &InvestmentResult) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for entry in &result.yearly_cumulative_assets {
        let label = entry.label();
        out.serialize(YearlyRecord {
            year: &label,
            cumulative_assets: entry.balance,
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Write the balance after every month, starting with month 0
pub fn write_monthly_csv<W: Write>(writer: W, result: &InvestmentResult) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for (month, &balance) in result.monthly_balances.iter().enumerate() {
        out.serialize(MonthlyRecord { month, balance })?;
    }
    out.flush()?;
    Ok(())
}

/// Write one row per sweep price
pub fn write_payoff_csv<W: Write>(writer: W, curves: &PayoffCurves) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for i in 0..curves.len() {
        out.serialize(PayoffRecord {
            stock_price: curves.prices[i],
            option_profit: curves.option_profit[i],
            stock_profit: curves.stock_profit[i],
            total_profit: curves.total_profit[i],
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Serialize any result as compact JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
