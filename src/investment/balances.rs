//! Output structures for savings projections

use serde::{Deserialize, Serialize};

/// A single month of projection output (only kept with detailed output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub month: u32,
    pub year: u32,
    pub month_in_year: u32,
    pub bop_balance: f64,
    pub deposit: f64,
    /// Growth credited this month (non-zero only at quarter end)
    pub growth: f64,
    pub eop_balance: f64,
}

/// Balance recorded at the end of a plan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearEndBalance {
    pub year: u32,
    pub balance: f64,
}

impl YearEndBalance {
    /// Display label, e.g. "Year 3"
    pub fn label(&self) -> String {
        year_label(self.year)
    }
}

fn year_label(year: u32) -> String {
    format!("Year {}", year)
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentResult {
    /// Equivalent quarterly rate used for compounding
    pub quarterly_return_rate: f64,

    /// Year-end balances in chronological order
    pub yearly_cumulative_assets: Vec<YearEndBalance>,

    /// Balance after each month; index 0 is the initial capital
    pub monthly_balances: Vec<f64>,

    /// Per-month detail rows, empty unless detailed output was requested
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rows: Vec<MonthlyRow>,

    /// Deposits made over the whole plan (excluding initial capital)
    pub total_deposits: f64,

    /// Growth credited over the whole plan
    pub total_growth: f64,
}

impl InvestmentResult {
    pub fn new(initial_capital: f64, quarterly_return_rate: f64, total_months: u64) -> Self {
        let mut monthly_balances = Vec::with_capacity(total_months as usize + 1);
        monthly_balances.push(initial_capital);

        Self {
            quarterly_return_rate,
            yearly_cumulative_assets: Vec::with_capacity((total_months / 12) as usize),
            monthly_balances,
            rows: Vec::new(),
            total_deposits: 0.0,
            total_growth: 0.0,
        }
    }

    /// Balance at the end of `year`, if the plan runs that long
    pub fn year(&self, year: u32) -> Option<f64> {
        self.yearly_cumulative_assets
            .iter()
            .find(|y| y.year == year)
            .map(|y| y.balance)
    }

    /// Look up a year-end balance by its "Year N" label
    pub fn by_label(&self, label: &str) -> Option<f64> {
        let year = label.strip_prefix("Year ")?.trim().parse().ok()?;
        self.year(year)
    }

    pub fn initial_capital(&self) -> f64 {
        self.monthly_balances.first().copied().unwrap_or(0.0)
    }

    /// Balance after the last projected month
    pub fn final_balance(&self) -> f64 {
        self.monthly_balances.last().copied().unwrap_or(0.0)
    }

    pub fn summary(&self) -> InvestmentSummary {
        let total_months = self.monthly_balances.len().saturating_sub(1) as u32;
        let initial_capital = self.initial_capital();
        let final_balance = self.final_balance();
        let total_contributions = initial_capital + self.total_deposits;

        InvestmentSummary {
            total_months,
            total_years: self.yearly_cumulative_assets.len() as u32,
            initial_capital,
            total_deposits: self.total_deposits,
            total_growth: self.total_growth,
            final_balance,
            growth_multiple: if total_contributions > 0.0 {
                final_balance / total_contributions
            } else {
                1.0
            },
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub total_months: u32,
    pub total_years: u32,
    pub initial_capital: f64,
    pub total_deposits: f64,
    pub total_growth: f64,
    pub final_balance: f64,
    /// Final balance over total money put in
    pub growth_multiple: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> InvestmentResult {
        let mut result = InvestmentResult::new(100.0, 0.0, 24);
        result.monthly_balances.extend((1..=24).map(|m| 100.0 + m as f64));
        result.yearly_cumulative_assets.push(YearEndBalance { year: 1, balance: 112.0 });
        result.yearly_cumulative_assets.push(YearEndBalance { year: 2, balance: 124.0 });
        result.total_deposits = 24.0;
        result
    }

    #[test]
    fn test_lookup_by_year_and_label() {
        let result = sample_result();
        assert_eq!(result.year(2), Some(124.0));
        assert_eq!(result.by_label("Year 1"), Some(112.0));
        assert_eq!(result.by_label("Year 3"), None);
        assert_eq!(result.by_label("Month 1"), None);
        assert_eq!(result.yearly_cumulative_assets[1].label(), "Year 2");
    }

    #[test]
    fn test_summary() {
        let summary = sample_result().summary();
        assert_eq!(summary.total_months, 24);
        assert_eq!(summary.total_years, 2);
        assert_eq!(summary.final_balance, 124.0);
        assert_eq!(summary.growth_multiple, 1.0);
    }

    #[test]
    fn test_growth_multiple_with_nothing_invested() {
        let result = InvestmentResult::new(0.0, 0.0, 12);
        assert_eq!(result.summary().growth_multiple, 1.0);
    }
}
