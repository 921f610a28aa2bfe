//! Core projection engine for monthly savings with quarterly compounding

use log::debug;

use super::balances::{InvestmentResult, MonthlyRow, YearEndBalance};
use super::inputs::InvestmentInputs;
use super::state::InvestmentState;

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct InvestmentConfig {
    /// Whether to keep a detail row for every month
    pub detailed_output: bool,
}

/// Equivalent quarterly rate for an annual rate.
///
/// Uses `(1 + annual) = (1 + quarterly)^4`.
pub fn quarterly_rate(annual_return_rate: f64) -> f64 {
    (1.0 + annual_return_rate).powf(0.25) - 1.0
}

/// Main projection engine
pub struct InvestmentProjector {
    config: InvestmentConfig,
}

impl InvestmentProjector {
    pub fn new(config: InvestmentConfig) -> Self {
        Self { config }
    }

    /// Run the month-by-month projection for a savings plan.
    ///
    /// Each month the deposit lands first; at quarter end growth is credited on
    /// the full post-deposit balance. Inputs are assumed to have been validated.
    pub fn project(&self, inputs: &InvestmentInputs) -> InvestmentResult {
        let quarterly = quarterly_rate(inputs.annual_return_rate);
        let total_months = inputs.total_months();

        debug!(
            "projecting {} months, annual {:.6} -> quarterly {:.8}",
            total_months, inputs.annual_return_rate, quarterly
        );

        let mut result = InvestmentResult::new(inputs.initial_capital, quarterly, total_months);
        let mut state = InvestmentState::new(inputs.initial_capital);

        for _month in 1..=total_months {
            state.advance_month();

            // Deposit on the first of the month, before any compounding
            state.deposit(inputs.monthly_investment);

            let growth = if state.is_quarter_end() {
                state.credit_growth(quarterly)
            } else {
                0.0
            };

            result.monthly_balances.push(state.balance);

            if self.config.detailed_output {
                result.rows.push(MonthlyRow {
                    month: state.month,
                    year: state.year,
                    month_in_year: state.month_in_year,
                    bop_balance: state.bop_balance,
                    deposit: inputs.monthly_investment,
                    growth,
                    eop_balance: state.balance,
                });
            }

            if state.is_year_end() {
                result.yearly_cumulative_assets.push(YearEndBalance {
                    year: state.month / 12,
                    balance: state.balance,
                });
            }
        }

        result.total_deposits = state.cumulative_deposits;
        result.total_growth = state.cumulative_growth;
        result
    }
}

impl Default for InvestmentProjector {
    fn default() -> Self {
        Self::new(InvestmentConfig::default())
    }
}

/// Project a plan from its four scalar inputs
pub fn project(
    monthly_investment: f64,
    initial_capital: f64,
    investment_years: u32,
    annual_return_rate: f64,
) -> InvestmentResult {
    let inputs = InvestmentInputs::new(
        monthly_investment,
        initial_capital,
        investment_years,
        annual_return_rate,
    );
    InvestmentProjector::default().project(&inputs)
}
