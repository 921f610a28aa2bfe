//! Savings growth projection with monthly deposits and quarterly compounding

mod state;
mod engine;
mod balances;
mod inputs;
pub mod loader;

pub use state::InvestmentState;
pub use engine::{project, quarterly_rate, InvestmentConfig, InvestmentProjector};
pub use balances::{InvestmentResult, InvestmentSummary, MonthlyRow, YearEndBalance};
pub use inputs::{
    InvestmentInputs, DEFAULT_ANNUAL_RETURN_RATE, DEFAULT_INITIAL_CAPITAL,
    DEFAULT_INVESTMENT_YEARS, DEFAULT_MONTHLY_INVESTMENT, INVALID_PLAN_MESSAGE,
    MAX_INVESTMENT_YEARS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
