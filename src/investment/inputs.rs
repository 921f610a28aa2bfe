//! Savings plan inputs and their validation

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulatorError};

/// Default monthly contribution
pub const DEFAULT_MONTHLY_INVESTMENT: f64 = 1_000_000.0;
/// Default capital on hand at month 0
pub const DEFAULT_INITIAL_CAPITAL: f64 = 10_000_000.0;
/// Default plan length
pub const DEFAULT_INVESTMENT_YEARS: u32 = 10;
/// Default annual return (8%)
pub const DEFAULT_ANNUAL_RETURN_RATE: f64 = 0.08;

/// Longest plan whose month count still fits in a `u32`
pub const MAX_INVESTMENT_YEARS: u32 = u32::MAX / 12;

/// Message shown when any savings input is out of range
pub const INVALID_PLAN_MESSAGE: &str =
    "all inputs must be zero or greater and the investment period must be at least one year";

/// Parameters of a savings plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    /// Amount deposited at the start of every month
    pub monthly_investment: f64,

    /// Balance at month 0
    pub initial_capital: f64,

    /// Number of years to project (>= 1)
    pub investment_years: u32,

    /// Annual return as a decimal (0.08 = 8%)
    pub annual_return_rate: f64,
}

impl InvestmentInputs {
    pub fn new(
        monthly_investment: f64,
        initial_capital: f64,
        investment_years: u32,
        annual_return_rate: f64,
    ) -> Self {
        Self {
            monthly_investment,
            initial_capital,
            investment_years,
            annual_return_rate,
        }
    }

    /// Total number of months covered by the plan
    pub fn total_months(&self) -> u64 {
        u64::from(self.investment_years) * 12
    }

    /// Reject plans the projector is not meant to see.
    ///
    /// Amounts and rate must be finite and non-negative, and the plan must
    /// run for at least one year and at most `MAX_INVESTMENT_YEARS`.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("monthly_investment", self.monthly_investment)?;
        check_non_negative("initial_capital", self.initial_capital)?;
        check_non_negative("annual_return_rate", self.annual_return_rate)?;

        if self.investment_years == 0 || self.investment_years > MAX_INVESTMENT_YEARS {
            return Err(SimulatorError::invalid("investment_years", INVALID_PLAN_MESSAGE));
        }

        Ok(())
    }
}

impl Default for InvestmentInputs {
    fn default() -> Self {
        Self::new(
            DEFAULT_MONTHLY_INVESTMENT,
            DEFAULT_INITIAL_CAPITAL,
            DEFAULT_INVESTMENT_YEARS,
            DEFAULT_ANNUAL_RETURN_RATE,
        )
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulatorError::invalid(field, INVALID_PLAN_MESSAGE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let inputs = InvestmentInputs::default();
        assert!(inputs.validate().is_ok());
        assert_eq!(inputs.total_months(), 120);
    }

    #[test]
    fn test_zero_years_rejected() {
        let inputs = InvestmentInputs::new(1_000.0, 0.0, 0, 0.05);
        match inputs.validate() {
            Err(SimulatorError::InvalidInput { field, .. }) => assert_eq!(field, "investment_years"),
            other => panic!("expected invalid years, got {:?}", other),
        }
    }

    #[test]
    fn test_month_count_overflow_rejected() {
        let inputs = InvestmentInputs::new(0.0, 1.0, 400_000_000, 0.0);
        match inputs.validate() {
            Err(SimulatorError::InvalidInput { field, reason }) => {
                assert_eq!(field, "investment_years");
                assert_eq!(reason, INVALID_PLAN_MESSAGE);
            }
            other => panic!("expected invalid years, got {:?}", other),
        }
        assert_eq!(inputs.total_months(), 4_800_000_000);

        let longest = InvestmentInputs::new(0.0, 1.0, MAX_INVESTMENT_YEARS, 0.0);
        assert!(longest.validate().is_ok());
        assert!(longest.total_months() <= u64::from(u32::MAX));
        assert!(InvestmentInputs::new(0.0, 1.0, MAX_INVESTMENT_YEARS + 1, 0.0).validate().is_err());
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(InvestmentInputs::new(-1.0, 0.0, 1, 0.0).validate().is_err());
        assert!(InvestmentInputs::new(0.0, -5.0, 1, 0.0).validate().is_err());
        assert!(InvestmentInputs::new(0.0, 0.0, 1, -0.01).validate().is_err());
        assert!(InvestmentInputs::new(f64::NAN, 0.0, 1, 0.0).validate().is_err());
    }

    #[test]
    fn test_zero_everything_is_valid() {
        assert!(InvestmentInputs::new(0.0, 0.0, 1, 0.0).validate().is_ok());
    }
}
