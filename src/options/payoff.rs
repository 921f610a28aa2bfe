//! Expiry payoff of a written option, optionally covered by stock
//!
//! Profits are seen from the writer's side: the premium is collected up front
//! and the position loses linearly once the option finishes in the money.
//! There is no time value and no pricing model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimulatorError};

/// Default strike
pub const DEFAULT_STRIKE_PRICE: f64 = 50_000.0;
/// Default premium per contract
pub const DEFAULT_OPTION_PREMIUM: f64 = 5_000.0;
/// Default contract count (one contract covers one share)
pub const DEFAULT_NUM_OPTIONS: u32 = 1;
/// Default shares held when the position is covered
pub const DEFAULT_STOCKS_OWNED: u32 = 1;

/// Option type (call or put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(SimulatorError::UnknownOptionType(s.to_string())),
        }
    }
}

/// A written option position with an optional stock leg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPosition {
    pub option_type: OptionType,

    /// Whether the underlying is held alongside the option
    pub is_covered: bool,

    /// Shares held; ignored unless covered
    pub num_stocks_owned: u32,

    pub strike_price: f64,

    /// Premium received per contract
    pub option_premium: f64,

    /// Number of contracts written (>= 1)
    pub num_options: u32,
}

impl OptionPosition {
    /// Build a position. Shares are dropped when the position is not covered.
    pub fn new(
        option_type: OptionType,
        is_covered: bool,
        num_stocks_owned: u32,
        strike_price: f64,
        option_premium: f64,
        num_options: u32,
    ) -> Self {
        Self {
            option_type,
            is_covered,
            num_stocks_owned: if is_covered { num_stocks_owned } else { 0 },
            strike_price,
            option_premium,
            num_options,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.strike_price.is_finite() || self.strike_price < 0.0 {
            return Err(SimulatorError::invalid("strike_price", "must be zero or greater"));
        }
        if !self.option_premium.is_finite() || self.option_premium < 0.0 {
            return Err(SimulatorError::invalid("option_premium", "must be zero or greater"));
        }
        if self.num_options == 0 {
            return Err(SimulatorError::invalid("num_options", "at least one contract is required"));
        }
        Ok(())
    }

    /// Premium collected across all contracts
    pub fn premium_income(&self) -> f64 {
        self.option_premium * self.num_options as f64
    }

    /// Option leg profit at expiry price `price`
    pub fn option_profit(&self, price: f64) -> f64 {
        let n = self.num_options as f64;
        let income = self.premium_income();

        match self.option_type {
            OptionType::Call => {
                if price <= self.strike_price {
                    income
                } else {
                    income - (price - self.strike_price) * n
                }
            }
            OptionType::Put => {
                if price >= self.strike_price {
                    income
                } else {
                    income - (self.strike_price - price) * n
                }
            }
        }
    }

    /// Stock leg profit, measured against the strike
    pub fn stock_profit(&self, price: f64) -> f64 {
        if self.is_covered {
            (price - self.strike_price) * self.num_stocks_owned as f64
        } else {
            0.0
        }
    }

    pub fn total_profit(&self, price: f64) -> f64 {
        self.option_profit(price) + self.stock_profit(price)
    }
}

impl Default for OptionPosition {
    fn default() -> Self {
        Self::new(
            OptionType::Call,
            false,
            DEFAULT_STOCKS_OWNED,
            DEFAULT_STRIKE_PRICE,
            DEFAULT_OPTION_PREMIUM,
            DEFAULT_NUM_OPTIONS,
        )
    }
}

/// Profit curves over a price sweep, index-aligned with the sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffCurves {
    pub prices: Vec<f64>,
    pub option_profit: Vec<f64>,
    pub stock_profit: Vec<f64>,
    pub total_profit: Vec<f64>,
}

impl PayoffCurves {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Lowest and highest value across all three curves
    pub fn profit_range(&self) -> Option<(f64, f64)> {
        self.option_profit
            .iter()
            .chain(&self.stock_profit)
            .chain(&self.total_profit)
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Evaluate every leg of `position` at each price in `price_sweep`
pub fn payoff(position: &OptionPosition, price_sweep: &[f64]) -> PayoffCurves {
    let option_profit: Vec<f64> = price_sweep.iter().map(|&p| position.option_profit(p)).collect();
    let stock_profit: Vec<f64> = price_sweep.iter().map(|&p| position.stock_profit(p)).collect();
    let total_profit = option_profit
        .iter()
        .zip(&stock_profit)
        .map(|(o, s)| o + s)
        .collect();

    PayoffCurves {
        prices: price_sweep.to_vec(),
        option_profit,
        stock_profit,
        total_profit,
    }
}
