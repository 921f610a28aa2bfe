//! Investment Simulator - savings growth and option payoff calculators
//!
//! This library provides:
//! - Month-by-month savings projection with quarterly compounding
//! - Expiry payoff curves for written calls and puts, optionally covered
//! - Parallel batch runs over many savings scenarios
//! - CSV/JSON export of results

pub mod error;
pub mod investment;
pub mod options;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, SimulatorError};
pub use investment::{project, InvestmentConfig, InvestmentInputs, InvestmentProjector, InvestmentResult};
pub use options::{payoff, price_sweep, OptionPosition, OptionType, PayoffCurves};
pub use scenario::ScenarioRunner;
