//! Written option payoff at expiry, with an optional covering stock leg

mod payoff;
pub mod sweep;
pub mod chart;

pub use payoff::{
    payoff, OptionPosition, OptionType, PayoffCurves, DEFAULT_NUM_OPTIONS,
    DEFAULT_OPTION_PREMIUM, DEFAULT_STOCKS_OWNED, DEFAULT_STRIKE_PRICE,
};
pub use sweep::{linspace, price_sweep, SWEEP_HALF_WIDTH, SWEEP_POINTS};
pub use chart::{ChartAxes, SeriesSelection};
