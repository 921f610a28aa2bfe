//! Axis layout for plotting payoff curves
//!
//! Drawing is left to whatever renders the chart; this only works out which
//! series to show and where the axes and ticks go.

use serde::Serialize;

use super::payoff::{OptionPosition, PayoffCurves};
use super::sweep::linspace;

/// Padding added above and below the profit range, also the y tick spacing
pub const Y_AXIS_STEP: i64 = 10_000;

/// Number of labelled ticks along the price axis
pub const X_TICK_COUNT: usize = 9;

/// Which curves the caller wants drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesSelection {
    pub option: bool,
    pub stock: bool,
    pub total: bool,
}

impl SeriesSelection {
    /// The stock curve only exists for covered positions
    pub fn for_position(position: &OptionPosition, option: bool, stock: bool, total: bool) -> Self {
        Self {
            option,
            stock: stock && position.is_covered,
            total,
        }
    }
}

/// Axis ranges and tick positions for a payoff chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAxes {
    pub y_min: i64,
    pub y_max: i64,
    pub y_ticks: Vec<i64>,
    pub x_ticks: Vec<f64>,
    /// Vertical marker at the strike
    pub strike_marker: f64,
}

impl ChartAxes {
    /// Lay out axes for `curves`.
    ///
    /// The y range always spans all three curves, hidden or not, so toggling a
    /// series never rescales the chart.
    pub fn for_curves(curves: &PayoffCurves, strike_price: f64) -> Self {
        let (lo, hi) = curves.profit_range().unwrap_or((0.0, 0.0));
        let y_min = lo.trunc() as i64 - Y_AXIS_STEP;
        let y_max = hi.trunc() as i64 + Y_AXIS_STEP;

        let y_ticks = (y_min..=y_max).step_by(Y_AXIS_STEP as usize).collect();

        let x_ticks = match (curves.prices.first(), curves.prices.last()) {
            (Some(&first), Some(&last)) => {
                let (x_lo, x_hi) = (first.min(last), first.max(last));
                linspace(x_lo, x_hi, X_TICK_COUNT)
            }
            _ => Vec::new(),
        };

        Self {
            y_min,
            y_max,
            y_ticks,
            x_ticks,
            strike_marker: strike_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::payoff::{payoff, OptionType};
    use crate::options::sweep::price_sweep;

    #[test]
    fn test_default_call_axes() {
        let pos = OptionPosition::default();
        let curves = payoff(&pos, &price_sweep(pos.strike_price));
        let axes = ChartAxes::for_curves(&curves, pos.strike_price);

        // Option profit runs from +5,000 down to -15,000; stock leg is flat zero
        assert_eq!(axes.y_min, -25_000);
        assert_eq!(axes.y_max, 15_000);
        assert_eq!(axes.y_ticks, vec![-25_000, -15_000, -5_000, 5_000, 15_000]);
        assert_eq!(axes.x_ticks.len(), 9);
        assert_eq!(axes.x_ticks[0], 30_000.0);
        assert_eq!(axes.x_ticks[4], 50_000.0);
        assert_eq!(axes.x_ticks[8], 70_000.0);
        assert_eq!(axes.strike_marker, 50_000.0);
    }

    #[test]
    fn test_range_includes_hidden_stock_leg() {
        let pos = OptionPosition::new(OptionType::Put, true, 4, 50_000.0, 5_000.0, 1);
        let curves = payoff(&pos, &price_sweep(pos.strike_price));
        let axes = ChartAxes::for_curves(&curves, pos.strike_price);

        // Stock leg reaches +80,000 at the top of the sweep, total +85,000
        assert_eq!(axes.y_max, 95_000);
        assert_eq!(axes.y_min, -105_000);
    }

    #[test]
    fn test_stock_series_needs_cover() {
        let uncovered = OptionPosition::default();
        let sel = SeriesSelection::for_position(&uncovered, true, true, true);
        assert!(!sel.stock);

        let covered = OptionPosition { is_covered: true, ..uncovered };
        assert!(SeriesSelection::for_position(&covered, true, true, false).stock);
    }
}
