//! Simulated expiry prices around the strike

/// Number of prices in a sweep
pub const SWEEP_POINTS: usize = 500;

/// Distance from the strike to either end of the sweep
pub const SWEEP_HALF_WIDTH: f64 = 20_000.0;

/// `num` evenly spaced values from `start` to `stop`, both ends included
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            // Pin the end so rounding never leaves it short
            values[num - 1] = stop;
            values
        }
    }
}

/// The standard 500-point sweep spanning strike ± 20,000
pub fn price_sweep(strike_price: f64) -> Vec<f64> {
    linspace(
        strike_price - SWEEP_HALF_WIDTH,
        strike_price + SWEEP_HALF_WIDTH,
        SWEEP_POINTS,
    )
}
