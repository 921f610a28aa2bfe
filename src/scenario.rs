//! Scenario runner for batch projections
//!
//! Runs many savings plans through one projector configuration, spreading the
//! work across threads with rayon. Output order always matches input order.

use log::info;
use rayon::prelude::*;

use crate::investment::{InvestmentConfig, InvestmentInputs, InvestmentProjector, InvestmentResult};

/// Runner holding the projector configuration shared by every scenario
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_rates(&InvestmentInputs::default(), &[0.04, 0.06, 0.08]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: InvestmentConfig,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InvestmentConfig) -> Self {
        Self { config }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &InvestmentInputs) -> InvestmentResult {
        InvestmentProjector::new(self.config.clone()).project(inputs)
    }

    /// Run projections for many plans in parallel
    pub fn run_batch(&self, scenarios: &[InvestmentInputs]) -> Vec<InvestmentResult> {
        info!("running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|inputs| self.run(inputs))
            .collect()
    }

    /// Run one plan under several annual return rates
    pub fn run_rates(&self, base: &InvestmentInputs, annual_rates: &[f64]) -> Vec<InvestmentResult> {
        let scenarios: Vec<InvestmentInputs> = annual_rates
            .iter()
            .map(|&annual_return_rate| InvestmentInputs { annual_return_rate, ..*base })
            .collect();
        self.run_batch(&scenarios)
    }

    pub fn config(&self) -> &InvestmentConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_sensitivity() {
        let runner = ScenarioRunner::new();
        let base = InvestmentInputs::new(100_000.0, 1_000_000.0, 10, 0.0);

        let results = runner.run_rates(&base, &[0.03, 0.05, 0.08]);
        assert_eq!(results.len(), 3);

        // Higher rate should result in higher final balance
        assert!(results[2].final_balance() > results[1].final_balance());
        assert!(results[1].final_balance() > results[0].final_balance());
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<_> = (1..=20)
            .map(|years| InvestmentInputs::new(1_000.0, 0.0, years, 0.05))
            .collect();

        let results = runner.run_batch(&scenarios);
        for (inputs, result) in scenarios.iter().zip(&results) {
            assert_eq!(result.yearly_cumulative_assets.len(), inputs.investment_years as usize);
            assert_eq!(result.final_balance(), runner.run(inputs).final_balance());
        }
    }

    #[test]
    fn test_detailed_config_carries_through() {
        let runner = ScenarioRunner::with_config(InvestmentConfig { detailed_output: true });
        let results = runner.run_batch(&[InvestmentInputs::new(10.0, 0.0, 2, 0.01)]);
        assert_eq!(results[0].rows.len(), 24);
        assert!(runner.config().detailed_output);
    }
}
