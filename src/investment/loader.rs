//! Load savings scenarios from CSV

use super::InvestmentInputs;
use crate::error::Result;
use csv::Reader;
use log::info;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "MonthlyInvestment")]
    monthly_investment: f64,
    #[serde(rename = "InitialCapital")]
    initial_capital: f64,
    #[serde(rename = "InvestmentYears")]
    investment_years: u32,
    #[serde(rename = "AnnualReturnRate")]
    annual_return_rate: f64,
}

impl CsvRow {
    fn to_inputs(self) -> Result<InvestmentInputs> {
        let inputs = InvestmentInputs::new(
            self.monthly_investment,
            self.initial_capital,
            self.investment_years,
            self.annual_return_rate,
        );
        inputs.validate()?;
        Ok(inputs)
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<InvestmentInputs>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let scenarios = read_rows(reader)?;
    info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<InvestmentInputs>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<InvestmentInputs>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_inputs()?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulatorError;

    #[test]
    fn test_load_from_reader() {
        let data = "\
MonthlyInvestment,InitialCapital,InvestmentYears,AnnualReturnRate
1000000,10000000,10,0.08
0,5000000,3,0.0
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0], InvestmentInputs::default());
        assert_eq!(scenarios[1].investment_years, 3);
        assert_eq!(scenarios[1].monthly_investment, 0.0);
    }

    #[test]
    fn test_invalid_row_rejected() {
        let data = "\
MonthlyInvestment,InitialCapital,InvestmentYears,AnnualReturnRate
1000,1000,0,0.05
";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SimulatorError::InvalidInput { field: "investment_years", .. }));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let data = "\
MonthlyInvestment,InitialCapital,InvestmentYears,AnnualReturnRate
lots,1000,5,0.05
";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SimulatorError::Csv(_)));
    }
}
