//! Running state of a savings projection

/// State of the account at a point in time during projection
#[derive(Debug, Clone)]
pub struct InvestmentState {
    /// Current projection month (0 = before the first deposit)
    pub month: u32,

    /// Plan year (1-indexed)
    pub year: u32,

    /// Month within plan year (1-12)
    pub month_in_year: u32,

    /// Balance at the start of the current month
    pub bop_balance: f64,

    /// Balance after this month's deposit and any growth
    pub balance: f64,

    /// Deposits made since month 0
    pub cumulative_deposits: f64,

    /// Growth credited since month 0
    pub cumulative_growth: f64,
}

impl InvestmentState {
    /// Start from the initial capital at month 0
    pub fn new(initial_capital: f64) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            bop_balance: initial_capital,
            balance: initial_capital,
            cumulative_deposits: 0.0,
            cumulative_growth: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.year = (self.month - 1) / 12 + 1;
        self.month_in_year = (self.month - 1) % 12 + 1;

        // BOP balance comes from prior EOP
        self.bop_balance = self.balance;
    }

    /// Months 3, 6, 9, 12, ... close a quarter
    pub fn is_quarter_end(&self) -> bool {
        self.month > 0 && self.month % 3 == 0
    }

    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }

    /// Record a deposit made at the start of the month
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
        self.cumulative_deposits += amount;
    }

    /// Credit growth on the whole current balance and return the amount credited
    pub fn credit_growth(&mut self, rate: f64) -> f64 {
        let growth = self.balance * rate;
        self.balance += growth;
        self.cumulative_growth += growth;
        growth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_timing() {
        let mut state = InvestmentState::new(0.0);

        state.advance_month();
        assert_eq!((state.month, state.year, state.month_in_year), (1, 1, 1));

        for _ in 1..12 {
            state.advance_month();
        }
        assert_eq!((state.month, state.year, state.month_in_year), (12, 1, 12));
        assert!(state.is_year_end());
        assert!(state.is_quarter_end());

        state.advance_month();
        assert_eq!((state.month, state.year, state.month_in_year), (13, 2, 1));
        assert!(!state.is_quarter_end());
    }

    #[test]
    fn test_month_zero_is_not_a_boundary() {
        let state = InvestmentState::new(500.0);
        assert!(!state.is_quarter_end());
        assert!(!state.is_year_end());
        assert_eq!(state.balance, 500.0);
    }

    #[test]
    fn test_growth_applies_to_post_deposit_balance() {
        let mut state = InvestmentState::new(1_000.0);
        state.advance_month();
        state.deposit(100.0);
        let growth = state.credit_growth(0.10);

        assert_eq!(growth, 110.0);
        assert_eq!(state.balance, 1_210.0);
        assert_eq!(state.cumulative_deposits, 100.0);
        assert_eq!(state.bop_balance, 1_000.0);
    }
}
