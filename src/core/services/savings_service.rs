use crate::config::LifestyleCosts;
use crate::domain::{BudgetBreakdown, LifestyleTier};

/// Monthly cash-flow arithmetic.
pub struct SavingsService;

impl SavingsService {
    /// `net − rent − loan − lifestyle(tier)`. Negative values are deficits and
    /// are returned as-is.
    pub fn monthly_savings(
        costs: &LifestyleCosts,
        monthly_net: f64,
        rent: f64,
        loan_payment: f64,
        lifestyle: LifestyleTier,
    ) -> f64 {
        monthly_net - rent - loan_payment - costs.cost_for(lifestyle)
    }

    pub fn breakdown(
        costs: &LifestyleCosts,
        monthly_net: f64,
        monthly_taxes: f64,
        rent: f64,
        loan_payment: f64,
        lifestyle: LifestyleTier,
    ) -> BudgetBreakdown {
        BudgetBreakdown {
            rent,
            taxes: monthly_taxes,
            loan_payment,
            lifestyle_cost: costs.cost_for(lifestyle),
            savings: Self::monthly_savings(costs, monthly_net, rent, loan_payment, lifestyle),
        }
    }
}
