use crate::config::TaxConfig;

/// Flat-rate take-home pay and student-loan repayment estimates.
pub struct TaxService;

impl TaxService {
    /// Monthly net income: `gross × (1 − (federal + fica + state)) / 12`.
    ///
    /// Non-positive or non-finite salaries are clamped to zero.
    pub fn net_monthly_income(tax: &TaxConfig, gross_annual: f64, state: &str) -> f64 {
        let gross = clamp_salary(gross_annual);
        gross * (1.0 - tax.total_rate(state)) / 12.0
    }

    /// Monthly taxes withheld (federal, FICA and state combined).
    pub fn monthly_taxes(tax: &TaxConfig, gross_annual: f64, state: &str) -> f64 {
        clamp_salary(gross_annual) / 12.0 - Self::net_monthly_income(tax, gross_annual, state)
    }

    /// Linear approximation of a 10-year standard repayment plan.
    pub fn monthly_loan_payment(tax: &TaxConfig, debt: f64) -> f64 {
        let debt = if debt.is_finite() { debt.max(0.0) } else { 0.0 };
        debt / 10_000.0 * tax.loan_payment_per_10k
    }
}

fn clamp_salary(gross_annual: f64) -> f64 {
    if gross_annual.is_finite() && gross_annual > 0.0 {
        gross_annual
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn texas_has_no_state_tax() {
        let tax = TaxConfig::default();
        assert!(close(TaxService::net_monthly_income(&tax, 100_000.0, "TX"), 5862.50));
    }

    #[test]
    fn california_uses_override_rate() {
        let tax = TaxConfig::default();
        assert!(close(TaxService::net_monthly_income(&tax, 100_000.0, "CA"), 5112.50));
    }

    #[test]
    fn unknown_state_uses_default_rate() {
        let tax = TaxConfig::default();
        let expected = 100_000.0 * (1.0 - (0.22 + 0.0765 + 0.05)) / 12.0;
        assert!(close(TaxService::net_monthly_income(&tax, 100_000.0, "ZZ"), expected));
    }

    #[test]
    fn non_positive_salary_clamps_to_zero() {
        let tax = TaxConfig::default();
        assert_eq!(TaxService::net_monthly_income(&tax, 0.0, "TX"), 0.0);
        assert_eq!(TaxService::net_monthly_income(&tax, -50_000.0, "CA"), 0.0);
        assert_eq!(TaxService::monthly_taxes(&tax, -50_000.0, "CA"), 0.0);
    }

    #[test]
    fn taxes_and_net_add_up_to_gross() {
        let tax = TaxConfig::default();
        let net = TaxService::net_monthly_income(&tax, 84_000.0, "NY");
        let taxes = TaxService::monthly_taxes(&tax, 84_000.0, "NY");
        assert!(close(net + taxes, 7_000.0));
    }

    #[test]
    fn loan_payment_scales_linearly() {
        let tax = TaxConfig::default();
        assert!(close(TaxService::monthly_loan_payment(&tax, 30_000.0), 345.0));
        assert_eq!(TaxService::monthly_loan_payment(&tax, -1.0), 0.0);
    }
}
