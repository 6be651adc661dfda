use crate::config::{ProjectionConfig, MAX_PROJECTION_YEARS};

/// Multi-year compounding wealth projection.
pub struct ProjectionService;

impl ProjectionService {
    /// Cumulative balance at the end of each simulated year.
    ///
    /// Each year contributes `(net − rent − living) × 12`, then pay grows by
    /// the annual raise while rent and living costs grow with inflation.
    /// Negative contributions are kept and reduce the balance.
    pub fn wealth_trajectory(
        config: &ProjectionConfig,
        monthly_net: f64,
        monthly_rent: f64,
        col_index: f64,
    ) -> Vec<f64> {
        let mut net = monthly_net;
        let mut rent = monthly_rent;
        let mut living = (col_index / 100.0) * config.living_cost_baseline;
        let mut total = 0.0;
        let years = config.years.min(MAX_PROJECTION_YEARS);
        let mut balances = Vec::with_capacity(years as usize);

        for _ in 0..years {
            total += (net - rent - living) * 12.0;
            balances.push(total);
            net *= 1.0 + config.annual_raise;
            rent *= 1.0 + config.inflation;
            living *= 1.0 + config.inflation;
        }
        balances
    }

    /// Cumulative wealth after `config.years` years (five by default).
    pub fn project_wealth(
        config: &ProjectionConfig,
        monthly_net: f64,
        monthly_rent: f64,
        col_index: f64,
    ) -> f64 {
        Self::wealth_trajectory(config, monthly_net, monthly_rent, col_index)
            .last()
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_year_projection_compounds() {
        let config = ProjectionConfig::default();
        let trajectory = ProjectionService::wealth_trajectory(&config, 5000.0, 1500.0, 100.0);
        let expected = [27_600.0, 57_228.0, 89_004.84, 123_057.9852, 159_521.874_756];
        assert_eq!(trajectory.len(), 5);
        for (actual, expected) in trajectory.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-6, "{actual} != {expected}");
        }
        let wealth = ProjectionService::project_wealth(&config, 5000.0, 1500.0, 100.0);
        assert_eq!(wealth, trajectory[4]);
    }

    #[test]
    fn negative_contributions_reduce_wealth() {
        let config = ProjectionConfig::default();
        let wealth = ProjectionService::project_wealth(&config, 3000.0, 2500.0, 150.0);
        assert!(wealth < 0.0);
        assert!((wealth - -75_028.682_796).abs() < 1e-5);
    }

    #[test]
    fn zero_years_projects_nothing() {
        let config = ProjectionConfig {
            years: 0,
            ..ProjectionConfig::default()
        };
        assert_eq!(ProjectionService::project_wealth(&config, 5000.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn horizon_is_capped() {
        let config = ProjectionConfig {
            years: u32::MAX,
            ..ProjectionConfig::default()
        };
        let trajectory = ProjectionService::wealth_trajectory(&config, 5000.0, 1500.0, 100.0);
        assert_eq!(trajectory.len(), MAX_PROJECTION_YEARS as usize);
    }
}
