use crate::config::ScoreConfig;
use crate::domain::LifestyleTier;

/// Purchasing-power adjusted affordability score.
pub struct ScoreService;

impl ScoreService {
    /// Bounded 0–100 thriving score.
    ///
    /// Discretionary income (net minus rent) is normalised to national-average
    /// purchasing power, one point per `dollars_per_point`, on top of the
    /// baseline. Rent above the burden threshold costs `slope` points per unit
    /// of ratio. The lifestyle tier does not shift the score.
    pub fn thriving_score(
        config: &ScoreConfig,
        monthly_net: f64,
        monthly_rent: f64,
        col_index: f64,
        _lifestyle: LifestyleTier,
    ) -> u8 {
        if !(monthly_net.is_finite() && monthly_net > 0.0) {
            return 0;
        }
        let rent = if monthly_rent.is_finite() {
            monthly_rent
        } else {
            0.0
        };
        let col = if col_index.is_finite() && col_index > 0.0 {
            col_index
        } else {
            config.fallback_col_index
        };

        let rent_ratio = rent / monthly_net;
        let rent_penalty = if rent_ratio > config.rent_burden_threshold {
            (rent_ratio - config.rent_burden_threshold) * config.rent_penalty_slope
        } else {
            0.0
        };

        let raw_discretionary = monthly_net - rent;
        let real_value = raw_discretionary / (col / 100.0);
        let per_point = config.dollars_per_point.max(f64::EPSILON);
        let score = config.baseline + real_value / per_point - rent_penalty;

        let floor = config.min_score.max(0.0).min(100.0);
        let ceiling = config.max_score.min(100.0).max(floor);
        if score.is_nan() {
            return floor as u8;
        }
        score.max(floor).min(ceiling) as u8
    }
}
