use crate::dataset::Dataset;
use crate::domain::common::same_key;

/// Salary assumed when the dataset knows nothing about a category.
pub const FALLBACK_SALARY: f64 = 85_000.0;

/// Predicts a salary for a category in a state from the loaded dataset.
pub struct SalaryEstimator<'a> {
    dataset: &'a Dataset,
}

impl<'a> SalaryEstimator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Mean salary for (category, state); else the category mean across all
    /// states; else [`FALLBACK_SALARY`].
    pub fn estimate(&self, category: &str, state: &str) -> f64 {
        let in_state = mean(
            self.dataset
                .cities_for(category)
                .filter(|row| same_key(&row.state, state))
                .map(|row| row.salary),
        );
        in_state
            .or_else(|| mean(self.dataset.cities_for(category).map(|row| row.salary)))
            .unwrap_or(FALLBACK_SALARY)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_cities_in_state() {
        let estimator = SalaryEstimator::new(Dataset::builtin());
        // Austin 65, Dallas 64, College Station 50 -> mean COL 59.667
        let expected = (109_000.0 + 108_400.0 + 100_000.0) / 3.0;
        assert!((estimator.estimate("Software Engineer", "tx") - expected).abs() < 1e-6);
    }

    #[test]
    fn falls_back_to_category_then_constant() {
        let estimator = SalaryEstimator::new(Dataset::builtin());
        let anywhere = estimator.estimate("UX Designer", "ZZ");
        assert!(anywhere > 0.0 && anywhere != FALLBACK_SALARY);
        assert_eq!(estimator.estimate("Astronaut", "TX"), FALLBACK_SALARY);
    }
}
