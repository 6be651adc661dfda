//! Reference data describing cities and the salaries offered in them.

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Immutable city reference row. Rent is monthly, `col_index` uses 100 as the
/// national average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityRecord {
    pub name: String,
    pub state: String,
    pub coordinates: Coordinates,
    pub monthly_rent: f64,
    pub col_index: f64,
}

impl CityRecord {
    pub fn new(
        name: impl Into<String>,
        state: impl Into<String>,
        coordinates: Coordinates,
        monthly_rent: f64,
        col_index: f64,
    ) -> Self {
        Self {
            name: name.into(),
            state: state.into().to_uppercase(),
            coordinates,
            monthly_rent,
            col_index,
        }
    }
}

impl Displayable for CityRecord {
    fn display_label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}

/// Projected annual gross salary for one (category, city) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySalary {
    pub category: String,
    pub city: String,
    pub salary: f64,
}

impl CategorySalary {
    /// Returns `None` when the salary is not a positive amount.
    pub fn new(category: impl Into<String>, city: impl Into<String>, salary: f64) -> Option<Self> {
        if !(salary.is_finite() && salary > 0.0) {
            return None;
        }
        Some(Self {
            category: category.into(),
            city: city.into(),
            salary,
        })
    }
}

/// One joined dataset row as consumed by the calculators.
///
/// Rent and coordinates are optional because external salary tables often
/// omit them; consumers render a degraded view instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetRow {
    pub category: String,
    pub city: String,
    pub state: String,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,
    pub col_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl DatasetRow {
    pub fn join(salary: &CategorySalary, city: &CityRecord) -> Self {
        Self {
            category: salary.category.clone(),
            city: city.name.clone(),
            state: city.state.clone(),
            salary: salary.salary,
            rent: Some(city.monthly_rent),
            col_index: city.col_index,
            coordinates: Some(city.coordinates),
        }
    }

    /// Rent used by the calculators; a missing rent counts as zero.
    pub fn rent_or_zero(&self) -> f64 {
        self.rent.unwrap_or(0.0)
    }

    pub fn matches(&self, category: &str, city: &str) -> bool {
        same_key(&self.category, category) && same_key(&self.city, city)
    }
}

impl Displayable for DatasetRow {
    fn display_label(&self) -> String {
        format!("{} in {}, {}", self.category, self.city, self.state)
    }
}
