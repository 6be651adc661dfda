//! Synthetic reference data: 24 US cities and five career categories.
//!
//! Rent approximates a one-bedroom near the city centre. The index is a
//! Numbeo-style cost-of-living figure on a 100 scale.

use crate::domain::{CategorySalary, CityRecord, Coordinates};

/// Market rate before the category multiplier: `70_000 + col × 600`.
pub const BASE_SALARY: f64 = 70_000.0;
pub const SALARY_PER_COL_POINT: f64 = 600.0;

/// (category, salary multiplier)
pub const CATEGORY_MULTIPLIERS: &[(&str, f64)] = &[
    ("Software Engineer", 1.0),
    ("Data Scientist", 1.12),
    ("Product Manager", 1.15),
    ("Cybersecurity Analyst", 1.08),
    ("UX Designer", 0.95),
];

/// (city, state, lat, lon, rent, col)
const CITIES: &[(&str, &str, f64, f64, f64, f64)] = &[
    // expensive tech hubs
    ("San Francisco", "CA", 37.77, -122.41, 3200.0, 96.0),
    ("New York", "NY", 40.71, -74.00, 3600.0, 100.0),
    ("Seattle", "WA", 47.60, -122.33, 2300.0, 85.0),
    ("Boston", "MA", 42.36, -71.05, 2700.0, 88.0),
    ("Los Angeles", "CA", 34.05, -118.24, 2600.0, 82.0),
    ("Washington", "DC", 38.90, -77.03, 2400.0, 84.0),
    ("San Diego", "CA", 32.71, -117.16, 2500.0, 80.0),
    // rising hubs
    ("Austin", "TX", 30.26, -97.74, 1700.0, 65.0),
    ("Denver", "CO", 39.73, -104.99, 1900.0, 68.0),
    ("Atlanta", "GA", 33.74, -84.38, 1800.0, 66.0),
    ("Chicago", "IL", 41.87, -87.62, 2000.0, 70.0),
    ("Miami", "FL", 25.76, -80.19, 2400.0, 78.0),
    ("Dallas", "TX", 32.77, -96.79, 1600.0, 64.0),
    ("Phoenix", "AZ", 33.44, -112.07, 1500.0, 62.0),
    // hidden gems
    ("Raleigh", "NC", 35.77, -78.63, 1400.0, 63.0),
    ("Salt Lake City", "UT", 40.76, -111.89, 1500.0, 64.0),
    ("Huntsville", "AL", 34.73, -86.58, 1100.0, 55.0),
    ("Columbus", "OH", 39.96, -82.99, 1200.0, 58.0),
    ("Pittsburgh", "PA", 40.44, -79.99, 1300.0, 60.0),
    ("Minneapolis", "MN", 44.97, -93.26, 1400.0, 66.0),
    ("Charlotte", "NC", 35.22, -80.84, 1500.0, 64.0),
    // college towns
    ("College Station", "TX", 30.62, -96.33, 900.0, 50.0),
    ("Boulder", "CO", 40.01, -105.27, 2100.0, 75.0),
    ("Ann Arbor", "MI", 42.28, -83.74, 1800.0, 68.0),
];

pub fn cities() -> Vec<CityRecord> {
    CITIES
        .iter()
        .map(|&(name, state, lat, lon, rent, col)| {
            CityRecord::new(name, state, Coordinates::new(lat, lon), rent, col)
        })
        .collect()
}

/// Projected salary for a category in a city; unknown categories use a 1.0
/// multiplier.
pub fn projected_salary(category: &str, col_index: f64) -> f64 {
    let multiplier = CATEGORY_MULTIPLIERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category.trim()))
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0);
    (BASE_SALARY + col_index * SALARY_PER_COL_POINT) * multiplier
}

/// One salary per (category, city) pair, categories in table order.
pub fn salaries(cities: &[CityRecord]) -> Vec<CategorySalary> {
    CATEGORY_MULTIPLIERS
        .iter()
        .flat_map(|(category, _)| {
            cities.iter().filter_map(move |city| {
                let salary = projected_salary(category, city.col_index);
                CategorySalary::new(*category, city.name.clone(), salary)
            })
        })
        .collect()
}
