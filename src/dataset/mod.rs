//! Dataset provider: the joined (category, city, salary, rent, COL) table.
//!
//! The built-in table is deterministic and built once per process. External
//! CSV tables are fallible; [`Dataset::load_or_builtin`] degrades to the
//! built-in data instead of failing.

pub mod builtin;
pub mod csv_loader;
pub mod estimator;

use std::{borrow::Cow, collections::HashMap, path::Path};

use once_cell::sync::Lazy;

use crate::domain::common::same_key;
use crate::domain::{CityRecord, DatasetRow};
use crate::errors::NextStepResult;

pub use estimator::{SalaryEstimator, FALLBACK_SALARY};

static BUILTIN: Lazy<Dataset> = Lazy::new(|| {
    let cities = builtin::cities();
    let rows = builtin::salaries(&cities)
        .iter()
        .filter_map(|salary| {
            cities
                .iter()
                .find(|city| city.name == salary.city)
                .map(|city| DatasetRow::join(salary, city))
        })
        .collect();
    tracing::debug!("built-in dataset initialised");
    Dataset { cities, rows }
});

/// Immutable reference table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    cities: Vec<CityRecord>,
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Builds a table from joined rows. Repeated (category, city) pairs are
    /// merged into one row carrying their mean salary.
    pub fn new(cities: Vec<CityRecord>, rows: Vec<DatasetRow>) -> Self {
        Self {
            cities,
            rows: merge_duplicates(rows),
        }
    }

    /// Process-wide built-in table, constructed on first use.
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    /// Loads a salary table from CSV, enriching rows with the built-in city data.
    pub fn from_csv_path(path: &Path) -> NextStepResult<Self> {
        let cities = builtin::cities();
        let rows = csv_loader::load_rows(path, &cities)?;
        Ok(Self::new(cities, rows))
    }

    /// Loads `path` when given, falling back to the built-in table on any
    /// failure or when the file holds no usable rows.
    pub fn load_or_builtin(path: Option<&Path>) -> Cow<'static, Dataset> {
        let Some(path) = path else {
            return Cow::Borrowed(Self::builtin());
        };
        match Self::from_csv_path(path) {
            Ok(dataset) if !dataset.rows.is_empty() => Cow::Owned(dataset),
            Ok(_) => {
                tracing::warn!(path = %path.display(), "salary table is empty, using built-in");
                Cow::Borrowed(Self::builtin())
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "could not load salary table, using built-in"
                );
                Cow::Borrowed(Self::builtin())
            }
        }
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !categories.iter().any(|known| same_key(known, &row.category)) {
                categories.push(&row.category);
            }
        }
        categories
    }

    /// Every row offered for a category.
    pub fn cities_for<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a DatasetRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| same_key(&row.category, category))
    }

    pub fn row(&self, category: &str, city: &str) -> Option<&DatasetRow> {
        self.rows.iter().find(|row| row.matches(category, city))
    }

    pub fn city(&self, name: &str) -> Option<&CityRecord> {
        self.cities.iter().find(|city| same_key(&city.name, name))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Keeps the first row of each (category, city) pair, with the salary
/// replaced by the mean over every occurrence.
fn merge_duplicates(rows: Vec<DatasetRow>) -> Vec<DatasetRow> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut merged: Vec<(DatasetRow, usize)> = Vec::with_capacity(rows.len());
    for row in rows {
        let key = (
            row.category.trim().to_ascii_lowercase(),
            row.city.trim().to_ascii_lowercase(),
        );
        match index.get(&key) {
            Some(&slot) => {
                let (kept, count) = &mut merged[slot];
                *count += 1;
                kept.salary += (row.salary - kept.salary) / *count as f64;
            }
            None => {
                index.insert(key, merged.len());
                merged.push((row, 1));
            }
        }
    }
    let duplicates = merged.iter().filter(|(_, count)| *count > 1).count();
    if duplicates > 0 {
        tracing::debug!(pairs = duplicates, "averaged repeated salary rows");
    }
    merged.into_iter().map(|(row, _)| row).collect()
}
