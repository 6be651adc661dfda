//! Tunable constants for every calculator, plus JSON persistence.
//!
//! Every field carries a serde default so a partial config file only
//! overrides what it names.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::LifestyleTier;
use crate::errors::NextStepResult;
use crate::utils::paths;

const TMP_SUFFIX: &str = "tmp";

/// Longest horizon the wealth projection simulates.
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Flat-rate tax model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxConfig {
    pub federal_rate: f64,
    pub fica_rate: f64,
    pub default_state_rate: f64,
    pub no_income_tax_states: Vec<String>,
    pub state_overrides: BTreeMap<String, f64>,
    /// Monthly repayment per 10,000 of student debt (10-year standard plan).
    pub loan_payment_per_10k: f64,
}

impl Default for TaxConfig {
    fn default() -> Self {
        let no_income_tax_states = ["TX", "FL", "WA", "NV", "TN", "NH", "SD", "WY", "AK"]
            .iter()
            .map(|code| code.to_string())
            .collect();
        let state_overrides = [
            ("CA", 0.09),
            ("NY", 0.06),
            ("MA", 0.05),
            ("IL", 0.05),
            ("CO", 0.045),
        ]
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect();
        Self {
            federal_rate: 0.22,
            fica_rate: 0.0765,
            default_state_rate: 0.05,
            no_income_tax_states,
            state_overrides,
            loan_payment_per_10k: 115.0,
        }
    }
}

impl TaxConfig {
    /// State income tax rate for a two-letter code; unknown codes get the default.
    pub fn state_rate(&self, state: &str) -> f64 {
        let code = state.trim().to_ascii_uppercase();
        if self.no_income_tax_states.iter().any(|s| s.eq_ignore_ascii_case(&code)) {
            return 0.0;
        }
        self.state_overrides
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(&code))
            .map(|(_, rate)| *rate)
            .unwrap_or(self.default_state_rate)
    }

    pub fn total_rate(&self, state: &str) -> f64 {
        self.federal_rate + self.fica_rate + self.state_rate(state)
    }
}

/// Shape of the thriving score curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreConfig {
    pub baseline: f64,
    /// Real discretionary dollars per score point.
    pub dollars_per_point: f64,
    /// Rent-to-income ratio above which the burden penalty applies.
    pub rent_burden_threshold: f64,
    pub rent_penalty_slope: f64,
    /// Substituted when the cost-of-living index is zero or invalid.
    pub fallback_col_index: f64,
    pub min_score: f64,
    pub max_score: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            baseline: 40.0,
            dollars_per_point: 50.0,
            rent_burden_threshold: 0.30,
            rent_penalty_slope: 150.0,
            fallback_col_index: 50.0,
            min_score: 0.0,
            max_score: 100.0,
        }
    }
}

impl ScoreConfig {
    /// Score bounds pulled inside 0..=100, with `max_score >= min_score`.
    pub fn bounded(mut self) -> Self {
        self.min_score = self.min_score.max(0.0).min(100.0);
        self.max_score = self.max_score.min(100.0).max(self.min_score);
        self
    }
}

/// Monthly discretionary spend per lifestyle tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LifestyleCosts {
    pub frugal: f64,
    pub balanced: f64,
    pub boujee: f64,
}

impl Default for LifestyleCosts {
    fn default() -> Self {
        Self {
            frugal: 900.0,
            balanced: 1700.0,
            boujee: 3000.0,
        }
    }
}

impl LifestyleCosts {
    pub fn cost_for(&self, tier: LifestyleTier) -> f64 {
        match tier {
            LifestyleTier::Frugal => self.frugal,
            LifestyleTier::Balanced => self.balanced,
            LifestyleTier::Boujee => self.boujee,
        }
    }
}

/// Growth assumptions for the multi-year wealth projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    pub years: u32,
    pub annual_raise: f64,
    pub inflation: f64,
    /// Non-rent living cost at a cost-of-living index of 100.
    pub living_cost_baseline: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years: 5,
            annual_raise: 0.05,
            inflation: 0.03,
            living_cost_baseline: 1200.0,
        }
    }
}

impl ProjectionConfig {
    pub fn bounded(mut self) -> Self {
        self.years = self.years.min(MAX_PROJECTION_YEARS);
        self
    }
}

/// All engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub tax: TaxConfig,
    pub score: ScoreConfig,
    pub lifestyle: LifestyleCosts,
    pub projection: ProjectionConfig,
    /// Optional salary table replacing the built-in dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Copy with every range-limited setting pulled back into range.
    pub fn bounded(mut self) -> Self {
        self.score = self.score.bounded();
        self.projection = self.projection.bounded();
        self
    }
}

/// Loads and saves [`EngineConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager bound to `~/.nextstep/config.json` (or `$NEXTSTEP_HOME`).
    pub fn new() -> Self {
        Self::with_path(paths::config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored config, or defaults when no file exists yet.
    /// Out-of-range score bounds and projection horizons are clamped.
    pub fn load(&self) -> NextStepResult<EngineConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let stored: EngineConfig = serde_json::from_str(&data)?;
            let config = stored.clone().bounded();
            if config != stored {
                tracing::warn!(path = %self.path.display(), "clamped out-of-range config values");
            }
            Ok(config)
        } else {
            Ok(EngineConfig::default())
        }
    }

    /// Like [`load`](Self::load), but a broken file degrades to defaults.
    pub fn load_or_default(&self) -> EngineConfig {
        match self.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "using default engine config"
                );
                EngineConfig::default()
            }
        }
    }

    pub fn save(&self, config: &EngineConfig) -> NextStepResult<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> NextStepResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_rates_follow_table() {
        let tax = TaxConfig::default();
        assert_eq!(tax.state_rate("TX"), 0.0);
        assert_eq!(tax.state_rate("ak"), 0.0);
        assert_eq!(tax.state_rate("CA"), 0.09);
        assert_eq!(tax.state_rate("co"), 0.045);
        assert_eq!(tax.state_rate("OH"), 0.05);
        assert_eq!(tax.state_rate("??"), 0.05);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "lifestyle": { "frugal": 800.0 } }"#).unwrap();
        assert_eq!(config.lifestyle.frugal, 800.0);
        assert_eq!(config.lifestyle.boujee, 3000.0);
        assert_eq!(config.tax, TaxConfig::default());
    }

    #[test]
    fn bounded_pulls_limits_into_range() {
        let config: EngineConfig = serde_json::from_str(
            r#"{ "score": { "min_score": 150.0, "max_score": -3.0 }, "projection": { "years": 4000000000 } }"#,
        )
        .unwrap();
        let config = config.bounded();
        assert_eq!(config.score.min_score, 100.0);
        assert_eq!(config.score.max_score, 100.0);
        assert_eq!(config.projection.years, MAX_PROJECTION_YEARS);
        assert_eq!(EngineConfig::default().bounded(), EngineConfig::default());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/x/config.json"));
        assert_eq!(tmp, PathBuf::from("/x/config.json.tmp"));
    }
}
