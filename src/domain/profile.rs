//! Per-request user selections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;

/// Discrete spending profile mapped to a fixed monthly discretionary spend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum LifestyleTier {
    Frugal,
    #[default]
    Balanced,
    Boujee,
}

impl LifestyleTier {
    pub const ALL: [LifestyleTier; 3] = [Self::Frugal, Self::Balanced, Self::Boujee];

    /// Parses a tier name case-insensitively, falling back to `Balanced` for
    /// anything unrecognised.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "frugal" => Self::Frugal,
            "balanced" => Self::Balanced,
            "boujee" => Self::Boujee,
            other => {
                tracing::debug!(tier = other, "unknown lifestyle tier, using Balanced");
                Self::Balanced
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frugal => "Frugal",
            Self::Balanced => "Balanced",
            Self::Boujee => "Boujee",
        }
    }
}

impl fmt::Display for LifestyleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient inputs for one calculation. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub debt: f64,
    pub lifestyle: LifestyleTier,
    pub category: String,
    pub city: String,
}

impl UserProfile {
    /// Negative or non-finite debt is treated as no debt.
    pub fn new(
        category: impl Into<String>,
        city: impl Into<String>,
        debt: f64,
        lifestyle: LifestyleTier,
    ) -> Self {
        Self {
            debt: if debt.is_finite() { debt.max(0.0) } else { 0.0 },
            lifestyle,
            category: category.into(),
            city: city.into(),
        }
    }
}

impl Displayable for UserProfile {
    fn display_label(&self) -> String {
        format!("{} in {} ({})", self.category, self.city, self.lifestyle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifestyle_parsing_is_lenient() {
        assert_eq!(LifestyleTier::parse_lenient("FRUGAL"), LifestyleTier::Frugal);
        assert_eq!(LifestyleTier::parse_lenient(" boujee "), LifestyleTier::Boujee);
        assert_eq!(LifestyleTier::parse_lenient("lavish"), LifestyleTier::Balanced);
    }

    #[test]
    fn profile_clamps_negative_debt() {
        let profile = UserProfile::new("UX Designer", "Austin", -100.0, LifestyleTier::Frugal);
        assert_eq!(profile.debt, 0.0);
    }
}
