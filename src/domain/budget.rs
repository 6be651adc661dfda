//! Derived outputs of the projection engine.

use serde::{Deserialize, Serialize};

use crate::domain::common::Coordinates;
use crate::domain::profile::LifestyleTier;

/// Monthly budget split. Savings may be negative, signalling a deficit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BudgetBreakdown {
    pub rent: f64,
    pub taxes: f64,
    pub loan_payment: f64,
    pub lifestyle_cost: f64,
    pub savings: f64,
}

impl BudgetBreakdown {
    pub fn is_deficit(&self) -> bool {
        self.savings < 0.0
    }
}

/// Qualitative band for a thriving score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreBand {
    Struggling,
    Surviving,
    Comfortable,
    Thriving,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=29 => Self::Struggling,
            30..=59 => Self::Surviving,
            60..=79 => Self::Comfortable,
            _ => Self::Thriving,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Struggling => "Struggling",
            Self::Surviving => "Surviving",
            Self::Comfortable => "Comfortable",
            Self::Thriving => "Thriving",
        }
    }
}

/// Everything the dashboard shows for one city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityOutlook {
    pub category: String,
    pub city: String,
    pub state: String,
    pub gross_salary: f64,
    pub net_monthly: f64,
    pub col_index: f64,
    pub lifestyle: LifestyleTier,
    pub breakdown: BudgetBreakdown,
    pub thriving_score: u8,
    pub five_year_wealth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl CityOutlook {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.thriving_score)
    }

    /// Share of take-home pay spent on rent, `0.0` when there is no income.
    pub fn rent_burden(&self) -> f64 {
        if self.net_monthly > 0.0 {
            self.breakdown.rent / self.net_monthly
        } else {
            0.0
        }
    }
}
