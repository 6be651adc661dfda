//! Narrative advice. Remote generators can plug in behind [`AdviceGenerator`];
//! [`OfflineAdvisor`] is the deterministic default and fallback.

use crate::core::services::KeywordMatch;
use crate::currency::{format_currency, format_percent};
use crate::domain::{CityOutlook, LifestyleTier, UserProfile};
use crate::errors::NextStepResult;

pub const CAREER_FALLBACK: &str = "Focus on building a portfolio relevant to local industries.";

pub trait AdviceGenerator {
    /// Three-sentence verdict on whether the lifestyle fits the city and debt.
    fn reality_check(&self, outlook: &CityOutlook, profile: &UserProfile)
        -> NextStepResult<String>;

    /// Short next step for closing the resume gap in the target city.
    fn career_advice(
        &self,
        category: &str,
        city: &str,
        gap: &KeywordMatch,
    ) -> NextStepResult<String>;
}

/// Rule-based advice derived from the numbers alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineAdvisor;

impl AdviceGenerator for OfflineAdvisor {
    fn reality_check(
        &self,
        outlook: &CityOutlook,
        profile: &UserProfile,
    ) -> NextStepResult<String> {
        let savings = outlook.breakdown.savings;
        let verdict = if savings >= 0.0 {
            format!(
                "A {} lifestyle in {} with {} of debt leaves about {} a month to save.",
                profile.lifestyle,
                outlook.city,
                format_currency(profile.debt),
                format_currency(savings)
            )
        } else {
            format!(
                "A {} lifestyle in {} with {} of debt runs a deficit of {} a month.",
                profile.lifestyle,
                outlook.city,
                format_currency(profile.debt),
                format_currency(-savings)
            )
        };

        let burden = outlook.rent_burden();
        let reality = if burden > 0.5 {
            format!(
                "Rent eats {} of take-home pay, so plan on roommates.",
                format_percent(burden)
            )
        } else if burden > 0.3 {
            format!(
                "Rent takes {} of take-home pay, above the 30% guideline.",
                format_percent(burden)
            )
        } else {
            format!(
                "Rent stays at {} of take-home pay, inside the 30% guideline.",
                format_percent(burden)
            )
        };

        let tip = match (profile.lifestyle, savings < 0.0) {
            (LifestyleTier::Boujee, true) => "Dropping to a Balanced budget is the fastest fix.",
            (_, true) => {
                "Look at cheaper neighbourhoods or a higher-paying offer before signing a lease."
            }
            (_, false) if outlook.breakdown.loan_payment > 0.0 => {
                "Put part of the surplus toward the loans to cut total interest."
            }
            _ => "Automate a transfer to savings on payday.",
        };

        Ok(format!("{verdict} {reality} {tip}"))
    }

    fn career_advice(
        &self,
        category: &str,
        city: &str,
        gap: &KeywordMatch,
    ) -> NextStepResult<String> {
        let Some(next_skill) = gap.missing.first() else {
            return Ok(format!(
                "Your resume already covers the core {category} skills; target senior {category} roles in {city}."
            ));
        };
        Ok(format!(
            "- Target {category} roles in {city}.\n- Build a project or earn a certification in {next_skill} to raise your offer."
        ))
    }
}

/// Asks `primary` first and falls back to [`OfflineAdvisor`] when it fails.
pub fn reality_check_or_fallback(
    primary: &dyn AdviceGenerator,
    outlook: &CityOutlook,
    profile: &UserProfile,
) -> String {
    primary
        .reality_check(outlook, profile)
        .or_else(|err| {
            tracing::warn!(error = %err, "advice generator failed, using offline advice");
            OfflineAdvisor.reality_check(outlook, profile)
        })
        .unwrap_or_default()
}

pub fn career_advice_or_fallback(
    primary: &dyn AdviceGenerator,
    category: &str,
    city: &str,
    gap: &KeywordMatch,
) -> String {
    primary
        .career_advice(category, city, gap)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "advice generator failed");
            CAREER_FALLBACK.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Engine;
    use crate::errors::NextStepError;

    struct Offline;

    impl AdviceGenerator for Offline {
        fn reality_check(&self, _: &CityOutlook, _: &UserProfile) -> NextStepResult<String> {
            Err(NextStepError::InvalidInput("no api key".into()))
        }

        fn career_advice(&self, _: &str, _: &str, _: &KeywordMatch) -> NextStepResult<String> {
            Err(NextStepError::InvalidInput("no api key".into()))
        }
    }

    fn outlook(profile: &UserProfile) -> CityOutlook {
        Engine::builtin().evaluate(profile).unwrap()
    }

    #[test]
    fn deficit_is_called_out() {
        let profile = UserProfile::new("UX Designer", "New York", 120_000.0, LifestyleTier::Boujee);
        let text = OfflineAdvisor.reality_check(&outlook(&profile), &profile).unwrap();
        assert!(text.contains("deficit"), "{text}");
        assert!(text.contains("Balanced"), "{text}");
    }

    #[test]
    fn surplus_mentions_savings() {
        let profile = UserProfile::new("Product Manager", "College Station", 0.0, LifestyleTier::Frugal);
        let text = OfflineAdvisor.reality_check(&outlook(&profile), &profile).unwrap();
        assert!(text.contains("to save"), "{text}");
    }

    #[test]
    fn failing_generator_falls_back() {
        let profile = UserProfile::new("Software Engineer", "Austin", 0.0, LifestyleTier::Balanced);
        let text = reality_check_or_fallback(&Offline, &outlook(&profile), &profile);
        assert!(!text.is_empty());
        let gap = KeywordMatch::default();
        assert_eq!(
            career_advice_or_fallback(&Offline, "Software Engineer", "Austin", &gap),
            CAREER_FALLBACK
        );
    }

    #[test]
    fn career_advice_names_first_missing_skill() {
        let gap = KeywordMatch {
            found: vec!["Python".into()],
            missing: vec!["Docker".into(), "AWS".into()],
            match_percentage: 33.3,
        };
        let text = OfflineAdvisor.career_advice("Software Engineer", "Seattle", &gap).unwrap();
        assert!(text.contains("Docker"));
        assert!(!text.contains("AWS"));
    }
}
