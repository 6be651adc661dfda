//! Dashboard assembly: joins dataset rows with every calculator.

use std::{cmp::Ordering, path::Path};

use crate::config::EngineConfig;
use crate::core::services::{
    KeywordMatch, ProjectionService, ResumeService, SavingsService, ScoreService, TaxService,
};
use crate::dataset::Dataset;
use crate::domain::{CityOutlook, DatasetRow, LifestyleTier, UserProfile};
use crate::resume::{extract_or_empty, TextExtractor};

/// Calculators bound to one configuration and one dataset.
#[derive(Debug, Clone)]
pub struct Engine<'d> {
    config: EngineConfig,
    dataset: &'d Dataset,
}

impl Engine<'static> {
    /// Engine over the built-in dataset with default settings.
    pub fn builtin() -> Self {
        Self::new(EngineConfig::default(), Dataset::builtin())
    }
}

impl<'d> Engine<'d> {
    pub fn new(config: EngineConfig, dataset: &'d Dataset) -> Self {
        Self { config, dataset }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dataset(&self) -> &'d Dataset {
        self.dataset
    }

    pub fn net_monthly_income(&self, gross_annual: f64, state: &str) -> f64 {
        TaxService::net_monthly_income(&self.config.tax, gross_annual, state)
    }

    pub fn monthly_loan_payment(&self, debt: f64) -> f64 {
        TaxService::monthly_loan_payment(&self.config.tax, debt)
    }

    pub fn thriving_score(
        &self,
        monthly_net: f64,
        monthly_rent: f64,
        col_index: f64,
        lifestyle: LifestyleTier,
    ) -> u8 {
        ScoreService::thriving_score(
            &self.config.score,
            monthly_net,
            monthly_rent,
            col_index,
            lifestyle,
        )
    }

    pub fn monthly_savings(
        &self,
        monthly_net: f64,
        rent: f64,
        loan_payment: f64,
        lifestyle: LifestyleTier,
    ) -> f64 {
        SavingsService::monthly_savings(
            &self.config.lifestyle,
            monthly_net,
            rent,
            loan_payment,
            lifestyle,
        )
    }

    pub fn project_wealth(&self, monthly_net: f64, monthly_rent: f64, col_index: f64) -> f64 {
        let projection = &self.config.projection;
        ProjectionService::project_wealth(projection, monthly_net, monthly_rent, col_index)
    }

    pub fn wealth_trajectory(
        &self,
        monthly_net: f64,
        monthly_rent: f64,
        col_index: f64,
    ) -> Vec<f64> {
        let projection = &self.config.projection;
        ProjectionService::wealth_trajectory(projection, monthly_net, monthly_rent, col_index)
    }

    /// Runs every calculator for one dataset row.
    pub fn outlook_for_row(
        &self,
        row: &DatasetRow,
        debt: f64,
        lifestyle: LifestyleTier,
    ) -> CityOutlook {
        let net_monthly = self.net_monthly_income(row.salary, &row.state);
        let taxes = TaxService::monthly_taxes(&self.config.tax, row.salary, &row.state);
        let rent = row.rent_or_zero();
        let loan_payment = self.monthly_loan_payment(debt);
        let breakdown = SavingsService::breakdown(
            &self.config.lifestyle,
            net_monthly,
            taxes,
            rent,
            loan_payment,
            lifestyle,
        );

        CityOutlook {
            category: row.category.clone(),
            city: row.city.clone(),
            state: row.state.clone(),
            gross_salary: row.salary,
            net_monthly,
            col_index: row.col_index,
            lifestyle,
            breakdown,
            thriving_score: self.thriving_score(net_monthly, rent, row.col_index, lifestyle),
            five_year_wealth: self.project_wealth(net_monthly, rent, row.col_index),
            coordinates: row.coordinates,
        }
    }

    /// Outlook for the selected city, `None` when the dataset has no such
    /// (category, city) pair.
    pub fn evaluate(&self, profile: &UserProfile) -> Option<CityOutlook> {
        let row = self.dataset.row(&profile.category, &profile.city)?;
        let outlook = self.outlook_for_row(row, profile.debt, profile.lifestyle);
        tracing::debug!(
            category = %outlook.category,
            city = %outlook.city,
            score = outlook.thriving_score,
            "evaluated city"
        );
        Some(outlook)
    }

    /// Every city offering `category`, best thriving score first; ties go to
    /// the larger five-year wealth.
    pub fn rank_cities(
        &self,
        category: &str,
        debt: f64,
        lifestyle: LifestyleTier,
    ) -> Vec<CityOutlook> {
        let mut outlooks: Vec<CityOutlook> = self
            .dataset
            .cities_for(category)
            .map(|row| self.outlook_for_row(row, debt, lifestyle))
            .collect();
        outlooks.sort_by(|a, b| {
            b.thriving_score.cmp(&a.thriving_score).then_with(|| {
                b.five_year_wealth
                    .partial_cmp(&a.five_year_wealth)
                    .unwrap_or(Ordering::Equal)
            })
        });
        tracing::info!(category, cities = outlooks.len(), %lifestyle, "ranked cities");
        outlooks
    }

    /// Keyword gap for a resume document. Extraction failures count as an
    /// empty resume.
    pub fn resume_gap(
        &self,
        category: &str,
        extractor: &dyn TextExtractor,
        source: &Path,
    ) -> KeywordMatch {
        let text = extract_or_empty(extractor, source);
        ResumeService::match_category(&text, category)
    }
}
