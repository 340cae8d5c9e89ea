//! The tasting report handed to the report view, with JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::labels::{self, Locale};
use crate::model::TastingScore;
use crate::query::ReportParams;
use crate::scoring::{CategoryAverages, ScoreLevel};
use crate::wizard::Completion;

/// A complete tasting report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastingReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub style: String,
    pub brewery: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_date: Option<NaiveDate>,
    pub averages: CategoryAverages,
    /// Mean of the five averages, one decimal.
    pub total: f64,
    pub level: ScoreLevel,
    /// Raw scores, when the report came straight from a tasting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<TastingScore>,
}

impl TastingReport {
    /// Build a report from a finished wizard or sheet.
    pub fn from_completion(completion: &Completion) -> Self {
        let mut report = Self::from_params(&completion.params());
        report.drink_date = completion.beer.drink_date;
        report.package_date = completion.beer.package_date;
        report.score = Some(completion.score.clone());
        report
    }

    /// Build a report from decoded query parameters.
    pub fn from_params(params: &ReportParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: params.name.clone(),
            style: params.style.clone(),
            brewery: params.brewery.clone(),
            drink_date: None,
            package_date: None,
            averages: params.averages,
            total: params.total(),
            level: params.level(),
            score: None,
        }
    }

    pub fn params(&self) -> ReportParams {
        ReportParams {
            name: self.name.clone(),
            style: self.style.clone(),
            brewery: self.brewery.clone(),
            averages: self.averages,
        }
    }

    pub fn has_hop_sediment(&self) -> bool {
        self.score
            .as_ref()
            .is_some_and(|s| s.appearance.has_hop_sediment)
    }

    /// Name to show, falling back to a localized placeholder.
    pub fn display_name(&self, locale: Locale) -> &str {
        non_empty_or(&self.name, labels::unknown_name(locale))
    }

    pub fn display_style(&self, locale: Locale) -> &str {
        non_empty_or(&self.style, labels::unknown_style(locale))
    }

    pub fn display_brewery(&self, locale: Locale) -> &str {
        non_empty_or(&self.brewery, labels::unknown_brewery(locale))
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: TastingReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
