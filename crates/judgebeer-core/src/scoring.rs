//! Category averages, the overall score and its qualitative level.
//!
//! Everything here is a pure function of a [`TastingScore`]; averages are
//! recomputed on demand and never cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Attribute, Category, TastingScore};

/// Round to one decimal place, the precision every score is shown with.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return crate::model::DEFAULT_SCORE;
    }
    sum / count as f64
}

/// Which attributes count towards each category average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringSchema {
    /// Every numeric attribute of every category.
    #[default]
    Extended,
    /// The short sheet: color/clarity/head for appearance and
    /// malt/hops/yeast/other for aroma. Other categories are unchanged.
    Classic,
}

impl ScoringSchema {
    pub fn attributes(self, category: Category) -> &'static [Attribute] {
        match (self, category) {
            (ScoringSchema::Classic, Category::Appearance) => {
                &[Attribute::Color, Attribute::Clarity, Attribute::Head]
            }
            (ScoringSchema::Classic, Category::Aroma) => &[
                Attribute::Malt,
                Attribute::Hops,
                Attribute::Yeast,
                Attribute::Other,
            ],
            (_, category) => category.attributes(),
        }
    }
}

impl fmt::Display for ScoringSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringSchema::Extended => write!(f, "extended"),
            ScoringSchema::Classic => write!(f, "classic"),
        }
    }
}

impl FromStr for ScoringSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extended" | "full" => Ok(ScoringSchema::Extended),
            "classic" | "short" => Ok(ScoringSchema::Classic),
            other => Err(format!("unknown scoring schema: {other}")),
        }
    }
}

/// The five category averages, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverages {
    pub appearance: f64,
    pub aroma: f64,
    pub taste: f64,
    pub mouthfeel: f64,
    pub overall: f64,
}

impl Default for CategoryAverages {
    fn default() -> Self {
        let d = crate::model::DEFAULT_SCORE;
        Self {
            appearance: d,
            aroma: d,
            taste: d,
            mouthfeel: d,
            overall: d,
        }
    }
}

impl CategoryAverages {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Appearance => self.appearance,
            Category::Aroma => self.aroma,
            Category::Taste => self.taste,
            Category::Mouthfeel => self.mouthfeel,
            Category::Overall => self.overall,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        match category {
            Category::Appearance => self.appearance = value,
            Category::Aroma => self.aroma = value,
            Category::Taste => self.taste = value,
            Category::Mouthfeel => self.mouthfeel = value,
            Category::Overall => self.overall = value,
        }
    }

    /// `(category, average)` pairs in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// The final report score: mean of the five averages, rounded.
    pub fn total(&self) -> f64 {
        round1(mean(self.iter().map(|(_, v)| v)))
    }

    pub fn level(&self) -> ScoreLevel {
        ScoreLevel::from_score(self.total())
    }
}

/// Average each category over every attribute of the extended schema.
pub fn aggregate(score: &TastingScore) -> CategoryAverages {
    aggregate_with(score, ScoringSchema::Extended)
}

/// Average each category over the attributes `schema` selects.
pub fn aggregate_with(score: &TastingScore, schema: ScoringSchema) -> CategoryAverages {
    let mut averages = CategoryAverages::default();
    for category in Category::ALL {
        let values = schema
            .attributes(category)
            .iter()
            .map(|&attr| score.get(attr));
        averages.set(category, round1(mean(values)));
    }
    averages
}

/// Qualitative label for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Exceptional,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreLevel {
    /// Tiers are inclusive at their lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            ScoreLevel::Exceptional
        } else if score >= 4.0 {
            ScoreLevel::Excellent
        } else if score >= 3.0 {
            ScoreLevel::Good
        } else if score >= 2.0 {
            ScoreLevel::Fair
        } else {
            ScoreLevel::Poor
        }
    }

    /// Accent color used by the report view.
    pub fn color(self) -> &'static str {
        match self {
            ScoreLevel::Exceptional => "#d97706",
            ScoreLevel::Excellent => "#16a34a",
            ScoreLevel::Good => "#2563eb",
            ScoreLevel::Fair => "#4b5563",
            ScoreLevel::Poor => "#dc2626",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLevel::Exceptional => write!(f, "exceptional"),
            ScoreLevel::Excellent => write!(f, "excellent"),
            ScoreLevel::Good => write!(f, "good"),
            ScoreLevel::Fair => write!(f, "fair"),
            ScoreLevel::Poor => write!(f, "poor"),
        }
    }
}

/// How the clarity slider reads back to the taster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClarityLevel {
    Clear,
    Hazy,
    Opaque,
}

impl ClarityLevel {
    pub fn from_value(clarity: f64) -> Self {
        if clarity <= 2.0 {
            ClarityLevel::Clear
        } else if clarity <= 4.0 {
            ClarityLevel::Hazy
        } else {
            ClarityLevel::Opaque
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_score_averages_to_three() {
        let averages = aggregate(&TastingScore::default());
        for (_, v) in averages.iter() {
            assert_eq!(v, 3.0);
        }
        assert_eq!(averages.total(), 3.0);
        assert_eq!(averages.level(), ScoreLevel::Good);
    }

    #[test]
    fn classic_appearance_example() {
        let mut score = TastingScore::default();
        score.appearance.color = 4.0;
        score.appearance.clarity = 3.0;
        score.appearance.head = 5.0;
        let averages = aggregate_with(&score, ScoringSchema::Classic);
        assert_eq!(averages.appearance, 4.0);
        assert_eq!(averages.aroma, 3.0);
    }

    #[test]
    fn extended_appearance_counts_every_slider() {
        let mut score = TastingScore::default();
        score.appearance.color = 4.0;
        score.appearance.head = 5.0;
        // (4 + 3 + 5 + 3 + 3 + 3 + 3) / 7 = 3.43
        assert_eq!(aggregate(&score).appearance, 3.4);
    }

    #[test]
    fn hop_sediment_flag_does_not_affect_average() {
        let mut score = TastingScore::default();
        score.appearance.has_hop_sediment = true;
        assert_eq!(aggregate(&score).appearance, 3.0);
    }

    #[test]
    fn category_average_is_rounded_mean() {
        let mut score = TastingScore::default();
        score.taste.sweet = 5.0;
        score.taste.bitter = 4.0;
        score.taste.sour = 1.0;
        score.taste.malt_flavor = 2.0;
        score.taste.hop_flavor = 5.0;
        // 17 / 5 = 3.4
        assert_eq!(aggregate(&score).taste, 3.4);

        score.mouthfeel.body = 5.0;
        score.mouthfeel.carbonation = 4.0;
        score.mouthfeel.finish = 4.0;
        // 13 / 3 = 4.333..
        assert_eq!(aggregate(&score).mouthfeel, 4.3);
    }

    #[test]
    fn total_is_mean_of_rounded_averages() {
        let averages = CategoryAverages {
            appearance: 4.0,
            aroma: 3.0,
            taste: 3.0,
            mouthfeel: 3.0,
            overall: 3.0,
        };
        assert_eq!(averages.total(), 3.2);
        assert_eq!(averages.level(), ScoreLevel::Good);
    }

    #[test]
    fn level_thresholds_are_lower_inclusive() {
        assert_eq!(ScoreLevel::from_score(5.0), ScoreLevel::Exceptional);
        assert_eq!(ScoreLevel::from_score(4.5), ScoreLevel::Exceptional);
        assert_eq!(ScoreLevel::from_score(4.4), ScoreLevel::Excellent);
        assert_eq!(ScoreLevel::from_score(4.0), ScoreLevel::Excellent);
        assert_eq!(ScoreLevel::from_score(3.0), ScoreLevel::Good);
        assert_eq!(ScoreLevel::from_score(2.9), ScoreLevel::Fair);
        assert_eq!(ScoreLevel::from_score(2.0), ScoreLevel::Fair);
        assert_eq!(ScoreLevel::from_score(1.0), ScoreLevel::Poor);
    }

    #[test]
    fn clarity_levels() {
        assert_eq!(ClarityLevel::from_value(1.5), ClarityLevel::Clear);
        assert_eq!(ClarityLevel::from_value(2.0), ClarityLevel::Clear);
        assert_eq!(ClarityLevel::from_value(4.0), ClarityLevel::Hazy);
        assert_eq!(ClarityLevel::from_value(4.1), ClarityLevel::Opaque);
    }

    #[test]
    fn schema_parse() {
        assert_eq!("classic".parse::<ScoringSchema>().unwrap(), ScoringSchema::Classic);
        assert!("huge".parse::<ScoringSchema>().is_err());
    }
}
