//! Report parameters exchanged with the report view as a query string.
//!
//! `name=X&style=Y&brewery=Z&appearance=4.0&aroma=3.5&taste=4.2&mouthfeel=3.8&overall=4.0`
//!
//! Averages are written with one decimal place. Decoding never fails: a
//! missing, unparseable, zero or non-finite average falls back to the
//! neutral score.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::model::{BeerInfo, Category, DEFAULT_SCORE};
use crate::scoring::{round1, CategoryAverages, ScoreLevel};

/// Beer metadata and category averages as the report view receives them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportParams {
    pub name: String,
    pub style: String,
    pub brewery: String,
    pub averages: CategoryAverages,
}

impl ReportParams {
    pub fn new(beer: &BeerInfo, averages: CategoryAverages) -> Self {
        Self {
            name: beer.name.clone(),
            style: beer.style_label(),
            brewery: beer.brewery.clone(),
            averages,
        }
    }

    pub fn total(&self) -> f64 {
        self.averages.total()
    }

    pub fn level(&self) -> ScoreLevel {
        self.averages.level()
    }

    /// Encode as a form-urlencoded query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("name", &self.name)
            .append_pair("style", &self.style)
            .append_pair("brewery", &self.brewery);
        for (category, value) in self.averages.iter() {
            serializer.append_pair(category.key(), &format!("{value:.1}"));
        }
        serializer.finish()
    }

    /// Decode a query string or a full URL. A leading `?`, a `#fragment`
    /// on a URL and any unknown keys are ignored. When a key repeats, its
    /// first value is used.
    pub fn from_query(input: &str) -> Self {
        let input = input.trim();
        match Url::parse(input) {
            Ok(url) => Self::from_pairs(url.query_pairs()),
            Err(_) => {
                let query = input.strip_prefix('?').unwrap_or(input);
                Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
            }
        }
    }

    fn from_pairs<'a>(pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Self {
        let mut params = ReportParams::default();
        let mut seen = HashSet::new();
        for (key, value) in pairs {
            if !seen.insert(key.clone()) {
                tracing::debug!(key = %key, "ignoring repeated report parameter");
                continue;
            }
            match key.as_ref() {
                "name" => params.name = value.into_owned(),
                "style" => params.style = value.into_owned(),
                "brewery" => params.brewery = value.into_owned(),
                other => {
                    if let Some(category) = Category::ALL.into_iter().find(|c| c.key() == other) {
                        params.averages.set(category, decode_score(&value));
                    } else {
                        tracing::debug!(key = other, "ignoring unknown report parameter");
                    }
                }
            }
        }
        params
    }
}

/// Parse one average, substituting the neutral score when it is unusable.
fn decode_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => round1(v),
        _ => DEFAULT_SCORE,
    }
}
