//! TOML tasting sheets.
//!
//! A sheet fills in the whole questionnaire at once, for tastings written up
//! offline. Missing fields keep the neutral default; out-of-range values are
//! clamped and reported as warnings rather than rejected.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{parse_date, Attribute, BeerInfo, BeerStyle, Category, TastingScore};
use crate::scoring::{aggregate_with, ScoringSchema};
use crate::wizard::Completion;

#[derive(Debug, Default, Deserialize)]
struct TomlSheet {
    #[serde(default)]
    beer: TomlBeer,
    #[serde(default)]
    appearance: toml::Table,
    #[serde(default)]
    aroma: toml::Table,
    #[serde(default)]
    taste: toml::Table,
    #[serde(default)]
    mouthfeel: toml::Table,
    #[serde(default)]
    overall: toml::Table,
}

#[derive(Debug, Default, Deserialize)]
struct TomlBeer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    brewery: String,
    #[serde(default)]
    drink_date: Option<toml::Value>,
    #[serde(default)]
    package_date: Option<toml::Value>,
}

impl TomlSheet {
    fn table(&self, category: Category) -> &toml::Table {
        match category {
            Category::Appearance => &self.appearance,
            Category::Aroma => &self.aroma,
            Category::Taste => &self.taste,
            Category::Mouthfeel => &self.mouthfeel,
            Category::Overall => &self.overall,
        }
    }
}

const HOP_SEDIMENT_KEYS: [&str; 3] = ["hasHopSediment", "hasHopShit", "has_hop_sediment"];

/// A warning produced while reading or checking a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetWarning {
    /// Dotted field path, e.g. `taste.sweet`; `None` for sheet-wide warnings.
    pub field: Option<String>,
    pub message: String,
}

impl SheetWarning {
    fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

/// A parsed tasting sheet.
#[derive(Debug, Clone)]
pub struct TastingSheet {
    pub source: PathBuf,
    pub beer: BeerInfo,
    pub score: TastingScore,
    /// Coercions applied while parsing.
    pub warnings: Vec<SheetWarning>,
}

impl TastingSheet {
    /// Score the sheet as if it had been entered through the wizard.
    pub fn completion(&self, schema: ScoringSchema) -> Completion {
        Completion {
            beer: self.beer.clone(),
            score: self.score.clone(),
            averages: aggregate_with(&self.score, schema),
        }
    }
}

/// Parse a single sheet file.
pub fn parse_sheet(path: &Path) -> Result<TastingSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tasting sheet: {}", path.display()))?;

    parse_sheet_str(&content, path)
}

/// Parse a TOML string into a sheet (useful for testing).
pub fn parse_sheet_str(content: &str, source_path: &Path) -> Result<TastingSheet> {
    let parsed: TomlSheet = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut warnings = Vec::new();

    let style = match parsed.beer.style.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<BeerStyle>() {
            Ok(style) => Some(style),
            Err(e) => {
                warnings.push(SheetWarning::field("beer.style", e));
                None
            }
        },
    };

    let beer = BeerInfo {
        name: parsed.beer.name.trim().to_string(),
        style,
        brewery: parsed.beer.brewery.trim().to_string(),
        drink_date: sheet_date(parsed.beer.drink_date.as_ref(), "beer.drink_date")?,
        package_date: sheet_date(parsed.beer.package_date.as_ref(), "beer.package_date")?,
    };

    let mut score = TastingScore::default();
    for category in Category::ALL {
        for (key, value) in parsed.table(category) {
            let path = format!("{category}.{key}");

            if category == Category::Appearance && HOP_SEDIMENT_KEYS.contains(&key.as_str()) {
                score.appearance.has_hop_sediment = value
                    .as_bool()
                    .with_context(|| format!("{path} must be true or false"))?;
                continue;
            }

            let attribute = match key.parse::<Attribute>() {
                Ok(a) if a.category() == category => a,
                _ => {
                    warnings.push(SheetWarning::field(&path, "unknown attribute, ignored"));
                    continue;
                }
            };

            let raw = match value {
                toml::Value::Float(f) => *f,
                toml::Value::Integer(i) => *i as f64,
                other => anyhow::bail!("{path} must be a number, got {}", other.type_str()),
            };
            let stored = attribute.normalize(raw);
            if (stored - raw).abs() > 1e-9 {
                tracing::warn!(field = %path, raw, stored, "sheet value adjusted");
                warnings.push(SheetWarning::field(
                    &path,
                    format!("{raw} adjusted to {stored:.1}"),
                ));
            }
            score.set(attribute, stored);
        }
    }

    Ok(TastingSheet {
        source: source_path.to_path_buf(),
        beer,
        score,
        warnings,
    })
}

fn sheet_date(value: Option<&toml::Value>, field: &str) -> Result<Option<chrono::NaiveDate>> {
    let text = match value {
        None => return Ok(None),
        Some(toml::Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(toml::Value::String(s)) => s.clone(),
        Some(toml::Value::Datetime(dt)) => dt.to_string(),
        Some(other) => anyhow::bail!("{field} must be a date, got {}", other.type_str()),
    };
    let date = parse_date(&text).with_context(|| format!("invalid {field}"))?;
    Ok(Some(date))
}

/// Recursively load all `.toml` sheets from a directory.
pub fn load_sheet_directory(dir: &Path) -> Result<Vec<TastingSheet>> {
    let mut sheets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            sheets.extend(load_sheet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(sheets)
}

/// Check a parsed sheet for things worth pointing out. Nothing here is fatal.
pub fn validate_sheet(sheet: &TastingSheet) -> Vec<SheetWarning> {
    let mut warnings = sheet.warnings.clone();

    if sheet.beer.name.is_empty() {
        warnings.push(SheetWarning::field("beer.name", "beer has no name"));
    }
    if sheet.beer.style.is_none() {
        warnings.push(SheetWarning::field("beer.style", "no style chosen"));
    }
    if let (Some(drunk), Some(packaged)) = (sheet.beer.drink_date, sheet.beer.package_date) {
        if packaged > drunk {
            warnings.push(SheetWarning {
                field: None,
                message: format!("package date {packaged} is after drink date {drunk}"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[beer]
name = "Pliny the Elder"
style = "Double IPA"
brewery = "Russian River"
drink_date = 2024-05-01
package_date = "2024-04-20"

[appearance]
color = 4.2
clarity = 2
head = 5
hasHopSediment = true

[aroma]
hops = 5
skunky = 1

[taste]
bitter = 5

[overall]
enjoyment = 5
"#;

    #[test]
    fn parse_sample_sheet() {
        let sheet = parse_sheet_str(SAMPLE, Path::new("sample.toml")).unwrap();
        assert_eq!(sheet.beer.name, "Pliny the Elder");
        assert_eq!(sheet.beer.style, Some(BeerStyle::DoubleIpa));
        assert_eq!(sheet.beer.drink_date.unwrap().to_string(), "2024-05-01");
        assert_eq!(sheet.beer.package_date.unwrap().to_string(), "2024-04-20");
        assert_eq!(sheet.score.appearance.color, 4.2);
        assert_eq!(sheet.score.appearance.clarity, 2.0);
        assert!(sheet.score.appearance.has_hop_sediment);
        assert_eq!(sheet.score.aroma.skunky, 1.0);
        assert_eq!(sheet.score.mouthfeel.body, 3.0);
        assert!(sheet.warnings.is_empty(), "{:?}", sheet.warnings);
    }

    #[test]
    fn sheet_completion_uses_requested_schema() {
        let sheet = parse_sheet_str(SAMPLE, Path::new("sample.toml")).unwrap();
        let classic = sheet.completion(ScoringSchema::Classic);
        // (4.2 + 2 + 5) / 3
        assert_eq!(classic.averages.appearance, 3.7);
        let extended = sheet.completion(ScoringSchema::Extended);
        // (4.2 + 2 + 5 + 3 * 4) / 7
        assert_eq!(extended.averages.appearance, 3.3);
        assert!(extended.query().starts_with("name=Pliny+the+Elder&style=Double+IPA"));
    }

    #[test]
    fn empty_sheet_is_all_defaults() {
        let sheet = parse_sheet_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(sheet.score, TastingScore::default());
        assert_eq!(sheet.beer, BeerInfo::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_with_warning() {
        let sheet = parse_sheet_str(
            "[taste]\nsweet = 9\nsour = 2.6\n",
            Path::new("x.toml"),
        )
        .unwrap();
        assert_eq!(sheet.score.taste.sweet, 5.0);
        assert_eq!(sheet.score.taste.sour, 3.0);
        assert_eq!(sheet.warnings.len(), 2);
        assert_eq!(sheet.warnings[0].field.as_deref(), Some("taste.sour"));
    }

    #[test]
    fn unknown_keys_and_styles_warn() {
        let sheet = parse_sheet_str(
            "[beer]\nstyle = \"Mead\"\n[mouthfeel]\nsparkle = 4\nsweet = 4\n",
            Path::new("x.toml"),
        )
        .unwrap();
        assert!(sheet.beer.style.is_none());
        let fields: Vec<_> = sheet
            .warnings
            .iter()
            .filter_map(|w| w.field.as_deref())
            .collect();
        assert!(fields.contains(&"beer.style"));
        assert!(fields.contains(&"mouthfeel.sparkle"));
        // `sweet` exists, but belongs to taste.
        assert!(fields.contains(&"mouthfeel.sweet"));
    }

    #[test]
    fn non_numeric_score_is_an_error() {
        let err = parse_sheet_str("[taste]\nsweet = \"very\"\n", Path::new("x.toml")).unwrap_err();
        assert!(err.to_string().contains("taste.sweet"));
    }

    #[test]
    fn bad_date_is_an_error() {
        let err = parse_sheet_str("[beer]\ndrink_date = \"May 1st\"\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("beer.drink_date"));
    }

    #[test]
    fn validate_flags_missing_metadata_and_date_order() {
        let sheet = parse_sheet_str(
            "[beer]\ndrink_date = 2024-01-01\npackage_date = 2024-02-01\n",
            Path::new("x.toml"),
        )
        .unwrap();
        let warnings = validate_sheet(&sheet);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.message.contains("after drink date")));
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("b.toml"), "[taste\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/c.toml"), "").unwrap();

        let sheets = load_sheet_directory(dir.path()).unwrap();
        assert_eq!(sheets.len(), 2);
    }
}
