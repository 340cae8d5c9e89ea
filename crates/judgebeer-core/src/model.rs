//! Core data model types for judgebeer.
//!
//! These are the types the whole workspace uses to describe a beer and the
//! scores a taster gives it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest value any numeric attribute may take.
pub const MIN_SCORE: f64 = 1.0;
/// Highest value any numeric attribute may take.
pub const MAX_SCORE: f64 = 5.0;
/// Neutral value every attribute starts at, and the fallback for missing data.
pub const DEFAULT_SCORE: f64 = 3.0;

/// Date format used for drink and package dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Metadata about the beer being tasted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style: Option<BeerStyle>,
    #[serde(default)]
    pub brewery: String,
    /// Day the beer was tasted.
    #[serde(default)]
    pub drink_date: Option<NaiveDate>,
    /// Day the beer was canned or bottled.
    #[serde(default)]
    pub package_date: Option<NaiveDate>,
}

impl BeerInfo {
    /// The style as a display string, empty when no style was chosen.
    pub fn style_label(&self) -> String {
        self.style.map(|s| s.to_string()).unwrap_or_default()
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, crate::error::TastingError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| crate::error::TastingError::InvalidDate(s.trim().to_string()))
}

/// Beer styles offered on the info step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BeerStyle {
    Ipa,
    DoubleIpa,
    NewEnglandIpa,
    PaleAle,
    AmberAle,
    BrownAle,
    Stout,
    Porter,
    Pilsner,
    Lager,
    WheatBeer,
    Hefeweizen,
    Saison,
    Sour,
    Gose,
    Lambic,
    BelgianTripel,
    BelgianDubbel,
    Barleywine,
    Other,
}

impl BeerStyle {
    /// Every style, in the order they are offered.
    pub const ALL: [BeerStyle; 20] = [
        BeerStyle::Ipa,
        BeerStyle::DoubleIpa,
        BeerStyle::NewEnglandIpa,
        BeerStyle::PaleAle,
        BeerStyle::AmberAle,
        BeerStyle::BrownAle,
        BeerStyle::Stout,
        BeerStyle::Porter,
        BeerStyle::Pilsner,
        BeerStyle::Lager,
        BeerStyle::WheatBeer,
        BeerStyle::Hefeweizen,
        BeerStyle::Saison,
        BeerStyle::Sour,
        BeerStyle::Gose,
        BeerStyle::Lambic,
        BeerStyle::BelgianTripel,
        BeerStyle::BelgianDubbel,
        BeerStyle::Barleywine,
        BeerStyle::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BeerStyle::Ipa => "IPA",
            BeerStyle::DoubleIpa => "Double IPA",
            BeerStyle::NewEnglandIpa => "New England IPA",
            BeerStyle::PaleAle => "Pale Ale",
            BeerStyle::AmberAle => "Amber Ale",
            BeerStyle::BrownAle => "Brown Ale",
            BeerStyle::Stout => "Stout",
            BeerStyle::Porter => "Porter",
            BeerStyle::Pilsner => "Pilsner",
            BeerStyle::Lager => "Lager",
            BeerStyle::WheatBeer => "Wheat Beer",
            BeerStyle::Hefeweizen => "Hefeweizen",
            BeerStyle::Saison => "Saison",
            BeerStyle::Sour => "Sour",
            BeerStyle::Gose => "Gose",
            BeerStyle::Lambic => "Lambic",
            BeerStyle::BelgianTripel => "Belgian Tripel",
            BeerStyle::BelgianDubbel => "Belgian Dubbel",
            BeerStyle::Barleywine => "Barleywine",
            BeerStyle::Other => "Other",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BeerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match wanted.as_str() {
            "neipa" => return Ok(BeerStyle::NewEnglandIpa),
            "dipa" => return Ok(BeerStyle::DoubleIpa),
            "其他" => return Ok(BeerStyle::Other),
            _ => {}
        }
        BeerStyle::ALL
            .into_iter()
            .find(|style| {
                let key: String = style
                    .name()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase();
                key == wanted
            })
            .ok_or_else(|| format!("unknown beer style: {s}"))
    }
}

impl TryFrom<String> for BeerStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BeerStyle> for String {
    fn from(style: BeerStyle) -> Self {
        style.name().to_string()
    }
}

/// The five sensory categories, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appearance,
    Aroma,
    Taste,
    Mouthfeel,
    Overall,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Appearance,
        Category::Aroma,
        Category::Taste,
        Category::Mouthfeel,
        Category::Overall,
    ];

    /// Query-string and TOML key for this category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Appearance => "appearance",
            Category::Aroma => "aroma",
            Category::Taste => "taste",
            Category::Mouthfeel => "mouthfeel",
            Category::Overall => "overall",
        }
    }

    /// All numeric attributes belonging to this category.
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            Category::Appearance => &APPEARANCE_ATTRIBUTES,
            Category::Aroma => &AROMA_ATTRIBUTES,
            Category::Taste => &TASTE_ATTRIBUTES,
            Category::Mouthfeel => &MOUTHFEEL_ATTRIBUTES,
            Category::Overall => &OVERALL_ATTRIBUTES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whether an aroma is pleasant or an off-flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AromaTone {
    Pleasant,
    Unpleasant,
}

impl AromaTone {
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            AromaTone::Pleasant => &AROMA_ATTRIBUTES[..7],
            AromaTone::Unpleasant => &AROMA_ATTRIBUTES[7..],
        }
    }
}

impl FromStr for AromaTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" | "pleasant" => Ok(AromaTone::Pleasant),
            "bad" | "unpleasant" | "off" => Ok(AromaTone::Unpleasant),
            other => Err(format!("unknown aroma tone: {other}")),
        }
    }
}

/// A single numeric attribute of a [`TastingScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    // appearance
    Color,
    Clarity,
    Head,
    HeadColor,
    HeadTexture,
    HeadRetention,
    Viscosity,
    // aroma, pleasant
    Malt,
    Hops,
    Yeast,
    Other,
    Fruity,
    Floral,
    Spicy,
    // aroma, unpleasant
    Oxidized,
    Skunky,
    Metallic,
    Cardboard,
    Vinegar,
    Sulfur,
    // taste
    Sweet,
    Bitter,
    Sour,
    MaltFlavor,
    HopFlavor,
    // mouthfeel
    Body,
    Carbonation,
    Finish,
    // overall
    Balance,
    Complexity,
    Enjoyment,
}

const APPEARANCE_ATTRIBUTES: [Attribute; 7] = [
    Attribute::Color,
    Attribute::Clarity,
    Attribute::Head,
    Attribute::HeadColor,
    Attribute::HeadTexture,
    Attribute::HeadRetention,
    Attribute::Viscosity,
];

const AROMA_ATTRIBUTES: [Attribute; 13] = [
    Attribute::Malt,
    Attribute::Hops,
    Attribute::Yeast,
    Attribute::Other,
    Attribute::Fruity,
    Attribute::Floral,
    Attribute::Spicy,
    Attribute::Oxidized,
    Attribute::Skunky,
    Attribute::Metallic,
    Attribute::Cardboard,
    Attribute::Vinegar,
    Attribute::Sulfur,
];

const TASTE_ATTRIBUTES: [Attribute; 5] = [
    Attribute::Sweet,
    Attribute::Bitter,
    Attribute::Sour,
    Attribute::MaltFlavor,
    Attribute::HopFlavor,
];

const MOUTHFEEL_ATTRIBUTES: [Attribute; 3] =
    [Attribute::Body, Attribute::Carbonation, Attribute::Finish];

const OVERALL_ATTRIBUTES: [Attribute; 3] = [
    Attribute::Balance,
    Attribute::Complexity,
    Attribute::Enjoyment,
];

impl Attribute {
    pub fn category(self) -> Category {
        use Attribute::*;
        match self {
            Color | Clarity | Head | HeadColor | HeadTexture | HeadRetention | Viscosity => {
                Category::Appearance
            }
            Malt | Hops | Yeast | Other | Fruity | Floral | Spicy | Oxidized | Skunky
            | Metallic | Cardboard | Vinegar | Sulfur => Category::Aroma,
            Sweet | Bitter | Sour | MaltFlavor | HopFlavor => Category::Taste,
            Body | Carbonation | Finish => Category::Mouthfeel,
            Balance | Complexity | Enjoyment => Category::Overall,
        }
    }

    /// Tone of an aroma attribute; `None` outside the aroma category.
    pub fn aroma_tone(self) -> Option<AromaTone> {
        use Attribute::*;
        match self {
            Malt | Hops | Yeast | Other | Fruity | Floral | Spicy => Some(AromaTone::Pleasant),
            Oxidized | Skunky | Metallic | Cardboard | Vinegar | Sulfur => {
                Some(AromaTone::Unpleasant)
            }
            _ => None,
        }
    }

    /// Key used in tasting sheets and on the command line.
    pub fn key(self) -> &'static str {
        use Attribute::*;
        match self {
            Color => "color",
            Clarity => "clarity",
            Head => "head",
            HeadColor => "headColor",
            HeadTexture => "headTexture",
            HeadRetention => "headRetention",
            Viscosity => "viscosity",
            Malt => "malt",
            Hops => "hops",
            Yeast => "yeast",
            Other => "other",
            Fruity => "fruity",
            Floral => "floral",
            Spicy => "spicy",
            Oxidized => "oxidized",
            Skunky => "skunky",
            Metallic => "metallic",
            Cardboard => "cardboard",
            Vinegar => "vinegar",
            Sulfur => "sulfur",
            Sweet => "sweet",
            Bitter => "bitter",
            Sour => "sour",
            MaltFlavor => "maltFlavor",
            HopFlavor => "hopFlavor",
            Body => "body",
            Carbonation => "carbonation",
            Finish => "finish",
            Balance => "balance",
            Complexity => "complexity",
            Enjoyment => "enjoyment",
        }
    }

    /// Slider granularity: appearance sliders are continuous, the rest whole points.
    pub fn step(self) -> f64 {
        match self.category() {
            Category::Appearance => 0.1,
            _ => 1.0,
        }
    }

    /// Clamp `value` into range and snap it to this attribute's step.
    pub fn normalize(self, value: f64) -> f64 {
        if !value.is_finite() {
            return DEFAULT_SCORE;
        }
        let step = self.step();
        let snapped = (value / step).round() * step;
        // Re-round to one decimal to shed float noise from the multiply.
        ((snapped.clamp(MIN_SCORE, MAX_SCORE)) * 10.0).round() / 10.0
    }

    pub fn all() -> impl Iterator<Item = Attribute> {
        Category::ALL
            .into_iter()
            .flat_map(|c| c.attributes().iter().copied())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Accepts the camelCase key as well as snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Attribute::all()
            .find(|a| a.key().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown attribute: {s}"))
    }
}

fn default_score() -> f64 {
    DEFAULT_SCORE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceScore {
    #[serde(default = "default_score")]
    pub color: f64,
    #[serde(default = "default_score")]
    pub clarity: f64,
    /// Hop sediment ("hop shit") floating in the glass.
    #[serde(default, alias = "hasHopShit")]
    pub has_hop_sediment: bool,
    #[serde(default = "default_score")]
    pub head: f64,
    #[serde(default = "default_score")]
    pub head_color: f64,
    #[serde(default = "default_score")]
    pub head_texture: f64,
    #[serde(default = "default_score")]
    pub head_retention: f64,
    #[serde(default = "default_score")]
    pub viscosity: f64,
}

impl Default for AppearanceScore {
    fn default() -> Self {
        Self {
            color: DEFAULT_SCORE,
            clarity: DEFAULT_SCORE,
            has_hop_sediment: false,
            head: DEFAULT_SCORE,
            head_color: DEFAULT_SCORE,
            head_texture: DEFAULT_SCORE,
            head_retention: DEFAULT_SCORE,
            viscosity: DEFAULT_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AromaScore {
    #[serde(default = "default_score")]
    pub malt: f64,
    #[serde(default = "default_score")]
    pub hops: f64,
    #[serde(default = "default_score")]
    pub yeast: f64,
    #[serde(default = "default_score")]
    pub other: f64,
    #[serde(default = "default_score")]
    pub fruity: f64,
    #[serde(default = "default_score")]
    pub floral: f64,
    #[serde(default = "default_score")]
    pub spicy: f64,
    #[serde(default = "default_score")]
    pub oxidized: f64,
    #[serde(default = "default_score")]
    pub skunky: f64,
    #[serde(default = "default_score")]
    pub metallic: f64,
    #[serde(default = "default_score")]
    pub cardboard: f64,
    #[serde(default = "default_score")]
    pub vinegar: f64,
    #[serde(default = "default_score")]
    pub sulfur: f64,
}

impl Default for AromaScore {
    fn default() -> Self {
        Self {
            malt: DEFAULT_SCORE,
            hops: DEFAULT_SCORE,
            yeast: DEFAULT_SCORE,
            other: DEFAULT_SCORE,
            fruity: DEFAULT_SCORE,
            floral: DEFAULT_SCORE,
            spicy: DEFAULT_SCORE,
            oxidized: DEFAULT_SCORE,
            skunky: DEFAULT_SCORE,
            metallic: DEFAULT_SCORE,
            cardboard: DEFAULT_SCORE,
            vinegar: DEFAULT_SCORE,
            sulfur: DEFAULT_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasteScore {
    #[serde(default = "default_score")]
    pub sweet: f64,
    #[serde(default = "default_score")]
    pub bitter: f64,
    #[serde(default = "default_score")]
    pub sour: f64,
    #[serde(default = "default_score")]
    pub malt_flavor: f64,
    #[serde(default = "default_score")]
    pub hop_flavor: f64,
}

impl Default for TasteScore {
    fn default() -> Self {
        Self {
            sweet: DEFAULT_SCORE,
            bitter: DEFAULT_SCORE,
            sour: DEFAULT_SCORE,
            malt_flavor: DEFAULT_SCORE,
            hop_flavor: DEFAULT_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouthfeelScore {
    #[serde(default = "default_score")]
    pub body: f64,
    #[serde(default = "default_score")]
    pub carbonation: f64,
    #[serde(default = "default_score")]
    pub finish: f64,
}

impl Default for MouthfeelScore {
    fn default() -> Self {
        Self {
            body: DEFAULT_SCORE,
            carbonation: DEFAULT_SCORE,
            finish: DEFAULT_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    #[serde(default = "default_score")]
    pub balance: f64,
    #[serde(default = "default_score")]
    pub complexity: f64,
    #[serde(default = "default_score")]
    pub enjoyment: f64,
}

impl Default for OverallScore {
    fn default() -> Self {
        Self {
            balance: DEFAULT_SCORE,
            complexity: DEFAULT_SCORE,
            enjoyment: DEFAULT_SCORE,
        }
    }
}

/// Every score a taster gives one beer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TastingScore {
    #[serde(default)]
    pub appearance: AppearanceScore,
    #[serde(default)]
    pub aroma: AromaScore,
    #[serde(default)]
    pub taste: TasteScore,
    #[serde(default)]
    pub mouthfeel: MouthfeelScore,
    #[serde(default)]
    pub overall: OverallScore,
}

impl TastingScore {
    pub fn get(&self, attribute: Attribute) -> f64 {
        *self.slot(attribute)
    }

    /// Store `value` as-is. Callers that take user input go through
    /// [`Attribute::normalize`] first.
    pub fn set(&mut self, attribute: Attribute, value: f64) {
        *self.slot_mut(attribute) = value;
    }

    fn slot(&self, attribute: Attribute) -> &f64 {
        use Attribute::*;
        match attribute {
            Color => &self.appearance.color,
            Clarity => &self.appearance.clarity,
            Head => &self.appearance.head,
            HeadColor => &self.appearance.head_color,
            HeadTexture => &self.appearance.head_texture,
            HeadRetention => &self.appearance.head_retention,
            Viscosity => &self.appearance.viscosity,
            Malt => &self.aroma.malt,
            Hops => &self.aroma.hops,
            Yeast => &self.aroma.yeast,
            Other => &self.aroma.other,
            Fruity => &self.aroma.fruity,
            Floral => &self.aroma.floral,
            Spicy => &self.aroma.spicy,
            Oxidized => &self.aroma.oxidized,
            Skunky => &self.aroma.skunky,
            Metallic => &self.aroma.metallic,
            Cardboard => &self.aroma.cardboard,
            Vinegar => &self.aroma.vinegar,
            Sulfur => &self.aroma.sulfur,
            Sweet => &self.taste.sweet,
            Bitter => &self.taste.bitter,
            Sour => &self.taste.sour,
            MaltFlavor => &self.taste.malt_flavor,
            HopFlavor => &self.taste.hop_flavor,
            Body => &self.mouthfeel.body,
            Carbonation => &self.mouthfeel.carbonation,
            Finish => &self.mouthfeel.finish,
            Balance => &self.overall.balance,
            Complexity => &self.overall.complexity,
            Enjoyment => &self.overall.enjoyment,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut f64 {
        use Attribute::*;
        match attribute {
            Color => &mut self.appearance.color,
            Clarity => &mut self.appearance.clarity,
            Head => &mut self.appearance.head,
            HeadColor => &mut self.appearance.head_color,
            HeadTexture => &mut self.appearance.head_texture,
            HeadRetention => &mut self.appearance.head_retention,
            Viscosity => &mut self.appearance.viscosity,
            Malt => &mut self.aroma.malt,
            Hops => &mut self.aroma.hops,
            Yeast => &mut self.aroma.yeast,
            Other => &mut self.aroma.other,
            Fruity => &mut self.aroma.fruity,
            Floral => &mut self.aroma.floral,
            Spicy => &mut self.aroma.spicy,
            Oxidized => &mut self.aroma.oxidized,
            Skunky => &mut self.aroma.skunky,
            Metallic => &mut self.aroma.metallic,
            Cardboard => &mut self.aroma.cardboard,
            Vinegar => &mut self.aroma.vinegar,
            Sulfur => &mut self.aroma.sulfur,
            Sweet => &mut self.taste.sweet,
            Bitter => &mut self.taste.bitter,
            Sour => &mut self.taste.sour,
            MaltFlavor => &mut self.taste.malt_flavor,
            HopFlavor => &mut self.taste.hop_flavor,
            Body => &mut self.mouthfeel.body,
            Carbonation => &mut self.mouthfeel.carbonation,
            Finish => &mut self.mouthfeel.finish,
            Balance => &mut self.overall.balance,
            Complexity => &mut self.overall.complexity,
            Enjoyment => &mut self.overall.enjoyment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_display_and_parse() {
        assert_eq!(BeerStyle::NewEnglandIpa.to_string(), "New England IPA");
        assert_eq!("ipa".parse::<BeerStyle>().unwrap(), BeerStyle::Ipa);
        assert_eq!(
            "belgian-tripel".parse::<BeerStyle>().unwrap(),
            BeerStyle::BelgianTripel
        );
        assert_eq!("NEIPA".parse::<BeerStyle>().unwrap(), BeerStyle::NewEnglandIpa);
        assert_eq!("其他".parse::<BeerStyle>().unwrap(), BeerStyle::Other);
        assert!("mead".parse::<BeerStyle>().is_err());
    }

    #[test]
    fn attribute_parse_accepts_several_spellings() {
        assert_eq!("headColor".parse::<Attribute>().unwrap(), Attribute::HeadColor);
        assert_eq!("head_color".parse::<Attribute>().unwrap(), Attribute::HeadColor);
        assert_eq!("malt-flavor".parse::<Attribute>().unwrap(), Attribute::MaltFlavor);
        assert!("sparkle".parse::<Attribute>().is_err());
    }

    #[test]
    fn every_attribute_belongs_to_its_category_list() {
        assert_eq!(Attribute::all().count(), 31);
        for attr in Attribute::all() {
            assert!(attr.category().attributes().contains(&attr));
        }
    }

    #[test]
    fn aroma_tones_partition_the_aroma_group() {
        let pleasant = AromaTone::Pleasant.attributes();
        let unpleasant = AromaTone::Unpleasant.attributes();
        assert_eq!(pleasant.len() + unpleasant.len(), 13);
        assert!(pleasant
            .iter()
            .all(|a| a.aroma_tone() == Some(AromaTone::Pleasant)));
        assert!(unpleasant
            .iter()
            .all(|a| a.aroma_tone() == Some(AromaTone::Unpleasant)));
        assert_eq!(Attribute::Body.aroma_tone(), None);
    }

    #[test]
    fn normalize_clamps_and_snaps() {
        assert_eq!(Attribute::Color.normalize(4.26), 4.3);
        assert_eq!(Attribute::Color.normalize(9.0), 5.0);
        assert_eq!(Attribute::Sweet.normalize(3.6), 4.0);
        assert_eq!(Attribute::Sweet.normalize(0.0), 1.0);
        assert_eq!(Attribute::Body.normalize(f64::NAN), DEFAULT_SCORE);
    }

    #[test]
    fn default_score_is_neutral() {
        let score = TastingScore::default();
        assert!(Attribute::all().all(|a| score.get(a) == DEFAULT_SCORE));
        assert!(!score.appearance.has_hop_sediment);
    }

    #[test]
    fn get_and_set_hit_the_same_field() {
        let mut score = TastingScore::default();
        score.set(Attribute::HopFlavor, 5.0);
        assert_eq!(score.taste.hop_flavor, 5.0);
        assert_eq!(score.get(Attribute::HopFlavor), 5.0);
    }

    #[test]
    fn score_serde_uses_camel_case_keys() {
        let json = serde_json::to_value(TastingScore::default()).unwrap();
        assert!(json["appearance"]["headColor"].is_number());
        assert!(json["taste"]["maltFlavor"].is_number());
        let parsed: TastingScore =
            serde_json::from_str(r#"{"appearance":{"hasHopShit":true}}"#).unwrap();
        assert!(parsed.appearance.has_hop_sediment);
        assert_eq!(parsed.appearance.color, DEFAULT_SCORE);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2024-05-01").is_ok());
        assert!(parse_date("yesterday").is_err());
    }
}
