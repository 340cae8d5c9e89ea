//! Static display labels in Chinese and English.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Attribute, AromaTone, Category};
use crate::scoring::{ClarityLevel, ScoreLevel};
use crate::wizard::Step;

/// Which label set to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Locale::Zh),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

fn pick(locale: Locale, zh: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::Zh => zh,
        Locale::En => en,
    }
}

/// A title and description shown on the overlay between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCue {
    pub title: &'static str,
    pub description: &'static str,
}

const CUES_ZH: [TransitionCue; 5] = [
    TransitionCue {
        title: "准备好了吗？",
        description: "接下来让我们观察这杯啤酒的外观",
    },
    TransitionCue {
        title: "色泽观察完毕",
        description: "现在闭上眼睛，感受啤酒的香气",
    },
    TransitionCue {
        title: "香气记录完成",
        description: "轻啜一口，让味蕾感受风味",
    },
    TransitionCue {
        title: "风味探索结束",
        description: "感受啤酒在口中的质感",
    },
    TransitionCue {
        title: "即将完成",
        description: "最后给出你的整体评价",
    },
];

const CUES_EN: [TransitionCue; 5] = [
    TransitionCue {
        title: "Ready?",
        description: "Let's start by looking at the beer in the glass",
    },
    TransitionCue {
        title: "Appearance noted",
        description: "Now close your eyes and take in the aroma",
    },
    TransitionCue {
        title: "Aroma recorded",
        description: "Take a sip and let the flavor settle on your palate",
    },
    TransitionCue {
        title: "Flavor explored",
        description: "Pay attention to how the beer feels in your mouth",
    },
    TransitionCue {
        title: "Almost done",
        description: "Finish with your overall impression",
    },
];

/// Overlay cue shown when leaving `from`. The final step has no cue.
pub fn transition_cue(locale: Locale, from: Step) -> Option<TransitionCue> {
    let cues = match locale {
        Locale::Zh => &CUES_ZH,
        Locale::En => &CUES_EN,
    };
    cues.get(from.index()).copied()
}

pub fn step_title(locale: Locale, step: Step) -> &'static str {
    match step {
        Step::Info => pick(locale, "啤酒信息", "Beer Info"),
        Step::Appearance => pick(locale, "外观", "Appearance"),
        Step::Aroma => pick(locale, "香气", "Aroma"),
        Step::Taste => pick(locale, "味道", "Taste"),
        Step::Mouthfeel => pick(locale, "口感", "Mouthfeel"),
        Step::Overall => pick(locale, "整体", "Overall"),
    }
}

pub fn category_label(locale: Locale, category: Category) -> &'static str {
    match category {
        Category::Appearance => pick(locale, "外观", "Appearance"),
        Category::Aroma => pick(locale, "香气", "Aroma"),
        Category::Taste => pick(locale, "味道", "Taste"),
        Category::Mouthfeel => pick(locale, "口感", "Mouthfeel"),
        Category::Overall => pick(locale, "整体", "Overall"),
    }
}

pub fn attribute_label(locale: Locale, attribute: Attribute) -> &'static str {
    use Attribute::*;
    match attribute {
        Color => pick(locale, "颜色", "Color"),
        Clarity => pick(locale, "清澈度", "Clarity"),
        Head => pick(locale, "泡沫", "Head"),
        HeadColor => pick(locale, "泡沫颜色", "Head color"),
        HeadTexture => pick(locale, "泡沫质地", "Head texture"),
        HeadRetention => pick(locale, "消散速度", "Head retention"),
        Viscosity => pick(locale, "粘稠度", "Viscosity"),
        Malt => pick(locale, "麦芽香", "Malt"),
        Hops => pick(locale, "酒花香", "Hops"),
        Yeast => pick(locale, "酵母香", "Yeast"),
        Other => pick(locale, "其他香气", "Other"),
        Fruity => pick(locale, "果香", "Fruity"),
        Floral => pick(locale, "花香", "Floral"),
        Spicy => pick(locale, "辛香", "Spicy"),
        Oxidized => pick(locale, "氧化", "Oxidized"),
        Skunky => pick(locale, "臭鼬味", "Skunky"),
        Metallic => pick(locale, "金属味", "Metallic"),
        Cardboard => pick(locale, "纸板味", "Cardboard"),
        Vinegar => pick(locale, "醋味", "Vinegar"),
        Sulfur => pick(locale, "硫磺味", "Sulfur"),
        Sweet => pick(locale, "甜度", "Sweet"),
        Bitter => pick(locale, "苦度", "Bitter"),
        Sour => pick(locale, "酸度", "Sour"),
        MaltFlavor => pick(locale, "麦芽味", "Malt flavor"),
        HopFlavor => pick(locale, "酒花味", "Hop flavor"),
        Body => pick(locale, "酒体", "Body"),
        Carbonation => pick(locale, "碳酸化程度", "Carbonation"),
        Finish => pick(locale, "收尾", "Finish"),
        Balance => pick(locale, "平衡度", "Balance"),
        Complexity => pick(locale, "复杂度", "Complexity"),
        Enjoyment => pick(locale, "愉悦度", "Enjoyment"),
    }
}

/// Low and high end descriptions for a slider, where the UI shows them.
pub fn attribute_scale(locale: Locale, attribute: Attribute) -> Option<(&'static str, &'static str)> {
    use Attribute::*;
    let scale = match attribute {
        Color => (pick(locale, "浅色", "Pale"), pick(locale, "深色", "Dark")),
        Clarity => (pick(locale, "透明", "Clear"), pick(locale, "不透明", "Opaque")),
        HeadColor => (pick(locale, "白色", "White"), pick(locale, "棕色", "Brown")),
        HeadTexture => (pick(locale, "稀疏", "Sparse"), pick(locale, "绵密", "Dense")),
        HeadRetention => (
            pick(locale, "快速消散", "Fades fast"),
            pick(locale, "持久", "Lasting"),
        ),
        Viscosity => (pick(locale, "稀薄", "Thin"), pick(locale, "粘稠", "Thick")),
        _ => return None,
    };
    Some(scale)
}

pub fn tone_label(locale: Locale, tone: AromaTone) -> &'static str {
    match tone {
        AromaTone::Pleasant => pick(locale, "好的 / 愉悦的香气", "Pleasant aromas"),
        AromaTone::Unpleasant => pick(locale, "不好的 / 不愉悦的香气", "Unpleasant aromas"),
    }
}

pub fn tone_hint(locale: Locale, tone: AromaTone) -> &'static str {
    match tone {
        AromaTone::Pleasant => pick(locale, "果香、花香、麦芽香、酒花香等", "Fruit, flowers, malt, hops and so on"),
        AromaTone::Unpleasant => pick(locale, "任何你觉得不愉悦的味道", "Anything you find off-putting"),
    }
}

pub fn level_label(locale: Locale, level: ScoreLevel) -> &'static str {
    match level {
        ScoreLevel::Exceptional => pick(locale, "卓越", "Exceptional"),
        ScoreLevel::Excellent => pick(locale, "优秀", "Excellent"),
        ScoreLevel::Good => pick(locale, "良好", "Good"),
        ScoreLevel::Fair => pick(locale, "一般", "Fair"),
        ScoreLevel::Poor => pick(locale, "较差", "Poor"),
    }
}

pub fn clarity_label(locale: Locale, level: ClarityLevel) -> &'static str {
    match level {
        ClarityLevel::Clear => pick(locale, "透明", "Clear"),
        ClarityLevel::Hazy => pick(locale, "浑浊", "Hazy"),
        ClarityLevel::Opaque => pick(locale, "不透明", "Opaque"),
    }
}

pub fn hop_sediment_label(locale: Locale) -> &'static str {
    pick(locale, "含有 Hop Shit（酒花沉淀物）", "Hop sediment present")
}

/// Placeholders shown when the report has no name, style or brewery.
pub fn unknown_name(locale: Locale) -> &'static str {
    pick(locale, "未知啤酒", "Unknown beer")
}

pub fn unknown_style(locale: Locale) -> &'static str {
    pick(locale, "未知风格", "Unknown style")
}

pub fn unknown_brewery(locale: Locale) -> &'static str {
    pick(locale, "未知酒厂", "Unknown brewery")
}

pub fn drink_date_label(locale: Locale) -> &'static str {
    pick(locale, "饮用日期", "Tasted on")
}

pub fn package_date_label(locale: Locale) -> &'static str {
    pick(locale, "灌装日期", "Packaged on")
}

pub fn report_title(locale: Locale) -> &'static str {
    pick(locale, "品鉴报告", "Tasting Report")
}

pub fn total_score_label(locale: Locale) -> &'static str {
    pick(locale, "综合评分", "Overall score")
}

pub fn radar_title(locale: Locale) -> &'static str {
    pick(locale, "风味分布", "Flavor profile")
}

pub fn details_title(locale: Locale) -> &'static str {
    pick(locale, "详细得分", "Score details")
}
