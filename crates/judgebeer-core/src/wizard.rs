//! The tasting wizard: a linear walk through six steps with an optional
//! overlay between steps and a small drill-down inside the aroma step.
//!
//! The current screen is a single enum, so the aroma sub-page only exists
//! while the aroma step is showing and resets whenever the step changes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::labels::{self, Locale, TransitionCue};
use crate::model::{AromaTone, Attribute, BeerInfo, BeerStyle, Category, TastingScore};
use crate::query::ReportParams;
use crate::scoring::{aggregate_with, CategoryAverages, ScoreLevel, ScoringSchema};

/// One screen of the linear input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Info,
    Appearance,
    Aroma,
    Taste,
    Mouthfeel,
    Overall,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Info,
        Step::Appearance,
        Step::Aroma,
        Step::Taste,
        Step::Mouthfeel,
        Step::Overall,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// The score category edited on this step; the info step has none.
    pub fn category(self) -> Option<Category> {
        match self {
            Step::Info => None,
            Step::Appearance => Some(Category::Appearance),
            Step::Aroma => Some(Category::Aroma),
            Step::Taste => Some(Category::Taste),
            Step::Mouthfeel => Some(Category::Mouthfeel),
            Step::Overall => Some(Category::Overall),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Step::Info => "info",
            Step::Appearance => "appearance",
            Step::Aroma => "aroma",
            Step::Taste => "taste",
            Step::Mouthfeel => "mouthfeel",
            Step::Overall => "overall",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown step: {s}"))
    }
}

/// Drill-down inside the aroma step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AromaPage {
    /// Choose between pleasant and unpleasant aromas.
    #[default]
    Root,
    /// List the aromas of one tone.
    Tone(AromaTone),
    /// Score a single aroma.
    Leaf(Attribute),
}

/// What is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Info,
    Appearance,
    Aroma(AromaPage),
    Taste,
    Mouthfeel,
    Overall,
}

impl Screen {
    /// Enter `step` at its root page.
    pub fn enter(step: Step) -> Self {
        match step {
            Step::Info => Screen::Info,
            Step::Appearance => Screen::Appearance,
            Step::Aroma => Screen::Aroma(AromaPage::Root),
            Step::Taste => Screen::Taste,
            Step::Mouthfeel => Screen::Mouthfeel,
            Step::Overall => Screen::Overall,
        }
    }

    pub fn step(self) -> Step {
        match self {
            Screen::Info => Step::Info,
            Screen::Appearance => Step::Appearance,
            Screen::Aroma(_) => Step::Aroma,
            Screen::Taste => Step::Taste,
            Screen::Mouthfeel => Step::Mouthfeel,
            Screen::Overall => Step::Overall,
        }
    }

    pub fn aroma_page(self) -> Option<AromaPage> {
        match self {
            Screen::Aroma(page) => Some(page),
            _ => None,
        }
    }
}

/// An overlay between two steps. Advancement is deferred until it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Step,
    pub to: Step,
}

impl Transition {
    pub fn cue(&self, locale: Locale) -> Option<TransitionCue> {
        labels::transition_cue(locale, self.from)
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The wizard is now on this step.
    Moved(Step),
    /// An overlay opened; call [`Wizard::finish_transition`] once it elapses.
    Transitioning(Transition),
    /// Already at the first or last step.
    Unchanged,
    /// An overlay is showing or the tasting is complete.
    Blocked,
}

/// Position within the wizard, as shown by the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based step number.
    pub step: usize,
    pub total: usize,
    pub percent: u8,
}

impl Progress {
    pub fn of(step: Step) -> Self {
        let current = step.index() + 1;
        let percent = (current as f64 / Step::COUNT as f64 * 100.0).round() as u8;
        Self {
            step: current,
            total: Step::COUNT,
            percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    /// Show an overlay between steps when moving forward.
    pub show_transitions: bool,
    pub schema: ScoringSchema,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            show_transitions: true,
            schema: ScoringSchema::default(),
        }
    }
}

/// Everything produced when the taster finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub beer: BeerInfo,
    pub score: TastingScore,
    pub averages: CategoryAverages,
}

impl Completion {
    pub fn total(&self) -> f64 {
        self.averages.total()
    }

    pub fn level(&self) -> ScoreLevel {
        self.averages.level()
    }

    /// Parameters handed to the report view.
    pub fn params(&self) -> ReportParams {
        ReportParams::new(&self.beer, self.averages)
    }

    /// The report parameters as a query string.
    pub fn query(&self) -> String {
        self.params().to_query()
    }
}

/// Drives a single tasting from the info step to completion.
#[derive(Debug, Clone)]
pub struct Wizard {
    screen: Screen,
    beer: BeerInfo,
    score: TastingScore,
    transition: Option<Transition>,
    completed: bool,
    options: WizardOptions,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

impl Wizard {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            screen: Screen::Info,
            beer: BeerInfo::default(),
            score: TastingScore::default(),
            transition: None,
            completed: false,
            options,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn step(&self) -> Step {
        self.screen.step()
    }

    pub fn beer(&self) -> &BeerInfo {
        &self.beer
    }

    pub fn score(&self) -> &TastingScore {
        &self.score
    }

    pub fn options(&self) -> WizardOptions {
        self.options
    }

    /// The overlay currently showing, if any.
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn progress(&self) -> Progress {
        Progress::of(self.step())
    }

    /// Averages of the scores entered so far.
    pub fn averages(&self) -> CategoryAverages {
        aggregate_with(&self.score, self.options.schema)
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Move forward one step. A no-op on the last step.
    pub fn next(&mut self) -> Navigation {
        if self.completed || self.transition.is_some() {
            return Navigation::Blocked;
        }
        let from = self.step();
        let Some(to) = from.next() else {
            return Navigation::Unchanged;
        };
        if self.options.show_transitions {
            let transition = Transition { from, to };
            tracing::debug!(%from, %to, "transition started");
            self.transition = Some(transition);
            Navigation::Transitioning(transition)
        } else {
            self.go_to(to);
            Navigation::Moved(to)
        }
    }

    /// Move back one step. A no-op on the first step.
    pub fn previous(&mut self) -> Navigation {
        if self.completed || self.transition.is_some() {
            return Navigation::Blocked;
        }
        match self.step().previous() {
            Some(to) => {
                self.go_to(to);
                Navigation::Moved(to)
            }
            None => Navigation::Unchanged,
        }
    }

    /// Close the overlay and land on the step it was leading to.
    pub fn finish_transition(&mut self) -> Navigation {
        match self.transition.take() {
            Some(transition) => {
                self.go_to(transition.to);
                Navigation::Moved(transition.to)
            }
            None => Navigation::Unchanged,
        }
    }

    /// Drop the overlay without advancing. Returns whether one was showing.
    pub fn cancel_transition(&mut self) -> bool {
        let cancelled = self.transition.take().is_some();
        if cancelled {
            tracing::debug!(step = %self.step(), "transition cancelled");
        }
        cancelled
    }

    fn go_to(&mut self, step: Step) {
        tracing::debug!(from = %self.step(), to = %step, "step changed");
        self.screen = Screen::enter(step);
    }

    // -----------------------------------------------------------------------
    // Aroma drill-down
    // -----------------------------------------------------------------------

    /// From the aroma root, open the list of aromas of one tone.
    pub fn open_aroma_tone(&mut self, tone: AromaTone) -> Result<(), WizardError> {
        self.ensure_editable()?;
        match self.screen {
            Screen::Aroma(_) => {
                self.screen = Screen::Aroma(AromaPage::Tone(tone));
                Ok(())
            }
            _ => Err(WizardError::NotOnAromaStep),
        }
    }

    /// From a tone list, open one aroma for scoring.
    pub fn open_aroma_attribute(&mut self, attribute: Attribute) -> Result<(), WizardError> {
        self.ensure_editable()?;
        let page = self.screen.aroma_page().ok_or(WizardError::NotOnAromaStep)?;
        let tone = match page {
            AromaPage::Root => return Err(WizardError::NoToneSelected),
            AromaPage::Tone(tone) => tone,
            AromaPage::Leaf(current) => current
                .aroma_tone()
                .ok_or(WizardError::NotOnAromaStep)?,
        };
        if attribute.aroma_tone() != Some(tone) {
            return Err(WizardError::ToneMismatch { attribute, tone });
        }
        self.screen = Screen::Aroma(AromaPage::Leaf(attribute));
        Ok(())
    }

    /// Go up one aroma page. Returns `false` when already at the root.
    pub fn aroma_back(&mut self) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        let page = self.screen.aroma_page().ok_or(WizardError::NotOnAromaStep)?;
        let parent = match page {
            AromaPage::Root => return Ok(false),
            AromaPage::Tone(_) => AromaPage::Root,
            AromaPage::Leaf(attribute) => match attribute.aroma_tone() {
                Some(tone) => AromaPage::Tone(tone),
                None => AromaPage::Root,
            },
        };
        self.screen = Screen::Aroma(parent);
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Field setters
    // -----------------------------------------------------------------------

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.completed {
            return Err(WizardError::Completed);
        }
        if self.transition.is_some() {
            return Err(WizardError::Transitioning);
        }
        Ok(())
    }

    fn ensure_info_step(&self) -> Result<(), WizardError> {
        self.ensure_editable()?;
        match self.step() {
            Step::Info => Ok(()),
            other => Err(WizardError::NotOnInfoStep(other)),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_info_step()?;
        self.beer.name = name.into();
        Ok(())
    }

    pub fn set_style(&mut self, style: Option<BeerStyle>) -> Result<(), WizardError> {
        self.ensure_info_step()?;
        self.beer.style = style;
        Ok(())
    }

    pub fn set_brewery(&mut self, brewery: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_info_step()?;
        self.beer.brewery = brewery.into();
        Ok(())
    }

    pub fn set_drink_date(&mut self, date: Option<NaiveDate>) -> Result<(), WizardError> {
        self.ensure_info_step()?;
        self.beer.drink_date = date;
        Ok(())
    }

    pub fn set_package_date(&mut self, date: Option<NaiveDate>) -> Result<(), WizardError> {
        self.ensure_info_step()?;
        self.beer.package_date = date;
        Ok(())
    }

    /// Set one attribute of the current step. The value is clamped to 1..=5
    /// and snapped to the attribute's step; the stored value is returned.
    pub fn set_score(&mut self, attribute: Attribute, value: f64) -> Result<f64, WizardError> {
        self.ensure_editable()?;
        let step = self.step();
        if step.category() != Some(attribute.category()) {
            return Err(WizardError::WrongStep { attribute, step });
        }
        let stored = attribute.normalize(value);
        self.score.set(attribute, stored);
        Ok(stored)
    }

    pub fn set_hop_sediment(&mut self, present: bool) -> Result<(), WizardError> {
        self.ensure_editable()?;
        if self.step() != Step::Appearance {
            return Err(WizardError::NotOnAppearanceStep(self.step()));
        }
        self.score.appearance.has_hop_sediment = present;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Completion
    // -----------------------------------------------------------------------

    /// Finish the tasting on the final step. The wizard becomes read-only.
    pub fn complete(&mut self) -> Result<Completion, WizardError> {
        self.ensure_editable()?;
        let step = self.step();
        if !step.is_last() {
            return Err(WizardError::NotAtFinalStep(step));
        }
        self.completed = true;
        let averages = self.averages();
        tracing::info!(
            beer = %self.beer.name,
            total = averages.total(),
            level = %averages.level(),
            "tasting complete"
        );
        Ok(Completion {
            beer: self.beer.clone(),
            score: self.score.clone(),
            averages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overlay() -> Wizard {
        Wizard::new(WizardOptions {
            show_transitions: false,
            schema: ScoringSchema::Extended,
        })
    }

    fn advance_to(wizard: &mut Wizard, step: Step) {
        while wizard.step() != step {
            match wizard.next() {
                Navigation::Transitioning(_) => {
                    wizard.finish_transition();
                }
                Navigation::Moved(_) => {}
                other => panic!("could not advance: {other:?}"),
            }
        }
    }

    #[test]
    fn starts_on_info_with_default_scores() {
        let wizard = Wizard::default();
        assert_eq!(wizard.step(), Step::Info);
        assert_eq!(wizard.score(), &TastingScore::default());
        assert!(wizard.transition().is_none());
        assert!(!wizard.is_completed());
    }

    #[test]
    fn steps_follow_fixed_order() {
        let mut wizard = no_overlay();
        let mut seen = vec![wizard.step()];
        while let Navigation::Moved(step) = wizard.next() {
            seen.push(step);
        }
        assert_eq!(seen, Step::ALL.to_vec());
    }

    #[test]
    fn next_is_noop_on_last_step() {
        let mut wizard = no_overlay();
        advance_to(&mut wizard, Step::Overall);
        assert_eq!(wizard.next(), Navigation::Unchanged);
        assert_eq!(wizard.step(), Step::Overall);
    }

    #[test]
    fn previous_is_noop_on_first_step() {
        let mut wizard = no_overlay();
        assert_eq!(wizard.previous(), Navigation::Unchanged);
        assert_eq!(wizard.step(), Step::Info);
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let mut wizard = no_overlay();
        // Deterministic pseudo-random sequence of moves.
        let mut seed = 0x2545_f491_u32;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                wizard.next();
            } else {
                wizard.previous();
            }
            assert!(wizard.step().index() < Step::COUNT);
        }
    }

    #[test]
    fn overlay_defers_advancement() {
        let mut wizard = Wizard::default();
        let nav = wizard.next();
        let Navigation::Transitioning(transition) = nav else {
            panic!("expected a transition, got {nav:?}");
        };
        assert_eq!(transition.from, Step::Info);
        assert_eq!(transition.to, Step::Appearance);
        assert_eq!(wizard.step(), Step::Info);

        assert_eq!(wizard.next(), Navigation::Blocked);
        assert_eq!(wizard.previous(), Navigation::Blocked);
        assert_eq!(wizard.set_name("x"), Err(WizardError::Transitioning));

        assert_eq!(wizard.finish_transition(), Navigation::Moved(Step::Appearance));
        assert!(wizard.transition().is_none());
        assert_eq!(wizard.finish_transition(), Navigation::Unchanged);
    }

    #[test]
    fn cancelled_overlay_stays_put() {
        let mut wizard = Wizard::default();
        wizard.next();
        assert!(wizard.cancel_transition());
        assert_eq!(wizard.step(), Step::Info);
        assert!(!wizard.cancel_transition());
    }

    #[test]
    fn going_back_skips_the_overlay() {
        let mut wizard = Wizard::default();
        advance_to(&mut wizard, Step::Taste);
        assert_eq!(wizard.previous(), Navigation::Moved(Step::Aroma));
        assert!(wizard.transition().is_none());
    }

    #[test]
    fn overlay_cue_matches_step_being_left() {
        let mut wizard = Wizard::default();
        advance_to(&mut wizard, Step::Aroma);
        let Navigation::Transitioning(t) = wizard.next() else {
            panic!("expected transition");
        };
        assert_eq!(t.cue(Locale::Zh).unwrap().title, "香气记录完成");
    }

    #[test]
    fn score_setters_are_scoped_to_current_step() {
        let mut wizard = no_overlay();
        assert_eq!(
            wizard.set_score(Attribute::Color, 4.0),
            Err(WizardError::WrongStep {
                attribute: Attribute::Color,
                step: Step::Info
            })
        );
        wizard.next();
        assert_eq!(wizard.set_score(Attribute::Color, 4.04), Ok(4.0));
        assert_eq!(wizard.set_score(Attribute::Clarity, 7.0), Ok(5.0));
        assert_eq!(wizard.score().appearance.color, 4.0);
        assert!(wizard.set_score(Attribute::Sweet, 4.0).is_err());
        assert!(wizard.set_name("late").is_err());
    }

    #[test]
    fn hop_sediment_only_on_appearance() {
        let mut wizard = no_overlay();
        assert!(wizard.set_hop_sediment(true).is_err());
        wizard.next();
        wizard.set_hop_sediment(true).unwrap();
        assert!(wizard.score().appearance.has_hop_sediment);
    }

    #[test]
    fn aroma_drill_down() {
        let mut wizard = no_overlay();
        assert_eq!(
            wizard.open_aroma_tone(AromaTone::Pleasant),
            Err(WizardError::NotOnAromaStep)
        );
        advance_to(&mut wizard, Step::Aroma);
        assert_eq!(wizard.screen(), Screen::Aroma(AromaPage::Root));
        assert_eq!(
            wizard.open_aroma_attribute(Attribute::Fruity),
            Err(WizardError::NoToneSelected)
        );

        wizard.open_aroma_tone(AromaTone::Pleasant).unwrap();
        assert_eq!(
            wizard.open_aroma_attribute(Attribute::Skunky),
            Err(WizardError::ToneMismatch {
                attribute: Attribute::Skunky,
                tone: AromaTone::Pleasant
            })
        );
        wizard.open_aroma_attribute(Attribute::Fruity).unwrap();
        assert_eq!(wizard.screen(), Screen::Aroma(AromaPage::Leaf(Attribute::Fruity)));
        wizard.set_score(Attribute::Fruity, 5.0).unwrap();

        assert_eq!(wizard.aroma_back(), Ok(true));
        assert_eq!(
            wizard.screen(),
            Screen::Aroma(AromaPage::Tone(AromaTone::Pleasant))
        );
        assert_eq!(wizard.aroma_back(), Ok(true));
        assert_eq!(wizard.aroma_back(), Ok(false));
    }

    #[test]
    fn sub_page_resets_when_step_changes() {
        let mut wizard = no_overlay();
        advance_to(&mut wizard, Step::Aroma);
        wizard.open_aroma_tone(AromaTone::Unpleasant).unwrap();
        wizard.open_aroma_attribute(Attribute::Metallic).unwrap();
        wizard.next();
        wizard.previous();
        assert_eq!(wizard.screen(), Screen::Aroma(AromaPage::Root));
    }

    #[test]
    fn progress_percentages() {
        let percents: Vec<u8> = Step::ALL.iter().map(|s| Progress::of(*s).percent).collect();
        assert_eq!(percents, vec![17, 33, 50, 67, 83, 100]);
        assert_eq!(Progress::of(Step::Taste).step, 4);
    }

    #[test]
    fn complete_only_on_final_step() {
        let mut wizard = no_overlay();
        assert_eq!(
            wizard.complete(),
            Err(WizardError::NotAtFinalStep(Step::Info))
        );
        wizard.set_name("Heady Topper").unwrap();
        wizard.set_style(Some(BeerStyle::DoubleIpa)).unwrap();
        advance_to(&mut wizard, Step::Appearance);
        wizard.set_score(Attribute::Color, 4.0).unwrap();
        advance_to(&mut wizard, Step::Overall);
        wizard.set_score(Attribute::Enjoyment, 5.0).unwrap();

        let completion = wizard.complete().unwrap();
        assert!(wizard.is_completed());
        assert_eq!(completion.beer.name, "Heady Topper");
        assert_eq!(completion.averages.overall, 3.7);
        assert_eq!(completion.total(), completion.averages.total());
        assert!(completion.query().contains("name=Heady+Topper"));
        assert!(completion.query().contains("overall=3.7"));
    }

    #[test]
    fn completed_wizard_is_read_only() {
        let mut wizard = no_overlay();
        advance_to(&mut wizard, Step::Overall);
        wizard.complete().unwrap();
        assert_eq!(wizard.next(), Navigation::Blocked);
        assert_eq!(wizard.previous(), Navigation::Blocked);
        assert_eq!(
            wizard.set_score(Attribute::Balance, 1.0),
            Err(WizardError::Completed)
        );
        assert_eq!(wizard.complete(), Err(WizardError::Completed));
    }

    #[test]
    fn step_parse_and_display() {
        assert_eq!("Mouthfeel".parse::<Step>().unwrap(), Step::Mouthfeel);
        assert_eq!(Step::Aroma.to_string(), "aroma");
        assert!("dessert".parse::<Step>().is_err());
    }
}
