//! The `judgebeer taste` command.
//!
//! Runs the wizard as a line-oriented prompt. Each line is one command;
//! refused commands print a `!` line and the prompt continues.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use judgebeer_core::config::load_config_from;
use judgebeer_core::error::TastingError;
use judgebeer_core::labels::{self, Locale};
use judgebeer_core::model::{parse_date, Attribute, AromaTone, BeerStyle};
use judgebeer_core::report::TastingReport;
use judgebeer_core::scoring::ClarityLevel;
use judgebeer_core::transition::{TimerOutcome, TransitionTimer};
use judgebeer_core::wizard::{
    AromaPage, Completion, Navigation, Screen, Step, Transition, Wizard,
};

use super::output::{emit, resolve_locale};

pub async fn execute(
    no_transition: bool,
    transition_ms: Option<u64>,
    format: String,
    output: Option<PathBuf>,
    lang: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let locale = resolve_locale(lang.as_deref(), &config)?;

    let mut options = config.wizard_options();
    if no_transition {
        options.show_transitions = false;
    }
    let overlay = transition_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.transition_duration());

    tracing::debug!(
        %locale,
        transitions = options.show_transitions,
        overlay_ms = overlay.as_millis() as u64,
        schema = %options.schema,
        "starting tasting"
    );

    let completion = {
        let mut session = Session::new(Wizard::new(options), locale, overlay);
        session
            .run(std::io::stdin().lock(), std::io::stdout())
            .await?
    };

    let report = TastingReport::from_completion(&completion);
    emit(&report, &format, output.as_deref(), locale, &config)
}

/// Which beer field or score a `set` command writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Style,
    Brewery,
    DrinkDate,
    PackageDate,
    HopSediment,
    Score(Attribute),
}

impl Field {
    fn parse(s: &str) -> Result<Self, String> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "name" => Ok(Field::Name),
            "style" => Ok(Field::Style),
            "brewery" => Ok(Field::Brewery),
            "drinkdate" => Ok(Field::DrinkDate),
            "packagedate" => Ok(Field::PackageDate),
            "hopsediment" | "hashopsediment" | "hopshit" | "hashopshit" => Ok(Field::HopSediment),
            _ => s.parse().map(Field::Score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Set { field: Field, value: String },
    Next,
    Back,
    Tone(AromaTone),
    Open(Attribute),
    Up,
    Show,
    Help,
    Done,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word.to_lowercase().as_str() {
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err("usage: set <field> <value>".into());
                }
                Ok(Command::Set {
                    field: Field::parse(field)?,
                    value: value.to_string(),
                })
            }
            "next" | "n" => Ok(Command::Next),
            "back" | "b" | "prev" => Ok(Command::Back),
            "good" => Ok(Command::Tone(AromaTone::Pleasant)),
            "bad" => Ok(Command::Tone(AromaTone::Unpleasant)),
            "open" => {
                if rest.is_empty() {
                    return Err("usage: open <aroma>".into());
                }
                rest.parse().map(Command::Open)
            }
            "up" => Ok(Command::Up),
            "" | "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "done" => Ok(Command::Done),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

enum Flow {
    Continue,
    Done(Completion),
}

fn parse_flag(value: &str) -> Result<bool, TastingError> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "on" | "是" => Ok(true),
        "no" | "n" | "false" | "0" | "off" | "否" => Ok(false),
        other => Err(TastingError::InvalidFlag(other.to_string())),
    }
}

struct Session {
    wizard: Wizard,
    locale: Locale,
    overlay: Duration,
}

impl Session {
    fn new(wizard: Wizard, locale: Locale, overlay: Duration) -> Self {
        Self {
            wizard,
            locale,
            overlay,
        }
    }

    async fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<Completion> {
        self.render(&mut out)?;
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                anyhow::bail!("input ended before the tasting was completed");
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(msg) => {
                    writeln!(out, "! {msg}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                anyhow::bail!("tasting aborted");
            }
            if let Flow::Done(completion) = self.apply(command, &mut out).await? {
                return Ok(completion);
            }
        }
    }

    async fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Set { field, value } => match self.set(field, &value) {
                Ok(msg) => writeln!(out, "  {msg}")?,
                Err(e) if e.is_state_error() => {
                    writeln!(out, "! {e}")?;
                    writeln!(
                        out,
                        "  (on the {} step, type 'show' for its fields)",
                        self.wizard.step()
                    )?;
                }
                Err(e) => writeln!(out, "! {e}")?,
            },
            Command::Next => match self.wizard.next() {
                Navigation::Transitioning(transition) => {
                    self.play(transition, out).await?;
                    self.render(out)?;
                }
                Navigation::Moved(_) => self.render(out)?,
                Navigation::Unchanged => {
                    writeln!(out, "! already on the last step, type 'done' to finish")?
                }
                Navigation::Blocked => writeln!(out, "! cannot move right now")?,
            },
            Command::Back => match self.wizard.previous() {
                Navigation::Moved(_) => self.render(out)?,
                Navigation::Unchanged => writeln!(out, "! already on the first step")?,
                _ => writeln!(out, "! cannot move right now")?,
            },
            Command::Tone(tone) => match self.wizard.open_aroma_tone(tone) {
                Ok(()) => self.render(out)?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            Command::Open(attribute) => match self.wizard.open_aroma_attribute(attribute) {
                Ok(()) => self.render(out)?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            Command::Up => match self.wizard.aroma_back() {
                Ok(true) => self.render(out)?,
                Ok(false) => writeln!(out, "! already at the top of the aroma list")?,
                Err(e) => writeln!(out, "! {e}")?,
            },
            Command::Show => self.render(out)?,
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Done => match self.wizard.complete() {
                Ok(completion) => return Ok(Flow::Done(completion)),
                Err(e) => writeln!(out, "! {e}")?,
            },
            Command::Quit => {}
        }
        Ok(Flow::Continue)
    }

    fn set(&mut self, field: Field, value: &str) -> Result<String, TastingError> {
        let wizard = &mut self.wizard;
        match field {
            Field::Name => {
                wizard.set_name(value)?;
                Ok(format!("name = {value}"))
            }
            Field::Brewery => {
                wizard.set_brewery(value)?;
                Ok(format!("brewery = {value}"))
            }
            Field::Style => {
                let style = match value {
                    "" | "-" => None,
                    v => Some(
                        v.parse::<BeerStyle>()
                            .map_err(|_| TastingError::UnknownStyle(v.to_string()))?,
                    ),
                };
                wizard.set_style(style)?;
                Ok(format!(
                    "style = {}",
                    style.map(BeerStyle::name).unwrap_or("-")
                ))
            }
            Field::DrinkDate | Field::PackageDate => {
                let date = match value {
                    "" | "-" => None,
                    v => Some(parse_date(v)?),
                };
                if field == Field::DrinkDate {
                    wizard.set_drink_date(date)?;
                } else {
                    wizard.set_package_date(date)?;
                }
                Ok(format!(
                    "date = {}",
                    date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
                ))
            }
            Field::HopSediment => {
                let present = parse_flag(value)?;
                wizard.set_hop_sediment(present)?;
                Ok(format!(
                    "{} = {}",
                    labels::hop_sediment_label(self.locale),
                    if present { "yes" } else { "no" }
                ))
            }
            Field::Score(attribute) => {
                let raw: f64 = value
                    .parse()
                    .map_err(|_| TastingError::InvalidNumber(value.to_string()))?;
                let stored = wizard.set_score(attribute, raw)?;
                Ok(format!("{attribute} = {stored:.1}"))
            }
        }
    }

    /// Show the overlay until the timer runs out, then land on the next step.
    async fn play<W: Write>(&mut self, transition: Transition, out: &mut W) -> Result<()> {
        if let Some(cue) = transition.cue(self.locale) {
            writeln!(out, "\n  ~ {} ~\n  {}\n", cue.title, cue.description)?;
            out.flush()?;
        }
        let mut timer = TransitionTimer::start(self.overlay);
        match timer.wait().await {
            TimerOutcome::Elapsed => {
                self.wizard.finish_transition();
            }
            TimerOutcome::Cancelled => {
                self.wizard.cancel_transition();
                writeln!(out, "! transition cancelled")?;
            }
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let locale = self.locale;
        let progress = self.wizard.progress();
        let step = self.wizard.step();
        writeln!(
            out,
            "\n[{}/{} {}%] {}",
            progress.step,
            progress.total,
            progress.percent,
            labels::step_title(locale, step)
        )?;

        let score = self.wizard.score();
        let attribute_line = |out: &mut W, attribute: Attribute| -> Result<()> {
            let value = score.get(attribute);
            let mut line = format!(
                "  {:<16} {:<12} {value:.1}",
                attribute.key(),
                labels::attribute_label(locale, attribute)
            );
            if let Some((low, high)) = labels::attribute_scale(locale, attribute) {
                line.push_str(&format!("  ({low} .. {high})"));
            }
            if attribute == Attribute::Clarity {
                line.push_str(&format!(
                    "  [{}]",
                    labels::clarity_label(locale, ClarityLevel::from_value(value))
                ));
            }
            writeln!(out, "{line}")?;
            Ok(())
        };

        match self.wizard.screen() {
            Screen::Info => {
                let beer = self.wizard.beer();
                let date = |d: Option<chrono::NaiveDate>| {
                    d.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
                };
                writeln!(out, "  name          {}", beer.name)?;
                writeln!(out, "  style         {}", beer.style_label())?;
                writeln!(out, "  brewery       {}", beer.brewery)?;
                writeln!(out, "  drink_date    {}", date(beer.drink_date))?;
                writeln!(out, "  package_date  {}", date(beer.package_date))?;
            }
            Screen::Aroma(AromaPage::Root) => {
                for (command, tone) in [("good", AromaTone::Pleasant), ("bad", AromaTone::Unpleasant)] {
                    writeln!(
                        out,
                        "  {command:<5} {}: {}",
                        labels::tone_label(locale, tone),
                        labels::tone_hint(locale, tone)
                    )?;
                }
            }
            Screen::Aroma(AromaPage::Tone(tone)) => {
                writeln!(out, "  {}", labels::tone_label(locale, tone))?;
                for &attribute in tone.attributes() {
                    attribute_line(&mut *out, attribute)?;
                }
            }
            Screen::Aroma(AromaPage::Leaf(attribute)) => attribute_line(&mut *out, attribute)?,
            _ => {
                if let Some(category) = step.category() {
                    for &attribute in self.wizard.options().schema.attributes(category) {
                        attribute_line(&mut *out, attribute)?;
                    }
                }
                if step == Step::Appearance {
                    writeln!(
                        out,
                        "  hop_sediment     {}",
                        if score.appearance.has_hop_sediment { "yes" } else { "no" }
                    )?;
                }
            }
        }
        Ok(())
    }
}

const HELP: &str = "\
  set <field> <value>   name, style, brewery, drink_date, package_date,
                        hop_sediment or any score attribute (1-5)
  next / back           move between steps
  good / bad            aroma: open pleasant or unpleasant aromas
  open <aroma>          aroma: score a single aroma
  up                    aroma: go back one level
  show                  redraw the current step
  done                  finish on the last step
  quit                  abandon the tasting
";

#[cfg(test)]
mod tests {
    use super::*;
    use judgebeer_core::scoring::ScoreLevel;
    use judgebeer_core::wizard::WizardOptions;
    use std::io::Cursor;

    fn session(show_transitions: bool, locale: Locale) -> Session {
        let options = WizardOptions {
            show_transitions,
            ..WizardOptions::default()
        };
        Session::new(Wizard::new(options), locale, Duration::from_millis(2000))
    }

    async fn drive(session: &mut Session, script: &str) -> (Result<Completion>, String) {
        let mut out = Vec::new();
        let result = session.run(Cursor::new(script.to_string()), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    const FULL_TASTING: &str = "\
set name Test IPA
set style neipa
set drink_date 2024-06-01
next
set color 4.56
set hop_sediment yes
next
good
open fruity
set fruity 5
up
bad
open skunky
set skunky 1
next
set bitter 5
next
next
set enjoyment 4.4
done
";

    #[tokio::test]
    async fn full_tasting_without_transitions() {
        let mut s = session(false, Locale::En);
        let (result, out) = drive(&mut s, FULL_TASTING).await;
        let completion = result.unwrap();

        assert_eq!(completion.beer.name, "Test IPA");
        assert_eq!(completion.beer.style, Some(BeerStyle::NewEnglandIpa));
        assert_eq!(completion.score.appearance.color, 4.6);
        assert!(completion.score.appearance.has_hop_sediment);
        assert_eq!(completion.score.overall.enjoyment, 4.0);
        assert_eq!(completion.averages.appearance, 3.2);
        assert_eq!(completion.averages.aroma, 3.0);
        assert_eq!(completion.averages.taste, 3.4);
        assert_eq!(completion.averages.overall, 3.3);
        assert_eq!(completion.total(), 3.2);
        assert_eq!(completion.level(), ScoreLevel::Good);

        assert!(out.contains("[1/6 17%]"));
        assert!(out.contains("[6/6 100%]"));
        assert!(!out.contains("! "), "unexpected refusal:\n{out}");
        assert!(s.wizard.is_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn transitions_show_cue_then_advance() {
        let mut s = session(true, Locale::Zh);
        let (result, out) = drive(&mut s, "next\nquit\n").await;

        assert!(result.is_err());
        assert!(out.contains("准备好了吗？"));
        assert_eq!(s.wizard.step(), Step::Appearance);
        assert!(s.wizard.transition().is_none());
    }

    #[tokio::test]
    async fn refused_commands_keep_the_prompt_going() {
        let mut s = session(false, Locale::En);
        let (result, out) = drive(
            &mut s,
            "set bitter 5\nfly\nopen fruity\nset taste 3\ndone\nset name Ok\nquit\n",
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("aborted"));
        assert!(out.contains("! bitter cannot be set on the info step"));
        assert!(out.contains("! unknown command 'fly'"));
        assert!(out.contains("! aroma categories are only available on the aroma step"));
        assert!(out.contains("! unknown attribute: taste"));
        assert!(out.contains("! the tasting can only be completed on the final step"));
        assert_eq!(s.wizard.beer().name, "Ok");
        assert_eq!(s.wizard.score().taste.bitter, 3.0);
    }

    #[tokio::test]
    async fn state_refusals_name_the_current_step() {
        let mut s = session(false, Locale::En);
        let (_, out) = drive(&mut s, "set bitter 5\nset color lots\nquit\n").await;
        assert!(out.contains("! bitter cannot be set on the info step\n  (on the info step"));
        assert!(out.contains("! 'lots' is not a number\n> "));

        let err = s.set(Field::Score(Attribute::Bitter), "4").unwrap_err();
        assert!(err.is_state_error());
        let err = s.set(Field::Style, "Mead").unwrap_err();
        assert!(!err.is_state_error());
    }

    #[tokio::test]
    async fn eof_before_done_is_an_error() {
        let mut s = session(false, Locale::En);
        let (result, _) = drive(&mut s, "set name Half\nnext\n").await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[tokio::test]
    async fn bad_values_are_reported() {
        let mut s = session(false, Locale::En);
        let (_, out) = drive(
            &mut s,
            "set style Mead\nset drink_date yesterday\nnext\nset color lots\nset hop_sediment maybe\nquit\n",
        )
        .await;
        assert!(out.contains("! unknown beer style: Mead"));
        assert!(out.contains("! invalid date 'yesterday'"));
        assert!(out.contains("! 'lots' is not a number"));
        assert!(out.contains("! expected yes or no"));
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("  next \n"), Ok(Command::Next));
        assert_eq!(Command::parse("GOOD"), Ok(Command::Tone(AromaTone::Pleasant)));
        assert_eq!(
            Command::parse("open malt"),
            Ok(Command::Open(Attribute::Malt))
        );
        assert_eq!(
            Command::parse("set head_color 2.5"),
            Ok(Command::Set {
                field: Field::Score(Attribute::HeadColor),
                value: "2.5".into()
            })
        );
        assert_eq!(
            Command::parse("set name  Pliny the Elder "),
            Ok(Command::Set {
                field: Field::Name,
                value: "Pliny the Elder".into()
            })
        );
        assert_eq!(
            Command::parse("set hasHopShit yes").map(|c| match c {
                Command::Set { field, .. } => Some(field),
                _ => None,
            }),
            Ok(Some(Field::HopSediment))
        );
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert!(Command::parse("set").is_err());
        assert!(Command::parse("open").is_err());
    }
}
