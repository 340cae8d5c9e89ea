//! judgebeer configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::labels::Locale;
use crate::scoring::ScoringSchema;
use crate::transition::DEFAULT_TRANSITION;
use crate::wizard::WizardOptions;

/// Top-level judgebeer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgebeerConfig {
    /// Label language.
    #[serde(default)]
    pub locale: Locale,
    /// Show the overlay between steps.
    #[serde(default = "default_true")]
    pub show_transitions: bool,
    /// How long the overlay stays up, in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Which attributes count towards the category averages.
    #[serde(default)]
    pub schema: ScoringSchema,
    /// Where written reports go.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_true() -> bool {
    true
}
fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION.as_millis() as u64
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./judgebeer-reports")
}

impl Default for JudgebeerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            show_transitions: true,
            transition_ms: default_transition_ms(),
            schema: ScoringSchema::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl JudgebeerConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions {
            show_transitions: self.show_transitions,
            schema: self.schema,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `judgebeer.toml` in the current directory
/// 2. `~/.config/judgebeer/config.toml`
///
/// Environment variable overrides: `JUDGEBEER_LOCALE`, `JUDGEBEER_TRANSITION_MS`.
pub fn load_config() -> Result<JudgebeerConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<JudgebeerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("judgebeer.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<JudgebeerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => JudgebeerConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;

    Ok(config)
}

fn apply_env_overrides(
    config: &mut JudgebeerConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(locale) = var("JUDGEBEER_LOCALE") {
        config.locale = locale
            .parse()
            .map_err(|e: String| anyhow::anyhow!("JUDGEBEER_LOCALE: {e}"))?;
    }
    if let Some(ms) = var("JUDGEBEER_TRANSITION_MS") {
        config.transition_ms = ms
            .trim()
            .parse()
            .with_context(|| format!("JUDGEBEER_TRANSITION_MS: invalid value '{ms}'"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("judgebeer"))
}
