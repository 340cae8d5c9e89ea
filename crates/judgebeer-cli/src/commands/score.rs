//! The `judgebeer score` command.

use std::path::PathBuf;

use anyhow::Result;

use judgebeer_core::config::load_config_from;
use judgebeer_core::report::TastingReport;
use judgebeer_core::sheet::parse_sheet;

use super::output::{emit, resolve_locale};

pub fn execute(
    sheet_path: PathBuf,
    format: String,
    output: Option<PathBuf>,
    lang: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let locale = resolve_locale(lang.as_deref(), &config)?;

    let sheet = parse_sheet(&sheet_path)?;
    tracing::debug!(path = %sheet_path.display(), schema = %config.schema, "scoring sheet");
    for w in &sheet.warnings {
        match &w.field {
            Some(field) => eprintln!("Warning: [{field}] {}", w.message),
            None => eprintln!("Warning: {}", w.message),
        }
    }

    let completion = sheet.completion(config.schema);
    let report = TastingReport::from_completion(&completion);
    emit(&report, &format, output.as_deref(), locale, &config)
}
