//! The `judgebeer report` command.

use std::path::PathBuf;

use anyhow::Result;

use judgebeer_core::config::load_config_from;
use judgebeer_core::query::ReportParams;
use judgebeer_core::report::TastingReport;

use super::output::{emit, resolve_locale};

pub fn execute(
    query: String,
    format: String,
    output: Option<PathBuf>,
    lang: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let locale = resolve_locale(lang.as_deref(), &config)?;

    let params = ReportParams::from_query(&query);
    tracing::debug!(name = %params.name, total = params.total(), "decoded report query");
    let report = TastingReport::from_params(&params);
    emit(&report, &format, output.as_deref(), locale, &config)
}
