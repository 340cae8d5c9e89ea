//! Rendering shared by the commands that produce a report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};

use judgebeer_core::config::JudgebeerConfig;
use judgebeer_core::labels::{self, Locale};
use judgebeer_core::report::TastingReport;
use judgebeer_core::scoring::ScoreLevel;
use judgebeer_report::html::write_html_report;

/// `--lang` wins over the configured locale.
pub fn resolve_locale(lang: Option<&str>, config: &JudgebeerConfig) -> Result<Locale> {
    match lang {
        Some(lang) => lang.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(config.locale),
    }
}

fn level_color(level: ScoreLevel) -> Color {
    match level {
        ScoreLevel::Exceptional => Color::Yellow,
        ScoreLevel::Excellent => Color::Green,
        ScoreLevel::Good => Color::Blue,
        ScoreLevel::Fair => Color::Grey,
        ScoreLevel::Poor => Color::Red,
    }
}

/// Category averages plus the total, one row each.
pub fn summary_table(report: &TastingReport, locale: Locale) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        labels::details_title(locale).to_string(),
        String::new(),
    ]);

    for (category, value) in report.averages.iter() {
        table.add_row(vec![
            Cell::new(labels::category_label(locale, category)),
            Cell::new(format!("{value:.1}")),
        ]);
    }
    table.add_row(vec![
        Cell::new(labels::total_score_label(locale)),
        Cell::new(format!(
            "{:.1} ({})",
            report.total,
            labels::level_label(locale, report.level)
        ))
        .fg(level_color(report.level)),
    ]);

    table
}

/// Plain-text report: beer header, summary table, hop sediment note.
pub fn render_text(report: &TastingReport, locale: Locale) -> String {
    let mut text = format!(
        "{}\n{} · {}\n\n{}\n",
        report.display_name(locale),
        report.display_style(locale),
        report.display_brewery(locale),
        summary_table(report, locale)
    );
    if report.has_hop_sediment() {
        text.push_str(labels::hop_sediment_label(locale));
        text.push('\n');
    }
    text
}

/// Render `report` in `format` and print it, or write it to `output`.
///
/// HTML without an explicit output goes to the configured output directory.
pub fn emit(
    report: &TastingReport,
    format: &str,
    output: Option<&Path>,
    locale: Locale,
    config: &JudgebeerConfig,
) -> Result<()> {
    let rendered = match format {
        "text" => render_text(report, locale),
        "json" => serde_json::to_string_pretty(report).context("failed to serialize report")?,
        "query" => report.params().to_query(),
        "html" => {
            let path = match output {
                Some(path) => path.to_path_buf(),
                None => default_html_path(&config.output_dir),
            };
            write_html_report(report, locale, &path)?;
            eprintln!("HTML report: {}", path.display());
            return Ok(());
        }
        other => anyhow::bail!("unknown format '{other}' (expected text, json, html or query)"),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report saved to: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn default_html_path(dir: &Path) -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    dir.join(format!("report-{timestamp}.html"))
}
