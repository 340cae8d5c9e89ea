//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined and the radar
//! chart embedded as SVG.

use anyhow::{Context, Result};
use std::path::Path;

use judgebeer_core::labels::{self, Locale};
use judgebeer_core::model::{Attribute, Category, TastingScore, MAX_SCORE};
use judgebeer_core::report::TastingReport;
use judgebeer_core::scoring::ClarityLevel;

use crate::radar::generate_radar_svg;

/// Escape a string for safe HTML insertion.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn bar(label: &str, value: f64, color: &str) -> String {
    let width = (value.clamp(0.0, MAX_SCORE) / MAX_SCORE * 100.0).round();
    format!(
        "<div class=\"bar\"><span class=\"bar-label\">{}</span><span class=\"track\"><span class=\"fill\" style=\"width: {width}%; background: {color};\"></span></span><span class=\"bar-value\">{value:.1}</span></div>\n",
        html_escape(label)
    )
}

fn attribute_bars(score: &TastingScore, category: Category, locale: Locale) -> String {
    let mut html = String::new();
    for &attribute in category.attributes() {
        let value = score.get(attribute);
        let mut label = labels::attribute_label(locale, attribute).to_string();
        if attribute == Attribute::Clarity {
            label.push_str(&format!(
                " ({})",
                labels::clarity_label(locale, ClarityLevel::from_value(value))
            ));
        }
        html.push_str(&bar(&label, value, "#a8a29e"));
    }
    html
}

/// Generate an HTML page for a tasting report.
pub fn generate_html(report: &TastingReport, locale: Locale) -> String {
    let name = report.display_name(locale);
    let level_color = report.level.color();
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
        match locale {
            Locale::Zh => "zh-CN",
            Locale::En => "en",
        }
    ));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | {}</title>\n",
        html_escape(labels::report_title(locale)),
        html_escape(name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{}</h1>\n",
        html_escape(labels::report_title(locale))
    ));
    html.push_str(&format!("<h2 class=\"beer\">{}</h2>\n", html_escape(name)));
    html.push_str(&format!(
        "<p class=\"meta\">{} · {}</p>\n",
        html_escape(report.display_style(locale)),
        html_escape(report.display_brewery(locale))
    ));
    let dates: Vec<String> = [report.drink_date, report.package_date]
        .into_iter()
        .zip([
            labels::drink_date_label(locale),
            labels::package_date_label(locale),
        ])
        .filter_map(|(date, label)| date.map(|d| format!("{label}: {}", d.format("%Y-%m-%d"))))
        .collect();
    if !dates.is_empty() {
        html.push_str(&format!(
            "<p class=\"meta\">{}</p>\n",
            html_escape(&dates.join(" | "))
        ));
    }
    html.push_str("</header>\n");

    // Total score card
    html.push_str(&format!(
        "<section class=\"total\" style=\"border-color: {level_color};\">\n"
    ));
    html.push_str(&format!(
        "<p class=\"total-label\">{}</p>\n",
        html_escape(labels::total_score_label(locale))
    ));
    html.push_str(&format!(
        "<p class=\"total-score\" style=\"color: {level_color};\">{:.1}</p>\n",
        report.total
    ));
    html.push_str(&format!(
        "<p class=\"level level-{}\" style=\"color: {level_color};\">{}</p>\n",
        report.level,
        html_escape(labels::level_label(locale, report.level))
    ));
    html.push_str("</section>\n");

    // Radar chart
    html.push_str("<section class=\"radar-chart\">\n");
    html.push_str(&format!(
        "<h2>{}</h2>\n",
        html_escape(labels::radar_title(locale))
    ));
    html.push_str(&generate_radar_svg(&report.averages, locale));
    html.push_str("</section>\n");

    // Per-category details
    html.push_str("<section class=\"details\">\n");
    html.push_str(&format!(
        "<h2>{}</h2>\n",
        html_escape(labels::details_title(locale))
    ));
    for (category, value) in report.averages.iter() {
        html.push_str(&format!("<div class=\"category {}\">\n", category.key()));
        html.push_str(&bar(
            labels::category_label(locale, category),
            value,
            level_color,
        ));
        if let Some(score) = &report.score {
            html.push_str("<div class=\"attributes\">\n");
            html.push_str(&attribute_bars(score, category, locale));
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }
    if report.has_hop_sediment() {
        html.push_str(&format!(
            "<p class=\"note\">{}</p>\n",
            html_escape(labels::hop_sediment_label(locale))
        ));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>JSON</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str(&format!(
        "<footer class=\"meta\">{}</footer>\n",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &TastingReport, locale: Locale, path: &Path) -> Result<()> {
    let html = generate_html(report, locale);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fffbeb; --fg: #1c1917; --card: #fff; --border: #e7e5e4; --track: #f5f5f4; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #1c1917; --fg: #fafaf9; --card: #292524; --border: #44403c; --track: #44403c; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', sans-serif; margin: 0 auto; max-width: 720px; padding: 2rem; background: var(--bg); color: var(--fg); }
h1 { font-size: 1rem; text-transform: uppercase; letter-spacing: 0.1em; color: #a8a29e; }
h2 { margin-top: 2rem; }
h2.beer { font-size: 2rem; margin: 0.25rem 0; }
.meta { color: #78716c; }
section { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 1rem 1.5rem; margin: 1.5rem 0; }
.total { text-align: center; border-width: 2px; }
.total-label { margin: 0; color: #78716c; }
.total-score { font-size: 3.5rem; font-weight: bold; margin: 0.25rem 0; }
.level { font-weight: bold; margin: 0; }
.radar { display: block; margin: 0 auto; }
.bar { display: flex; align-items: center; gap: 0.75rem; margin: 0.4rem 0; }
.bar-label { flex: 0 0 10rem; }
.bar-value { flex: 0 0 2.5rem; text-align: right; font-variant-numeric: tabular-nums; }
.track { flex: 1; height: 0.6rem; background: var(--track); border-radius: 999px; overflow: hidden; }
.fill { display: block; height: 100%; border-radius: 999px; }
.category > .bar { font-weight: bold; }
.attributes { margin-left: 1rem; font-size: 0.9rem; }
.note { font-style: italic; color: #a16207; }
pre { overflow-x: auto; padding: 1rem; background: var(--track); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 0; }
summary { cursor: pointer; font-weight: bold; }
footer { text-align: center; font-size: 0.8rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use judgebeer_core::query::ReportParams;
    use judgebeer_core::scoring::{aggregate, ScoreLevel};

    fn make_test_report() -> TastingReport {
        let mut score = TastingScore::default();
        score.appearance.has_hop_sediment = true;
        score.appearance.clarity = 4.5;
        score.taste.bitter = 5.0;
        let averages = aggregate(&score);
        TastingReport {
            id: uuid::Uuid::nil(),
            created_at: chrono::Utc::now(),
            name: "Heady <Topper>".into(),
            style: "NEIPA".into(),
            brewery: "The Alchemist".into(),
            drink_date: NaiveDate::from_ymd_opt(2024, 5, 20),
            package_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            total: averages.total(),
            level: averages.level(),
            averages,
            score: Some(score),
        }
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report();
        let html = generate_html(&report, Locale::En);

        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Heady &lt;Topper&gt;"));
        assert!(!html.contains("Heady <Topper>"));
        assert!(html.contains("NEIPA · The Alchemist"));
        assert!(html.contains("<svg class=\"radar\""));
        assert!(html.contains("Hop sediment present"));
        assert!(html.contains("2024-05-20"));
        assert!(html.contains(&format!("{:.1}", report.total)));
    }

    #[test]
    fn html_report_lists_attribute_rows_when_scores_present() {
        let report = make_test_report();
        let html = generate_html(&report, Locale::En);
        assert!(html.contains("class=\"attributes\""));
        assert!(html.contains("(Opaque)"));
        assert!(html.contains("level-good") || html.contains("level-excellent"));
    }

    #[test]
    fn query_report_uses_localized_placeholders() {
        let params = ReportParams::from_query("appearance=4.5&aroma=4.5&taste=4.5&mouthfeel=4.5&overall=4.5");
        let report = TastingReport::from_params(&params);
        let html = generate_html(&report, Locale::Zh);

        assert_eq!(report.level, ScoreLevel::Exceptional);
        assert!(html.contains("<html lang=\"zh-CN\">"));
        assert!(html.contains("未知啤酒"));
        assert!(html.contains("卓越"));
        assert!(!html.contains("class=\"attributes\""));
        assert!(!html.contains("class=\"note\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.html");

        write_html_report(&report, Locale::En, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }

    #[test]
    fn escape_handles_quotes() {
        assert_eq!(html_escape("a\"b'c&"), "a&quot;b&#x27;c&amp;");
    }
}
