//! SVG radar chart of the five category averages.

use std::f64::consts::PI;

use judgebeer_core::labels::{self, Locale};
use judgebeer_core::model::{Category, MAX_SCORE};
use judgebeer_core::scoring::CategoryAverages;

use crate::html::html_escape;

const SIZE: f64 = 320.0;
const RADIUS: f64 = 110.0;
const LABEL_OFFSET: f64 = 22.0;
const STROKE: &str = "#d97706";
const FILL: &str = "#f59e0b";
const GRID: &str = "#57534e";
const TICK: &str = "#78716c";

/// Angle of the `index`-th axis, starting straight up and going clockwise.
fn axis_angle(index: usize, axes: usize) -> f64 {
    -PI / 2.0 + 2.0 * PI * index as f64 / axes as f64
}

/// Point at `value` (on a 0..=5 scale) along the `index`-th axis.
pub fn radar_point(index: usize, axes: usize, value: f64) -> (f64, f64) {
    let center = SIZE / 2.0;
    let r = RADIUS * (value.clamp(0.0, MAX_SCORE) / MAX_SCORE);
    let angle = axis_angle(index, axes);
    (center + r * angle.cos(), center + r * angle.sin())
}

fn polygon(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vertices of the data polygon, one per category in wizard order.
pub fn radar_polygon(averages: &CategoryAverages) -> Vec<(f64, f64)> {
    let axes = Category::ALL.len();
    averages
        .iter()
        .enumerate()
        .map(|(i, (_, value))| radar_point(i, axes, value))
        .collect()
}

/// Generate the radar chart as an inline SVG element.
pub fn generate_radar_svg(averages: &CategoryAverages, locale: Locale) -> String {
    let axes = Category::ALL.len();
    let center = SIZE / 2.0;

    let mut svg = format!(
        "<svg class=\"radar\" width=\"{SIZE}\" height=\"{SIZE}\" viewBox=\"0 0 {SIZE} {SIZE}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );

    // Grid rings at every whole score.
    for level in 1..=MAX_SCORE as u32 {
        let ring: Vec<_> = (0..axes)
            .map(|i| radar_point(i, axes, level as f64))
            .collect();
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"{GRID}\" stroke-width=\"1\"/>\n",
            polygon(&ring)
        ));
    }

    // Spokes and category labels.
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let (x, y) = radar_point(i, axes, MAX_SCORE);
        svg.push_str(&format!(
            "  <line x1=\"{center:.1}\" y1=\"{center:.1}\" x2=\"{x:.1}\" y2=\"{y:.1}\" stroke=\"{GRID}\" stroke-width=\"1\"/>\n"
        ));

        let angle = axis_angle(i, axes);
        let lx = center + (RADIUS + LABEL_OFFSET) * angle.cos();
        let ly = center + (RADIUS + LABEL_OFFSET) * angle.sin();
        let anchor = if angle.cos().abs() < 0.1 {
            "middle"
        } else if angle.cos() > 0.0 {
            "start"
        } else {
            "end"
        };
        svg.push_str(&format!(
            "  <text x=\"{lx:.1}\" y=\"{ly:.1}\" font-size=\"13\" fill=\"{TICK}\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\">{}</text>\n",
            html_escape(labels::category_label(locale, category))
        ));
    }

    // Radius ticks along the vertical axis.
    for level in 0..=MAX_SCORE as u32 {
        let (x, y) = radar_point(0, axes, level as f64);
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{y:.1}\" font-size=\"10\" fill=\"{TICK}\" dominant-baseline=\"middle\">{level}</text>\n",
            x + 4.0
        ));
    }

    svg.push_str(&format!(
        "  <polygon class=\"scores\" points=\"{}\" fill=\"{FILL}\" fill-opacity=\"0.5\" stroke=\"{STROKE}\" stroke-width=\"2\"/>\n",
        polygon(&radar_polygon(averages))
    ));

    svg.push_str("</svg>\n");
    svg
}
