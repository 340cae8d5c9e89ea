//! judgebeer-report: report view for finished tastings.
//!
//! Renders a [`TastingReport`](judgebeer_core::report::TastingReport) as a
//! self-contained HTML page with an inline SVG radar chart.

pub mod html;
pub mod radar;
