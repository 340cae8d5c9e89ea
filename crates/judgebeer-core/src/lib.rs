//! judgebeer-core: tasting wizard, scoring and report parameters.
//!
//! This crate holds the questionnaire state machine, the score aggregation
//! and the query-string hand-off to the report view. Rendering lives in
//! `judgebeer-report` and the terminal front end in `judgebeer-cli`.

pub mod config;
pub mod error;
pub mod labels;
pub mod model;
pub mod query;
pub mod report;
pub mod scoring;
pub mod sheet;
pub mod transition;
pub mod wizard;
