//! Study abroad eligibility evaluation with per-criterion feedback and PDF export.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
