//! Scoring engine and assessment workflows for the HSE-IT psychosocial risk
//! questionnaire.
//!
//! The crate is organized around a single shared [`assessment::ScoringEngine`]
//! so that every caller (HTTP handler, CLI demo, batch aggregation) classifies
//! risk through exactly one implementation.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
