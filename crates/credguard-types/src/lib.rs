//! Stable DTOs and IDs used across the credguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for evaluation results and the emitted report
//! - stable string IDs for rules and their description keys
//!
//! Description keys are opaque here. Resolving them to human-readable text is
//! a presentation concern and lives with the consumer (see the CLI crate).

#![forbid(unsafe_code)]

pub mod ids;
pub mod result;

pub use result::{
    Evaluation, ReportEnvelope, ToolMeta, UnmetRule, SCHEMA_CONFIG_V1, SCHEMA_REPORT_V1,
};
