//! Common types and utilities for the tsdart translator.
//!
//! This crate provides foundational types used across all tsdart crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message templates)
//! - Translation options (`TranspileOptions`)
//! - Tracing subscriber setup

// Soft diagnostics reported during translation
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, format_message};

// Options for a translation run
pub mod options;
pub use options::TranspileOptions;

// Tracing subscriber configuration
pub mod tracing_config;
