//! Core domain types for the household consumption monitor.
//!
//! Defines the appliance record and its normalised identity, the closed
//! consumption-tier and alert-level enumerations, rule thresholds, the shared
//! error type and the CLI settings.

pub mod classification;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod thresholds;
