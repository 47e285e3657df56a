//! Analysis engine for the household consumption monitor.
//!
//! Responsible for the registered-appliance universe and its classification
//! sets, the statistical aggregates derived from them, the propositional
//! alert/recommendation rules, inventory ingestion and the top-level
//! analysis pipeline.

pub mod analysis;
pub mod inventory;
pub mod logic;
pub mod registry;
pub mod stats;

pub use consumo_core as core;
