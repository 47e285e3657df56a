use clap::Parser;
use std::path::PathBuf;

use crate::thresholds::AlertThresholds;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Household appliance consumption analysis
#[derive(Parser, Debug, Clone)]
#[command(
    name = "consumo-monitor",
    about = "Household appliance consumption analysis",
    version
)]
pub struct Settings {
    /// Report to render
    #[arg(long, default_value = "full", value_parser = ["sets", "stats", "logic", "full", "list"])]
    pub report: String,

    /// Inventory JSON file (overrides discovery)
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// Use the built-in sample inventory
    #[arg(long)]
    pub sample: bool,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Total monthly consumption threshold in kWh
    #[arg(long, default_value = "300")]
    pub consumption_threshold: f64,

    /// High-tier appliance count threshold
    #[arg(long, default_value = "2")]
    pub high_tier_threshold: usize,

    /// Per-location monthly consumption threshold in kWh
    #[arg(long, default_value = "50")]
    pub location_threshold: f64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse CLI arguments from the process environment.
    pub fn load() -> Self {
        Self::from_args(std::env::args_os().collect())
    }

    /// Parse CLI arguments from an explicit argv (used for testing).
    pub fn from_args(args: Vec<std::ffi::OsString>) -> Self {
        let mut settings = Self::parse_from(args);
        // --debug wins over --log-level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Alert thresholds with the CLI overrides applied.
    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            monthly_kwh: self.consumption_threshold,
            high_tier_count: self.high_tier_threshold,
            location_kwh: self.location_threshold,
            ..AlertThresholds::default()
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        let mut argv = vec![std::ffi::OsString::from("consumo-monitor")];
        argv.extend(args.iter().map(std::ffi::OsString::from));
        Settings::from_args(argv)
    }

    #[test]
    fn test_defaults() {
        let s = parse(&[]);
        assert_eq!(s.report, "full");
        assert_eq!(s.format, "text");
        assert!(s.inventory.is_none());
        assert!(!s.sample);
        assert_eq!(s.log_level, "INFO");
        assert_eq!(s.thresholds(), AlertThresholds::default());
    }

    #[test]
    fn test_threshold_flags_override_defaults() {
        let s = parse(&[
            "--consumption-threshold",
            "150",
            "--high-tier-threshold",
            "1",
            "--location-threshold",
            "20",
        ]);
        let t = s.thresholds();
        assert_eq!(t.monthly_kwh, 150.0);
        assert_eq!(t.high_tier_count, 1);
        assert_eq!(t.location_kwh, 20.0);
        // Not exposed as a flag; keeps its default.
        assert_eq!(t.simultaneous_high, 2);
    }

    #[test]
    fn test_debug_flag_forces_debug_level() {
        let s = parse(&["--debug", "--log-level", "ERROR"]);
        assert_eq!(s.log_level, "DEBUG");
    }

    #[test]
    fn test_report_and_format_selection() {
        let s = parse(&["--report", "logic", "--format", "json", "--sample"]);
        assert_eq!(s.report, "logic");
        assert_eq!(s.format, "json");
        assert!(s.sample);
    }
}
