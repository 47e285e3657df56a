//! Closed enumerations for consumption tiers and alert levels.
//!
//! Both were free-form strings in earlier revisions of the system; keeping
//! them as tagged enums makes an invalid tier unrepresentable past the parse
//! boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MonitorError;

// ── ConsumptionTier ────────────────────────────────────────────────────────────

/// Power cutoff above which an appliance is classified ALTO, in watts.
pub const HIGH_TIER_WATTS: f64 = 1000.0;

/// Power cutoff at or above which an appliance is classified MEDIO, in watts.
pub const MEDIUM_TIER_WATTS: f64 = 200.0;

/// Three-level consumption classification derived solely from power rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConsumptionTier {
    /// More than 1000 W.
    Alto,
    /// Between 200 W and 1000 W inclusive.
    Medio,
    /// Less than 200 W.
    Bajo,
}

impl ConsumptionTier {
    /// All tiers, in display order (highest first).
    pub const ALL: [ConsumptionTier; 3] = [
        ConsumptionTier::Alto,
        ConsumptionTier::Medio,
        ConsumptionTier::Bajo,
    ];

    /// Classify a power rating into a tier.
    ///
    /// Total over all finite inputs: every wattage lands in exactly one
    /// bucket, recomputed on each call and never cached.
    pub fn classify(watts: f64) -> Self {
        if watts > HIGH_TIER_WATTS {
            ConsumptionTier::Alto
        } else if watts >= MEDIUM_TIER_WATTS {
            ConsumptionTier::Medio
        } else {
            ConsumptionTier::Bajo
        }
    }

    /// Canonical uppercase token, as used in reports and the inventory format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionTier::Alto => "ALTO",
            ConsumptionTier::Medio => "MEDIO",
            ConsumptionTier::Bajo => "BAJO",
        }
    }
}

impl fmt::Display for ConsumptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsumptionTier {
    type Err = MonitorError;

    /// Parse an external tier token, case-insensitively.
    ///
    /// Unrecognised tokens fail eagerly here rather than being mapped to an
    /// empty classification set downstream.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALTO" => Ok(ConsumptionTier::Alto),
            "MEDIO" => Ok(ConsumptionTier::Medio),
            "BAJO" => Ok(ConsumptionTier::Bajo),
            _ => Err(MonitorError::InvalidTier(s.to_string())),
        }
    }
}

// ── AlertLevel ─────────────────────────────────────────────────────────────────

/// Overall alert classification derived from two boolean propositions about
/// the registered appliances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Critical,
    Moderate,
    Normal,
}

impl AlertLevel {
    /// Decision table over the two propositions:
    ///
    /// | p (high consumption) | q (many high-tier) | level    |
    /// |----------------------|--------------------|----------|
    /// | true                 | true               | CRITICAL |
    /// | true                 | false              | MODERATE |
    /// | false                | true               | MODERATE |
    /// | false                | false              | NORMAL   |
    pub fn classify(high_consumption: bool, many_high_tier: bool) -> Self {
        if high_consumption && many_high_tier {
            AlertLevel::Critical
        } else if high_consumption || many_high_tier {
            AlertLevel::Moderate
        } else {
            AlertLevel::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "CRITICAL",
            AlertLevel::Moderate => "MODERATE",
            AlertLevel::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
