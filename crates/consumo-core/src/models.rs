use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classification::ConsumptionTier;

/// Days used to extrapolate a daily figure to a monthly one.
const DAYS_PER_MONTH: f64 = 30.0;

// ── ApplianceId ────────────────────────────────────────────────────────────────

/// Normalised identity of an appliance: the display name, trimmed and
/// lowercased.
///
/// This is the unique key for registration and set membership. It is kept as
/// a distinct type so a raw display name cannot be used as a key by accident.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplianceId(String);

impl ApplianceId {
    /// Derive the identity from a display name.
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplianceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Appliance ──────────────────────────────────────────────────────────────────

/// A household electrical appliance record.
///
/// Immutable after construction. Consumption figures and the tier are
/// derived on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    /// Display name, original casing preserved.
    pub name: String,
    /// Power rating in watts.
    pub watts: f64,
    /// Daily usage in hours, within [0, 24].
    pub hours_per_day: f64,
    /// Location in the home, e.g. "Cocina".
    pub location: String,
    /// Appliance category, e.g. "Electrodoméstico".
    pub category: String,
}

impl Appliance {
    pub fn new(
        name: impl Into<String>,
        watts: f64,
        hours_per_day: f64,
        location: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            watts,
            hours_per_day,
            location: location.into(),
            category: category.into(),
        }
    }

    /// Normalised identity derived from the display name.
    pub fn id(&self) -> ApplianceId {
        ApplianceId::new(&self.name)
    }

    /// Daily energy consumption in watt-hours.
    pub fn daily_wh(&self) -> f64 {
        self.watts * self.hours_per_day
    }

    /// Monthly energy consumption in kilowatt-hours (30-day month).
    pub fn monthly_kwh(&self) -> f64 {
        self.daily_wh() * DAYS_PER_MONTH / 1000.0
    }

    /// Consumption tier, a pure function of the power rating.
    pub fn tier(&self) -> ConsumptionTier {
        ConsumptionTier::classify(self.watts)
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}W) - {}", self.name, self.watts, self.location)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
