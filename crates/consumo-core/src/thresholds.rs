use serde::{Deserialize, Serialize};

/// Default monthly consumption threshold in kWh (proposition p).
pub const DEFAULT_MONTHLY_KWH: f64 = 300.0;

/// Default count of high-tier appliances above which proposition q holds.
pub const DEFAULT_HIGH_TIER_COUNT: usize = 2;

/// Default per-location monthly consumption threshold in kWh.
pub const DEFAULT_LOCATION_KWH: f64 = 50.0;

/// Minimum number of high-tier appliances in one location for it to count as
/// a simultaneous-use risk.
pub const DEFAULT_SIMULTANEOUS_HIGH: usize = 2;

/// Thresholds driving the logic engine's propositions and alert rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Total monthly kWh above which overall consumption is considered high.
    pub monthly_kwh: f64,
    /// Number of ALTO-tier appliances above which the count is considered high.
    pub high_tier_count: usize,
    /// Monthly kWh above which a single location is considered critical.
    pub location_kwh: f64,
    /// ALTO-tier appliances sharing a location at or above which the location
    /// carries a simultaneous-use risk.
    pub simultaneous_high: usize,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            monthly_kwh: DEFAULT_MONTHLY_KWH,
            high_tier_count: DEFAULT_HIGH_TIER_COUNT,
            location_kwh: DEFAULT_LOCATION_KWH,
            simultaneous_high: DEFAULT_SIMULTANEOUS_HIGH,
        }
    }
}
