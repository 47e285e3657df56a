//! Counting and consumption statistics over the appliance universe.
//!
//! Every figure is recomputed from the registry on each call; nothing is
//! cached, so no staleness can arise between registrations.

use std::collections::BTreeMap;
use std::str::FromStr;

use consumo_core::classification::ConsumptionTier;
use consumo_core::error::{MonitorError, Result};
use consumo_core::models::ApplianceId;

use crate::registry::ApplianceRegistry;

// ── Dimension ──────────────────────────────────────────────────────────────────

/// Grouping dimension for counts and consumption totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Location,
    Category,
    Tier,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Location => "location",
            Dimension::Category => "category",
            Dimension::Tier => "tier",
        }
    }
}

impl FromStr for Dimension {
    type Err = MonitorError;

    /// Parse an external dimension token. "type" is accepted as a synonym
    /// for the category dimension; anything else fails eagerly.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "location" => Ok(Dimension::Location),
            "category" | "type" => Ok(Dimension::Category),
            "tier" => Ok(Dimension::Tier),
            _ => Err(MonitorError::InvalidDimension(s.to_string())),
        }
    }
}

// ── StatsAggregator ────────────────────────────────────────────────────────────

/// Read-only statistics view over an [`ApplianceRegistry`].
#[derive(Debug)]
pub struct StatsAggregator<'a> {
    registry: &'a ApplianceRegistry,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(registry: &'a ApplianceRegistry) -> Self {
        Self { registry }
    }

    /// Appliance counts grouped by `dimension`.
    ///
    /// The tier grouping always carries all three tier keys, zeros included;
    /// location and category groupings only carry values that occur.
    pub fn count_by(&self, dimension: Dimension) -> BTreeMap<String, usize> {
        match dimension {
            Dimension::Location => self
                .registry
                .distinct_locations()
                .into_iter()
                .map(|loc| {
                    let count = self.registry.by_location(&loc).len();
                    (loc, count)
                })
                .collect(),
            Dimension::Category => self
                .registry
                .distinct_categories()
                .into_iter()
                .map(|cat| {
                    let count = self.registry.by_category(&cat).len();
                    (cat, count)
                })
                .collect(),
            Dimension::Tier => ConsumptionTier::ALL
                .into_iter()
                .map(|tier| {
                    let count = self.registry.by_tier(tier).len();
                    (tier.as_str().to_string(), count)
                })
                .collect(),
        }
    }

    /// Share of the universe held by each tier, in percent.
    ///
    /// An empty universe yields zero for all three tiers rather than failing;
    /// otherwise the three values sum to 100 within floating-point tolerance.
    pub fn percentages_by_tier(&self) -> BTreeMap<ConsumptionTier, f64> {
        let total = self.registry.len();
        ConsumptionTier::ALL
            .into_iter()
            .map(|tier| {
                let pct = if total == 0 {
                    0.0
                } else {
                    self.registry.by_tier(tier).len() as f64 / total as f64 * 100.0
                };
                (tier, pct)
            })
            .collect()
    }

    /// Total monthly consumption across the universe, in kWh.
    pub fn total_monthly_kwh(&self) -> f64 {
        self.registry.appliances().map(|a| a.monthly_kwh()).sum()
    }

    /// Monthly consumption in kWh grouped by `dimension`.
    ///
    /// Only location and category are consumption groupings; asking for the
    /// tier dimension is rejected.
    pub fn consumption_by(&self, dimension: Dimension) -> Result<BTreeMap<String, f64>> {
        let groups = match dimension {
            Dimension::Location => self.registry.distinct_locations(),
            Dimension::Category => self.registry.distinct_categories(),
            Dimension::Tier => {
                return Err(MonitorError::InvalidDimension(
                    "tier is not a consumption grouping".to_string(),
                ))
            }
        };

        groups
            .into_iter()
            .map(|value| {
                let set = match dimension {
                    Dimension::Location => self.registry.by_location(&value),
                    _ => self.registry.by_category(&value),
                };
                let kwh: f64 = set
                    .iter()
                    .map(|id| Ok(self.registry.lookup(id)?.monthly_kwh()))
                    .sum::<Result<f64>>()?;
                Ok((value, kwh))
            })
            .collect()
    }

    /// The `n` appliances with the greatest monthly consumption, descending.
    ///
    /// The sort is stable, so equal consumers keep their registration order.
    /// Returns fewer than `n` entries when the universe is smaller.
    pub fn top_consumers(&self, n: usize) -> Vec<(ApplianceId, f64)> {
        let mut ranked: Vec<(ApplianceId, f64)> = self
            .registry
            .appliances()
            .map(|a| (a.id(), a.monthly_kwh()))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
