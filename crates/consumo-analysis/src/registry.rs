//! The appliance universe and its set-membership queries.
//!
//! Registered appliances form the universe U. Classification queries return
//! ephemeral subsets of U, recomputed per call; the set-algebra operations
//! work over any identity sets, whether or not they were drawn from U.

use std::collections::{BTreeSet, HashMap};

use consumo_core::classification::ConsumptionTier;
use consumo_core::error::{MonitorError, Result};
use consumo_core::models::{Appliance, ApplianceId};

// ── ApplianceRegistry ──────────────────────────────────────────────────────────

/// Owns the universe of registered appliances, keyed by normalised identity.
///
/// `register` is the sole mutator; every query recomputes its answer from the
/// current universe. Insertion order is retained because the ranking in
/// [`crate::stats::StatsAggregator::top_consumers`] breaks ties by it.
#[derive(Debug, Default)]
pub struct ApplianceRegistry {
    universe: BTreeSet<ApplianceId>,
    records: HashMap<ApplianceId, Appliance>,
    insertion_order: Vec<ApplianceId>,
}

impl ApplianceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an appliance, overwriting any record with the same identity.
    ///
    /// Last write wins: re-registering keeps the universe size and the
    /// identity's original insertion position.
    pub fn register(&mut self, appliance: Appliance) {
        let id = appliance.id();
        tracing::debug!("registering appliance '{}' as '{}'", appliance.name, id);
        if self.records.insert(id.clone(), appliance).is_none() {
            self.universe.insert(id.clone());
            self.insertion_order.push(id);
        }
    }

    /// Number of registered appliances, |U|.
    pub fn len(&self) -> usize {
        self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// The universe set U.
    pub fn universe(&self) -> &BTreeSet<ApplianceId> {
        &self.universe
    }

    /// Registered appliances in insertion order.
    pub fn appliances(&self) -> impl Iterator<Item = &Appliance> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.records.get(id))
    }

    /// The full record for a normalised identity.
    pub fn lookup(&self, id: &ApplianceId) -> Result<&Appliance> {
        self.records
            .get(id)
            .ok_or_else(|| MonitorError::ApplianceNotFound(id.to_string()))
    }

    // ── Classification queries ─────────────────────────────────────────────────

    /// Subset of U located in `location`, matched case-insensitively.
    pub fn by_location(&self, location: &str) -> BTreeSet<ApplianceId> {
        let wanted = location.trim().to_lowercase();
        self.subset(|a| a.location.to_lowercase() == wanted)
    }

    /// Subset of U with the given category, matched case-insensitively.
    pub fn by_category(&self, category: &str) -> BTreeSet<ApplianceId> {
        let wanted = category.trim().to_lowercase();
        self.subset(|a| a.category.to_lowercase() == wanted)
    }

    /// Subset of U classified into `tier`.
    pub fn by_tier(&self, tier: ConsumptionTier) -> BTreeSet<ApplianceId> {
        self.subset(|a| a.tier() == tier)
    }

    fn subset(&self, predicate: impl Fn(&Appliance) -> bool) -> BTreeSet<ApplianceId> {
        self.records
            .iter()
            .filter(|(_, appliance)| predicate(appliance))
            .map(|(id, _)| id.clone())
            .collect()
    }

    // ── Set algebra ────────────────────────────────────────────────────────────

    /// A ∪ B.
    pub fn union(a: &BTreeSet<ApplianceId>, b: &BTreeSet<ApplianceId>) -> BTreeSet<ApplianceId> {
        a | b
    }

    /// A ∩ B.
    pub fn intersect(
        a: &BTreeSet<ApplianceId>,
        b: &BTreeSet<ApplianceId>,
    ) -> BTreeSet<ApplianceId> {
        a & b
    }

    /// A − B.
    pub fn difference(
        a: &BTreeSet<ApplianceId>,
        b: &BTreeSet<ApplianceId>,
    ) -> BTreeSet<ApplianceId> {
        a - b
    }

    /// U − A.
    pub fn complement(&self, a: &BTreeSet<ApplianceId>) -> BTreeSet<ApplianceId> {
        &self.universe - a
    }

    // ── Enumeration ────────────────────────────────────────────────────────────

    /// All distinct location values, original casing preserved.
    ///
    /// These are display values, not membership keys; membership queries
    /// normalise separately.
    pub fn distinct_locations(&self) -> BTreeSet<String> {
        self.records
            .values()
            .map(|a| a.location.clone())
            .collect()
    }

    /// All distinct category values, original casing preserved.
    pub fn distinct_categories(&self) -> BTreeSet<String> {
        self.records
            .values()
            .map(|a| a.category.clone())
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
