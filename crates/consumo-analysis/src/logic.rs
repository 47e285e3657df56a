//! Propositional rules over the aggregated statistics.
//!
//! Four named propositions are evaluated against the current universe,
//! combined with the standard two-valued connectives, and drive the alert
//! level and the advisory list. Nothing is memoised; every call sees the
//! universe as it stands.

use serde::{Deserialize, Serialize};

use consumo_core::classification::{AlertLevel, ConsumptionTier};
use consumo_core::thresholds::AlertThresholds;

use crate::registry::ApplianceRegistry;
use crate::stats::{Dimension, StatsAggregator};

// ── Connectives ────────────────────────────────────────────────────────────────

/// p ∧ q: true only when both hold.
pub fn conjunction(p: bool, q: bool) -> bool {
    p && q
}

/// p ∨ q: true when at least one holds.
pub fn disjunction(p: bool, q: bool) -> bool {
    p || q
}

/// ¬p.
pub fn negation(p: bool) -> bool {
    !p
}

/// p → q, false only when p holds and q does not. Equivalent to ¬p ∨ q.
pub fn implication(p: bool, q: bool) -> bool {
    !p || q
}

// ── Recommendations ────────────────────────────────────────────────────────────

/// Output of the advisory rules, together with the alert level the same
/// propositions produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub advisories: Vec<String>,
    pub alert_level: AlertLevel,
}

// ── LogicEngine ────────────────────────────────────────────────────────────────

/// Evaluates the propositional rules against a registry snapshot.
#[derive(Debug)]
pub struct LogicEngine<'a> {
    registry: &'a ApplianceRegistry,
    thresholds: AlertThresholds,
}

impl<'a> LogicEngine<'a> {
    pub fn new(registry: &'a ApplianceRegistry, thresholds: AlertThresholds) -> Self {
        Self {
            registry,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    fn stats(&self) -> StatsAggregator<'_> {
        StatsAggregator::new(self.registry)
    }

    // ── Propositions ───────────────────────────────────────────────────────────

    /// p: total monthly consumption exceeds `threshold_kwh`.
    pub fn high_consumption(&self, threshold_kwh: f64) -> bool {
        self.stats().total_monthly_kwh() > threshold_kwh
    }

    /// q: more than `threshold_count` appliances classify as ALTO.
    pub fn many_high_tier(&self, threshold_count: usize) -> bool {
        self.registry.by_tier(ConsumptionTier::Alto).len() > threshold_count
    }

    /// r: the location's grouped monthly consumption exceeds `threshold_kwh`.
    /// An unknown location contributes zero.
    pub fn location_critical(&self, location: &str, threshold_kwh: f64) -> bool {
        let consumption = self
            .stats()
            .consumption_by(Dimension::Location)
            .unwrap_or_default();
        consumption.get(location).copied().unwrap_or(0.0) > threshold_kwh
    }

    /// s: the location holds enough ALTO-tier appliances to pose a
    /// simultaneous-use risk.
    pub fn simultaneous_critical(&self, location: &str) -> bool {
        let in_location = self.registry.by_location(location);
        let high_tier = self.registry.by_tier(ConsumptionTier::Alto);
        ApplianceRegistry::intersect(&in_location, &high_tier).len()
            >= self.thresholds.simultaneous_high
    }

    // ── Alert rules ────────────────────────────────────────────────────────────

    /// Classify the overall alert level from the two default propositions.
    pub fn alert_level(&self) -> AlertLevel {
        let p = self.high_consumption(self.thresholds.monthly_kwh);
        let q = self.many_high_tier(self.thresholds.high_tier_count);
        AlertLevel::classify(p, q)
    }

    /// Every distinct location where r ∨ s holds, sorted alphabetically.
    pub fn critical_locations(&self) -> Vec<String> {
        // distinct_locations is a BTreeSet, so iteration is already sorted.
        self.registry
            .distinct_locations()
            .into_iter()
            .filter(|loc| {
                disjunction(
                    self.location_critical(loc, self.thresholds.location_kwh),
                    self.simultaneous_critical(loc),
                )
            })
            .collect()
    }

    /// Apply the six advisory rules in their fixed order.
    ///
    /// Each rule appends at most one advisory; later rules are evaluated
    /// regardless of what earlier ones produced. The returned alert level
    /// derives from the same p and q as the rules, so it always agrees with
    /// [`Self::alert_level`].
    pub fn recommendations(&self) -> Recommendations {
        let p = self.high_consumption(self.thresholds.monthly_kwh);
        let q = self.many_high_tier(self.thresholds.high_tier_count);

        let mut advisories = Vec::new();

        // Rule 1: high total consumption → general review.
        if p {
            advisories.push(format!(
                "Monthly consumption exceeds {:.0} kWh. Review how your appliances are used.",
                self.thresholds.monthly_kwh
            ));
        }

        // Rule 2: many high-tier appliances → suggest replacements.
        if q {
            advisories.push(
                "Several high-consumption appliances are registered. \
                 Consider replacing them with more efficient models."
                    .to_string(),
            );
        }

        // Rule 3: p ∧ q → combined risk.
        if conjunction(p, q) {
            advisories.push(
                "CRITICAL: high total consumption combined with multiple powerful \
                 devices. Avoid running them at the same time."
                    .to_string(),
            );
        }

        // Rule 4: list critical locations.
        let critical = self.critical_locations();
        if !critical.is_empty() {
            advisories.push(format!(
                "Critical locations detected: {}. Review appliance usage in these areas.",
                critical.join(", ")
            ));
        }

        // Rule 5: name the single largest consumer.
        if let Some((id, _)) = self.stats().top_consumers(3).first() {
            let name = self
                .registry
                .lookup(id)
                .map(|a| a.name.clone())
                .unwrap_or_else(|_| id.to_string());
            advisories.push(format!(
                "Your largest consumer is '{}'. Optimising its use will cut costs.",
                name
            ));
        }

        // Rule 6: ¬p ∧ ¬q → congratulation.
        if conjunction(negation(p), negation(q)) {
            advisories.push(
                "Consumption is efficient. Keep up these energy habits.".to_string(),
            );
        }

        Recommendations {
            advisories,
            alert_level: AlertLevel::classify(p, q),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use consumo_core::models::Appliance;

    const BOOLS: [bool; 2] = [false, true];

    fn engine_over(registry: &ApplianceRegistry) -> LogicEngine<'_> {
        LogicEngine::new(registry, AlertThresholds::default())
    }

    fn heavy_registry() -> ApplianceRegistry {
        let mut registry = ApplianceRegistry::new();
        registry.register(Appliance::new(
            "Aire Acondicionado",
            2000.0,
            8.0,
            "Dormitorio",
            "Climatización",
        ));
        registry.register(Appliance::new(
            "Plancha",
            1500.0,
            1.0,
            "Lavadero",
            "Electrodoméstico",
        ));
        registry.register(Appliance::new(
            "Microondas",
            1200.0,
            0.5,
            "Cocina",
            "Electrodoméstico",
        ));
        registry
    }

    #[test]
    fn test_implication_truth_table() {
        assert!(implication(false, false));
        assert!(implication(false, true));
        assert!(!implication(true, false));
        assert!(implication(true, true));
    }

    #[test]
    fn test_de_morgan_laws() {
        for p in BOOLS {
            for q in BOOLS {
                assert_eq!(
                    negation(conjunction(p, q)),
                    disjunction(negation(p), negation(q))
                );
                assert_eq!(
                    negation(disjunction(p, q)),
                    conjunction(negation(p), negation(q))
                );
            }
        }
    }

    #[test]
    fn test_implication_equals_not_p_or_q() {
        for p in BOOLS {
            for q in BOOLS {
                assert_eq!(implication(p, q), disjunction(negation(p), q));
            }
        }
    }

    #[test]
    fn test_empty_universe_is_normal_with_congratulation_only() {
        let registry = ApplianceRegistry::new();
        let engine = engine_over(&registry);
        assert_eq!(engine.alert_level(), AlertLevel::Normal);
        let recs = engine.recommendations();
        assert_eq!(recs.alert_level, AlertLevel::Normal);
        assert_eq!(recs.advisories.len(), 1);
        assert!(recs.advisories[0].contains("efficient"));
    }

    #[test]
    fn test_three_high_tier_appliances_trigger_q() {
        let registry = heavy_registry();
        let engine = engine_over(&registry);
        assert!(engine.many_high_tier(2));
        assert_ne!(engine.alert_level(), AlertLevel::Normal);
    }

    #[test]
    fn test_critical_when_both_propositions_hold() {
        let registry = heavy_registry();
        // 480 + 45 + 18 = 543 kWh, and three ALTO appliances.
        let engine = engine_over(&registry);
        assert!(engine.high_consumption(300.0));
        assert!(engine.many_high_tier(2));
        assert_eq!(engine.alert_level(), AlertLevel::Critical);
    }

    #[test]
    fn test_location_critical_unknown_location_counts_zero() {
        let registry = heavy_registry();
        let engine = engine_over(&registry);
        assert!(!engine.location_critical("Balcón", 50.0));
        assert!(engine.location_critical("Dormitorio", 50.0));
    }

    #[test]
    fn test_simultaneous_critical_requires_two_in_same_location() {
        let mut registry = heavy_registry();
        let engine = engine_over(&registry);
        // One ALTO appliance per location so far.
        assert!(!engine.simultaneous_critical("Cocina"));

        registry.register(Appliance::new(
            "Horno Eléctrico",
            2200.0,
            0.5,
            "Cocina",
            "Electrodoméstico",
        ));
        let engine = engine_over(&registry);
        assert!(engine.simultaneous_critical("Cocina"));
    }

    #[test]
    fn test_critical_locations_sorted() {
        let registry = heavy_registry();
        let engine = engine_over(&registry);
        // Dormitorio 480 kWh exceeds 50; Lavadero 45 and Cocina 18 do not,
        // and neither holds two ALTO appliances.
        assert_eq!(engine.critical_locations(), vec!["Dormitorio".to_string()]);
    }

    #[test]
    fn test_recommendation_rules_fire_in_order() {
        let registry = heavy_registry();
        let recs = engine_over(&registry).recommendations();
        assert_eq!(recs.alert_level, AlertLevel::Critical);
        assert_eq!(recs.advisories.len(), 5);
        assert!(recs.advisories[0].contains("Monthly consumption exceeds"));
        assert!(recs.advisories[1].contains("more efficient models"));
        assert!(recs.advisories[2].starts_with("CRITICAL"));
        assert!(recs.advisories[3].contains("Dormitorio"));
        assert!(recs.advisories[4].contains("Aire Acondicionado"));
    }

    #[test]
    fn test_recommendations_agree_with_alert_level() {
        for registry in [ApplianceRegistry::new(), heavy_registry()] {
            let engine = engine_over(&registry);
            assert_eq!(engine.recommendations().alert_level, engine.alert_level());
        }
    }
}
