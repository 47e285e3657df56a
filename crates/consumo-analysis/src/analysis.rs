//! Top-level analysis pipeline.
//!
//! Gathers one snapshot of everything the report renderers and the JSON
//! output need: set cardinalities, statistics, propositions, alert level and
//! advisories.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use consumo_core::classification::{AlertLevel, ConsumptionTier};
use consumo_core::error::Result;
use consumo_core::thresholds::AlertThresholds;

use crate::logic::{conjunction, disjunction, implication, LogicEngine};
use crate::registry::ApplianceRegistry;
use crate::stats::{Dimension, StatsAggregator};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Number of appliances analysed.
    pub appliance_count: usize,
}

/// One ranked consumer, by display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopConsumer {
    pub name: String,
    pub monthly_kwh: f64,
}

/// The two base propositions and their connective combinations, as evaluated
/// for this report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropositionSummary {
    /// p: total monthly consumption exceeds the threshold.
    pub high_consumption: bool,
    /// q: more high-tier appliances than the threshold.
    pub many_high_tier: bool,
    /// p ∧ q.
    pub conjunction: bool,
    /// p ∨ q.
    pub disjunction: bool,
    /// p → q.
    pub implication: bool,
}

/// The complete output of [`run_analysis`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// |U|, the number of registered appliances.
    pub universe_size: usize,
    pub count_by_location: BTreeMap<String, usize>,
    pub count_by_category: BTreeMap<String, usize>,
    pub count_by_tier: BTreeMap<String, usize>,
    pub tier_percentages: BTreeMap<ConsumptionTier, f64>,
    pub total_monthly_kwh: f64,
    pub consumption_by_location: BTreeMap<String, f64>,
    pub consumption_by_category: BTreeMap<String, f64>,
    pub top_consumers: Vec<TopConsumer>,
    pub propositions: PropositionSummary,
    pub alert_level: AlertLevel,
    pub critical_locations: Vec<String>,
    pub advisories: Vec<String>,
    pub metadata: ReportMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Number of ranked consumers included in a report.
const TOP_CONSUMERS: usize = 5;

/// Run the full analysis pipeline over the current universe.
///
/// 1. Count appliances per location, category and tier.
/// 2. Compute tier percentages and consumption totals.
/// 3. Rank the largest consumers.
/// 4. Evaluate the propositions, alert level, critical locations and
///    advisories.
pub fn run_analysis(
    registry: &ApplianceRegistry,
    thresholds: &AlertThresholds,
) -> Result<AnalysisReport> {
    let stats = StatsAggregator::new(registry);
    let logic = LogicEngine::new(registry, *thresholds);

    let top_consumers = stats
        .top_consumers(TOP_CONSUMERS)
        .into_iter()
        .map(|(id, kwh)| {
            Ok(TopConsumer {
                name: registry.lookup(&id)?.name.clone(),
                monthly_kwh: kwh,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let p = logic.high_consumption(thresholds.monthly_kwh);
    let q = logic.many_high_tier(thresholds.high_tier_count);
    let recommendations = logic.recommendations();

    let report = AnalysisReport {
        universe_size: registry.len(),
        count_by_location: stats.count_by(Dimension::Location),
        count_by_category: stats.count_by(Dimension::Category),
        count_by_tier: stats.count_by(Dimension::Tier),
        tier_percentages: stats.percentages_by_tier(),
        total_monthly_kwh: stats.total_monthly_kwh(),
        consumption_by_location: stats.consumption_by(Dimension::Location)?,
        consumption_by_category: stats.consumption_by(Dimension::Category)?,
        top_consumers,
        propositions: PropositionSummary {
            high_consumption: p,
            many_high_tier: q,
            conjunction: conjunction(p, q),
            disjunction: disjunction(p, q),
            implication: implication(p, q),
        },
        alert_level: recommendations.alert_level,
        critical_locations: logic.critical_locations(),
        advisories: recommendations.advisories,
        metadata: ReportMetadata {
            generated_at: Utc::now().to_rfc3339(),
            appliance_count: registry.len(),
        },
    };

    tracing::debug!(
        "analysis complete: {} appliances, alert level {}",
        report.universe_size,
        report.alert_level
    );

    Ok(report)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{register_all, sample_inventory};

    const EPS: f64 = 1e-6;

    fn sample_report() -> AnalysisReport {
        let mut registry = ApplianceRegistry::new();
        register_all(&mut registry, sample_inventory());
        run_analysis(&registry, &AlertThresholds::default()).unwrap()
    }

    #[test]
    fn test_sample_inventory_counts() {
        let report = sample_report();
        assert_eq!(report.universe_size, 10);
        assert_eq!(report.count_by_tier["ALTO"], 3);
        assert_eq!(report.count_by_tier["MEDIO"], 1);
        assert_eq!(report.count_by_tier["BAJO"], 6);
        assert_eq!(report.count_by_location["Cocina"], 3);
        assert_eq!(report.count_by_category["Electrónica"], 3);
    }

    #[test]
    fn test_sample_inventory_percentages_and_totals() {
        let report = sample_report();
        assert!((report.tier_percentages[&ConsumptionTier::Alto] - 30.0).abs() < EPS);
        assert!((report.tier_percentages[&ConsumptionTier::Medio] - 10.0).abs() < EPS);
        assert!((report.tier_percentages[&ConsumptionTier::Bajo] - 60.0).abs() < EPS);
        assert!((report.total_monthly_kwh - 713.64).abs() < EPS);
        assert!((report.consumption_by_location["Cocina"] - 135.0).abs() < EPS);
    }

    #[test]
    fn test_sample_inventory_alert_and_locations() {
        let report = sample_report();
        assert!(report.propositions.high_consumption);
        assert!(report.propositions.many_high_tier);
        assert!(report.propositions.conjunction);
        assert_eq!(report.alert_level, AlertLevel::Critical);
        assert_eq!(
            report.critical_locations,
            vec!["Cocina".to_string(), "Dormitorio".to_string()]
        );
        assert_eq!(report.top_consumers[0].name, "Aire Acondicionado");
        assert!((report.top_consumers[0].monthly_kwh - 480.0).abs() < EPS);
    }

    #[test]
    fn test_empty_universe_report() {
        let registry = ApplianceRegistry::new();
        let report = run_analysis(&registry, &AlertThresholds::default()).unwrap();
        assert_eq!(report.universe_size, 0);
        assert_eq!(report.total_monthly_kwh, 0.0);
        assert!(report.tier_percentages.values().all(|&p| p == 0.0));
        assert_eq!(report.alert_level, AlertLevel::Normal);
        assert!(report.top_consumers.is_empty());
        assert!(report.critical_locations.is_empty());
        assert_eq!(report.advisories.len(), 1);
    }

    #[test]
    fn test_report_serialises_to_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"alert_level\":\"CRITICAL\""));
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.universe_size, 10);
    }
}
