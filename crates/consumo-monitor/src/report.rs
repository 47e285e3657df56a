//! Plain-text report renderers.
//!
//! Every renderer returns a `String` so the output can be unit-tested
//! without capturing stdout. The JSON output path serialises the
//! [`AnalysisReport`] directly and bypasses this module.

use std::fmt::Write as _;

use consumo_analysis::analysis::AnalysisReport;
use consumo_analysis::registry::ApplianceRegistry;
use consumo_core::classification::ConsumptionTier;
use consumo_core::formatting::{format_kwh, format_percentage, format_set, format_watts};

const RULE: &str = "============================================================";

// ── Appliance listing ──────────────────────────────────────────────────────────

/// Render the registered appliances, one block per record.
pub fn render_list(registry: &ApplianceRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "REGISTERED APPLIANCES");
    let _ = writeln!(out, "{RULE}");

    if registry.is_empty() {
        let _ = writeln!(out, "No appliances registered.");
        return out;
    }

    let _ = writeln!(out, "Total: {}", registry.len());
    for appliance in registry.appliances() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", appliance.name);
        let _ = writeln!(
            out,
            "    {} | {} h/day | {} | {}",
            format_watts(appliance.watts),
            appliance.hours_per_day,
            appliance.location,
            appliance.category
        );
        let _ = writeln!(
            out,
            "    Tier: {} | Monthly: {}",
            appliance.tier(),
            format_kwh(appliance.monthly_kwh())
        );
    }
    out
}

// ── Set report ─────────────────────────────────────────────────────────────────

/// Render the classification sets and a worked set-algebra example.
pub fn render_sets(registry: &ApplianceRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "SET ANALYSIS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Universe |U| = {}", registry.len());

    let _ = writeln!(out, "\nBy location:");
    for location in registry.distinct_locations() {
        let set = registry.by_location(&location);
        let _ = writeln!(out, "  {}: |A| = {} {}", location, set.len(), format_set(&set));
    }

    let _ = writeln!(out, "\nBy category:");
    for category in registry.distinct_categories() {
        let set = registry.by_category(&category);
        let _ = writeln!(out, "  {}: |A| = {} {}", category, set.len(), format_set(&set));
    }

    let _ = writeln!(out, "\nBy tier:");
    for tier in ConsumptionTier::ALL {
        let set = registry.by_tier(tier);
        let _ = writeln!(out, "  {}: |A| = {} {}", tier, set.len(), format_set(&set));
    }

    // Worked set-algebra example over the two largest tiers.
    let a = registry.by_tier(ConsumptionTier::Alto);
    let b = registry.by_tier(ConsumptionTier::Medio);
    let union = ApplianceRegistry::union(&a, &b);
    let inter = ApplianceRegistry::intersect(&a, &b);

    let _ = writeln!(out, "\nSet algebra (A = ALTO, B = MEDIO):");
    let _ = writeln!(out, "  A ∪ B = {}", format_set(&union));
    let _ = writeln!(out, "  A ∩ B = {}", format_set(&inter));
    let _ = writeln!(
        out,
        "  A − B = {}",
        format_set(&ApplianceRegistry::difference(&a, &b))
    );
    let _ = writeln!(out, "  U − A = {}", format_set(&registry.complement(&a)));
    let _ = writeln!(
        out,
        "  Inclusion-exclusion: |A ∪ B| = {} + {} − {} = {}",
        a.len(),
        b.len(),
        inter.len(),
        union.len()
    );
    out
}

// ── Statistics report ──────────────────────────────────────────────────────────

/// Render the counting and consumption statistics.
pub fn render_stats(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "STATISTICAL REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total appliances: |U| = {}", report.universe_size);

    let _ = writeln!(out, "\nDistribution by location:");
    for (location, count) in &report.count_by_location {
        let _ = writeln!(out, "  {}: {}", location, count);
    }

    let _ = writeln!(out, "\nDistribution by category:");
    for (category, count) in &report.count_by_category {
        let _ = writeln!(out, "  {}: {}", category, count);
    }

    let _ = writeln!(out, "\nDistribution by tier:");
    for tier in ConsumptionTier::ALL {
        let count = report.count_by_tier.get(tier.as_str()).copied().unwrap_or(0);
        let pct = report.tier_percentages.get(&tier).copied().unwrap_or(0.0);
        let _ = writeln!(out, "  {}: {} ({})", tier, count, format_percentage(pct));
    }

    let _ = writeln!(out, "\nEnergy consumption:");
    let _ = writeln!(
        out,
        "  Monthly total: {}",
        format_kwh(report.total_monthly_kwh)
    );
    let _ = writeln!(
        out,
        "  Daily average: {}",
        format_kwh(report.total_monthly_kwh / 30.0)
    );

    let _ = writeln!(out, "\nMonthly consumption by location:");
    for (location, kwh) in &report.consumption_by_location {
        let _ = writeln!(out, "  {}: {}", location, format_kwh(*kwh));
    }

    let _ = writeln!(out, "\nTop consumers:");
    for (rank, consumer) in report.top_consumers.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {}",
            rank + 1,
            consumer.name,
            format_kwh(consumer.monthly_kwh)
        );
    }
    out
}

// ── Logic report ───────────────────────────────────────────────────────────────

/// Render the proposition evaluation, alert level and advisories.
pub fn render_logic(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "LOGIC ANALYSIS");
    let _ = writeln!(out, "{RULE}");

    let props = &report.propositions;
    let _ = writeln!(out, "Propositions:");
    let _ = writeln!(
        out,
        "  p: high total consumption = {}",
        props.high_consumption
    );
    let _ = writeln!(
        out,
        "  q: many high-tier appliances = {}",
        props.many_high_tier
    );

    let _ = writeln!(out, "\nConnectives:");
    let _ = writeln!(out, "  p ∧ q = {}", props.conjunction);
    let _ = writeln!(out, "  p ∨ q = {}", props.disjunction);
    let _ = writeln!(out, "  ¬p    = {}", !props.high_consumption);
    let _ = writeln!(out, "  p → q = {}", props.implication);

    let _ = writeln!(out, "\nAlert level: {}", report.alert_level);

    let _ = write!(out, "\nCritical locations: ");
    if report.critical_locations.is_empty() {
        let _ = writeln!(out, "none");
    } else {
        let _ = writeln!(out, "{}", report.critical_locations.join(", "));
    }

    let _ = writeln!(out, "\nRecommendations:");
    for (i, advisory) in report.advisories.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, advisory);
    }
    out
}

// ── Full report ────────────────────────────────────────────────────────────────

/// Render all four sections in order.
pub fn render_full(registry: &ApplianceRegistry, report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&render_list(registry));
    out.push('\n');
    out.push_str(&render_sets(registry));
    out.push('\n');
    out.push_str(&render_stats(report));
    out.push('\n');
    out.push_str(&render_logic(report));
    let _ = writeln!(
        out,
        "\nGenerated at {} over {} appliances",
        report.metadata.generated_at, report.metadata.appliance_count
    );
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────
