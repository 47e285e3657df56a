mod bootstrap;
mod report;

use anyhow::Result;
use consumo_analysis::analysis::run_analysis;
use consumo_analysis::inventory::{load_inventory, register_all, sample_inventory};
use consumo_analysis::registry::ApplianceRegistry;
use consumo_core::error::MonitorError;
use consumo_core::models::Appliance;
use consumo_core::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Consumo Monitor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Report: {}, Format: {}", settings.report, settings.format);

    let appliances = resolve_inventory(&settings)?;

    let mut registry = ApplianceRegistry::new();
    register_all(&mut registry, appliances);

    let thresholds = settings.thresholds();
    let analysis = run_analysis(&registry, &thresholds)?;

    if settings.format == "json" {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    match settings.report.as_str() {
        "list" => print!("{}", report::render_list(&registry)),
        "sets" => print!("{}", report::render_sets(&registry)),
        "stats" => print!("{}", report::render_stats(&analysis)),
        "logic" => print!("{}", report::render_logic(&analysis)),
        // clap restricts the value, so everything else is "full".
        _ => print!("{}", report::render_full(&registry, &analysis)),
    }

    Ok(())
}

/// Pick the inventory source: explicit path, built-in sample, or discovery.
fn resolve_inventory(settings: &Settings) -> Result<Vec<Appliance>> {
    if let Some(path) = &settings.inventory {
        return Ok(load_inventory(path)?);
    }

    if settings.sample {
        tracing::debug!("using the built-in sample inventory");
        return Ok(sample_inventory());
    }

    match bootstrap::discover_inventory() {
        Some(path) => {
            tracing::info!("discovered inventory at {}", path.display());
            Ok(load_inventory(&path)?)
        }
        None => Err(MonitorError::InventoryNotFound.into()),
    }
}
