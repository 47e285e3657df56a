//! Inventory ingestion.
//!
//! Reads a JSON array of appliance records, validates each one, and feeds
//! them through the registration interface. Validation happens here, at the
//! boundary; the registry itself accepts any well-formed record.

use std::path::Path;

use consumo_core::error::{MonitorError, Result};
use consumo_core::models::Appliance;

use crate::registry::ApplianceRegistry;

/// Load and validate an inventory file: a JSON array of appliance records.
pub fn load_inventory(path: &Path) -> Result<Vec<Appliance>> {
    let content = std::fs::read_to_string(path).map_err(|source| MonitorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let appliances: Vec<Appliance> = serde_json::from_str(&content)?;

    for appliance in &appliances {
        validate(appliance)?;
    }

    tracing::info!(
        "loaded {} appliances from {}",
        appliances.len(),
        path.display()
    );

    Ok(appliances)
}

/// Check a raw record against the field constraints.
pub fn validate(appliance: &Appliance) -> Result<()> {
    let reject = |reason: &str| {
        Err(MonitorError::InvalidRecord {
            name: appliance.name.clone(),
            reason: reason.to_string(),
        })
    };

    if appliance.name.trim().is_empty() {
        return reject("name must not be blank");
    }
    if !appliance.watts.is_finite() || appliance.watts <= 0.0 {
        return reject("watts must be positive");
    }
    if !(0.0..=24.0).contains(&appliance.hours_per_day) {
        return reject("hours_per_day must be within [0, 24]");
    }
    if appliance.location.trim().is_empty() {
        return reject("location must not be blank");
    }
    if appliance.category.trim().is_empty() {
        return reject("category must not be blank");
    }
    Ok(())
}

/// Register every appliance, in order.
pub fn register_all(registry: &mut ApplianceRegistry, appliances: Vec<Appliance>) {
    let count = appliances.len();
    for appliance in appliances {
        registry.register(appliance);
    }
    tracing::debug!("registered {} appliances", count);
}

/// The built-in sample inventory: ten typical household appliances.
pub fn sample_inventory() -> Vec<Appliance> {
    vec![
        Appliance::new("Heladera", 150.0, 24.0, "Cocina", "Electrodoméstico"),
        Appliance::new("Microondas", 1200.0, 0.5, "Cocina", "Electrodoméstico"),
        Appliance::new(
            "Aire Acondicionado",
            2000.0,
            8.0,
            "Dormitorio",
            "Climatización",
        ),
        Appliance::new("Televisor LED", 80.0, 6.0, "Sala", "Electrónica"),
        Appliance::new("Notebook", 65.0, 8.0, "Oficina", "Electrónica"),
        Appliance::new("Lámpara LED", 10.0, 5.0, "Dormitorio", "Iluminación"),
        Appliance::new("Cafetera", 1000.0, 0.3, "Cocina", "Electrodoméstico"),
        Appliance::new("Ventilador", 75.0, 6.0, "Sala", "Climatización"),
        Appliance::new("Plancha", 1500.0, 1.0, "Lavadero", "Electrodoméstico"),
        Appliance::new("Router WiFi", 12.0, 24.0, "Oficina", "Electrónica"),
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────
