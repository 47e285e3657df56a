//! Display helpers shared by the text report renderers.

use std::collections::BTreeSet;

use crate::models::ApplianceId;

/// Format a monthly or daily energy figure in kilowatt-hours.
///
/// # Examples
///
/// ```
/// use consumo_core::formatting::format_kwh;
///
/// assert_eq!(format_kwh(108.0),   "108.00 kWh");
/// assert_eq!(format_kwh(713.64),  "713.64 kWh");
/// assert_eq!(format_kwh(0.0),     "0.00 kWh");
/// ```
pub fn format_kwh(value: f64) -> String {
    format!("{:.2} kWh", value)
}

/// Format a power rating in watts. Whole ratings drop the fraction.
///
/// # Examples
///
/// ```
/// use consumo_core::formatting::format_watts;
///
/// assert_eq!(format_watts(1200.0), "1200 W");
/// assert_eq!(format_watts(7.5),    "7.5 W");
/// ```
pub fn format_watts(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{} W", value as i64)
    } else {
        format!("{} W", value)
    }
}

/// Format a percentage with one decimal place.
///
/// # Examples
///
/// ```
/// use consumo_core::formatting::format_percentage;
///
/// assert_eq!(format_percentage(33.333), "33.3%");
/// assert_eq!(format_percentage(100.0),  "100.0%");
/// ```
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a classification set in set-builder style, or the empty-set symbol.
pub fn format_set(set: &BTreeSet<ApplianceId>) -> String {
    if set.is_empty() {
        "∅".to_string()
    } else {
        let elements: Vec<&str> = set.iter().map(|id| id.as_str()).collect();
        format!("{{{}}}", elements.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_set_lists_sorted_elements() {
        let set: BTreeSet<ApplianceId> = ["Plancha", "Heladera", "Microondas"]
            .iter()
            .map(|n| ApplianceId::new(n))
            .collect();
        assert_eq!(format_set(&set), "{heladera, microondas, plancha}");
    }

    #[test]
    fn test_format_set_empty() {
        let set = BTreeSet::new();
        assert_eq!(format_set(&set), "∅");
    }

    #[test]
    fn test_format_watts_fractional() {
        assert_eq!(format_watts(65.0), "65 W");
        assert_eq!(format_watts(0.5), "0.5 W");
    }
}
