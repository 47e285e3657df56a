use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the consumption monitor.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// A lookup by normalised identity found no registered appliance.
    #[error("Appliance not found: {0}")]
    ApplianceNotFound(String),

    /// A tier string is not one of ALTO / MEDIO / BAJO.
    #[error("Invalid consumption tier: {0}")]
    InvalidTier(String),

    /// A dimension token is not recognised, or the dimension does not
    /// support the requested grouping.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// An inventory record failed validation.
    #[error("Invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// No inventory file was given and none was discovered.
    #[error("No inventory file found; pass --inventory PATH or --sample")]
    InventoryNotFound,

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the monitor crates.
pub type Result<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_appliance_not_found() {
        let err = MonitorError::ApplianceNotFound("heladera".to_string());
        assert_eq!(err.to_string(), "Appliance not found: heladera");
    }

    #[test]
    fn test_error_display_invalid_tier() {
        let err = MonitorError::InvalidTier("ENORME".to_string());
        assert_eq!(err.to_string(), "Invalid consumption tier: ENORME");
    }

    #[test]
    fn test_error_display_invalid_dimension() {
        let err = MonitorError::InvalidDimension("color".to_string());
        assert_eq!(err.to_string(), "Invalid dimension: color");
    }

    #[test]
    fn test_error_display_invalid_record() {
        let err = MonitorError::InvalidRecord {
            name: "Plancha".to_string(),
            reason: "watts must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record 'Plancha': watts must be positive"
        );
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = MonitorError::FileRead {
            path: PathBuf::from("/some/appliances.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/appliances.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_inventory_not_found() {
        let msg = MonitorError::InventoryNotFound.to_string();
        assert!(msg.contains("--inventory"));
        assert!(msg.contains("--sample"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MonitorError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: MonitorError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
