use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Inventory file name looked for during discovery.
const INVENTORY_FILE: &str = "appliances.json";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` accepts the conventional uppercase level names and is mapped
/// to a [`tracing_subscriber::EnvFilter`] directive, falling back to `"info"`
/// when the string is not recognised. With `log_file` set, output is
/// appended there instead of stderr.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let level_upper = log_level.to_uppercase();
    let directive = match level_upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Arc::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer().with_target(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

// ── Inventory discovery ────────────────────────────────────────────────────────

/// Attempt to locate an inventory file on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./appliances.json`
/// 2. `~/.consumo-monitor/appliances.json`
///
/// Returns `None` when neither path exists.
pub fn discover_inventory() -> Option<PathBuf> {
    discover_inventory_in(Path::new("."), dirs::home_dir())
}

/// Discovery rooted at explicit directories (used for testing).
pub fn discover_inventory_in(cwd: &Path, home: Option<PathBuf>) -> Option<PathBuf> {
    let mut candidates = vec![cwd.join(INVENTORY_FILE)];
    if let Some(home) = home {
        candidates.push(home.join(".consumo-monitor").join(INVENTORY_FILE));
    }
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_inventory_returns_none_when_absent() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        let path = discover_inventory_in(cwd.path(), Some(home.path().to_path_buf()));
        assert!(path.is_none(), "should return None when neither path exists");
    }

    #[test]
    fn test_discover_inventory_prefers_working_directory() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");

        let local = cwd.path().join(INVENTORY_FILE);
        std::fs::write(&local, "[]").expect("write local inventory");

        let monitor_dir = home.path().join(".consumo-monitor");
        std::fs::create_dir_all(&monitor_dir).expect("create monitor dir");
        std::fs::write(monitor_dir.join(INVENTORY_FILE), "[]").expect("write home inventory");

        let path = discover_inventory_in(cwd.path(), Some(home.path().to_path_buf()));
        assert_eq!(path, Some(local));
    }

    #[test]
    fn test_discover_inventory_falls_back_to_home() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");

        let monitor_dir = home.path().join(".consumo-monitor");
        std::fs::create_dir_all(&monitor_dir).expect("create monitor dir");
        let expected = monitor_dir.join(INVENTORY_FILE);
        std::fs::write(&expected, "[]").expect("write home inventory");

        let path = discover_inventory_in(cwd.path(), Some(home.path().to_path_buf()));
        assert_eq!(path, Some(expected));
    }

    #[test]
    fn test_discover_inventory_without_home() {
        let cwd = TempDir::new().expect("tempdir");
        let path = discover_inventory_in(cwd.path(), None);
        assert!(path.is_none());
    }
}
