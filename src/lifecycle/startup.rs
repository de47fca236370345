//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the registry once
//! - Hand out a Runtime only after the registry exists
//!
//! # Design Decisions
//! - Never fatal: a config failure is logged and yields an empty registry
//! - Configuration is read before logging starts (it carries the log level),
//!   so load errors are kept and reported once the subscriber is installed

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{load_config, ConfigError, ShortcutConfig};
use crate::host::Runtime;
use crate::registry::ShortcutRegistry;

/// Result of reading the configuration file.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: ShortcutConfig,
    pub error: Option<ConfigError>,
}

/// Read configuration, falling back to defaults (no shortcuts) on failure.
pub fn read_config(path: &Path) -> LoadedConfig {
    match load_config(path) {
        Ok(config) => LoadedConfig {
            path: path.to_path_buf(),
            config,
            error: None,
        },
        Err(e) => LoadedConfig {
            path: path.to_path_buf(),
            config: ShortcutConfig::default(),
            error: Some(e),
        },
    }
}

/// Build the registry from loaded configuration.
pub fn build_registry(loaded: &LoadedConfig) -> Arc<ShortcutRegistry> {
    if let Some(e) = &loaded.error {
        tracing::error!(
            path = %loaded.path.display(),
            error = %e,
            "Failed to load shortcuts, continuing with an empty registry"
        );
    }
    Arc::new(ShortcutRegistry::from_config(&loaded.config))
}

/// Build the registry, then the runtime that consumes events.
pub fn start(loaded: &LoadedConfig) -> Runtime {
    let registry = build_registry(loaded);
    Runtime::new(registry, &loaded.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_config_degrades_to_empty() {
        let loaded = read_config(Path::new("/nonexistent/shortcuts.json"));
        assert!(matches!(loaded.error, Some(ConfigError::Io(_))));

        let runtime = start(&loaded);
        assert!(runtime.engine().registry().is_empty());
        assert!(!runtime.engine().resolve_typed_text("anything").matched());
    }

    #[test]
    fn test_invalid_config_degrades_to_empty() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "shortcuts": [ {{ "shortcut": "news", "url": "https://news.example" }} ] }}"#).unwrap();

        let loaded = read_config(file.path());
        assert!(matches!(loaded.error, Some(ConfigError::Validation(_))));
        assert!(start(&loaded).engine().registry().is_empty());
    }

    #[test]
    fn test_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[[shortcuts]]\nshortcut = \"@news\"\nurl = \"https://news.example\"\n"
        )
        .unwrap();

        let loaded = read_config(file.path());
        assert!(loaded.error.is_none());
        let runtime = start(&loaded);
        assert_eq!(runtime.engine().registry().len(), 1);
    }
}
