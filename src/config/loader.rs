//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{OppflowError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the store, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
///
/// # Errors
/// * `Wrapped` - If config.json is unreadable, with the file path as context
/// * `ConfigError` - If config.json sets an empty `id_prefix`
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root).map_err(|e| {
        let path = fs::get_config_path(root);
        OppflowError::wrap(e, format!("Failed to load config {}", path.display()))
    })?;

    if config.id_prefix.trim().is_empty() {
        return Err(OppflowError::ConfigError("id_prefix must not be empty".to_string()));
    }

    tracing::debug!(currency = %config.currency, id_prefix = %config.id_prefix, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join(".oppflow")).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.id_prefix, "OPP-");
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let store_dir = temp.path().join(".oppflow");
        std_fs::create_dir(&store_dir).unwrap();

        let config_content = r#"{
            "id_prefix": "DEAL-",
            "default_salesperson": "Dana"
        }"#;
        std_fs::write(store_dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.id_prefix, "DEAL-");
        assert_eq!(config.default_salesperson.as_deref(), Some("Dana"));
        // Default for unspecified field
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_load_config_rejects_empty_prefix() {
        let temp = TempDir::new().unwrap();
        let store_dir = temp.path().join(".oppflow");
        std_fs::create_dir(&store_dir).unwrap();
        std_fs::write(store_dir.join("config.json"), r#"{"id_prefix": " "}"#).unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_config_invalid_json() {
        let temp = TempDir::new().unwrap();
        let store_dir = temp.path().join(".oppflow");
        std_fs::create_dir(&store_dir).unwrap();
        std_fs::write(store_dir.join("config.json"), "{ nope").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "WRAPPED_ERROR");
        assert!(err.to_string().starts_with("Failed to load config"));
        assert!(err.to_string().contains("config.json"));
        assert!(err.to_string().contains("Invalid JSON"));
    }
}
