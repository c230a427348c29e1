//! Config schema - Configuration for an oppflow store

use serde::{Deserialize, Serialize};

/// Main configuration for an oppflow store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix for generated opportunity IDs (e.g., "OPP-")
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Currency code shown next to opportunity values
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Salesperson assigned when `create` is given none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_salesperson: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_id_prefix() -> String {
    "OPP-".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            id_prefix: default_id_prefix(),
            currency: default_currency(),
            default_salesperson: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.id_prefix, "OPP-");
        assert_eq!(config.currency, "USD");
        assert!(config.default_salesperson.is_none());
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"currency": "EUR"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.currency, "EUR");
        assert_eq!(parsed.id_prefix, "OPP-");
        assert_eq!(parsed.schema_version, 1);
    }

    #[test]
    fn test_config_empty_json() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Config::default());
    }
}
