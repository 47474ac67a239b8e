//! Resolver configuration with TOML file support.

use serde::{Deserialize, Serialize};

use crate::ResolveError;

/// Configuration for key-status resolution.
///
/// Can be loaded from a TOML file via [`ResolverConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Confirmations a mined purchase needs before watching stops.
    #[serde(default = "default_required_confirmations")]
    pub required_confirmations: u32,

    /// Capacity of each event hub topic channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_required_confirmations() -> u32 {
    12
}

fn default_event_capacity() -> usize {
    tollgate_events::hub::DEFAULT_CAPACITY
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ResolverConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ResolveError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ResolveError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ResolveError> {
        toml::from_str(s).map_err(|e| ResolveError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ResolverConfig is always serializable to TOML")
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            required_confirmations: default_required_confirmations(),
            event_capacity: default_event_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ResolverConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = ResolverConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.required_confirmations, config.required_confirmations);
        assert_eq!(parsed.event_capacity, config.event_capacity);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ResolverConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.required_confirmations, 12);
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            required_confirmations = 3
        "#;
        let config = ResolverConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.required_confirmations, 3);
        assert_eq!(config.event_capacity, 256); // default
    }

    #[test]
    fn config_loads_from_a_file_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tollgate.toml");
        std::fs::write(&path, "required_confirmations = 6\n").expect("write config");

        let config = ResolverConfig::from_toml_file(path.to_str().expect("utf8 path"))
            .expect("should load");
        assert_eq!(config.required_confirmations, 6);
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ResolverConfig::from_toml_file("/nonexistent/tollgate.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ResolveError::Config(_)));
    }
}
