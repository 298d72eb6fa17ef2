use crate::error::LabelError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Separator placed between label fragments
pub const SEPARATOR: &str = ", ";
/// Label used when no fragment could be built
pub const UNKNOWN_LABEL: &str = "unknown";
/// Allowed height difference when snapping to a canonical resolution
pub const RESOLUTION_TOLERANCE: u32 = 15;
/// Audio bitrate above which the track is assumed to be 5.1
pub const SURROUND_BITRATE_THRESHOLD: u64 = 300_000;

/// Label building configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Text placed between fragments
    pub separator: String,
    /// Label returned when every fragment is empty
    pub unknown_label: String,
    /// Height tolerance in pixels for canonical resolution lookup
    pub resolution_tolerance: u32,
    /// Bits per second above which audio gets the "5.1" hint
    pub surround_bitrate_threshold: u64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            separator: SEPARATOR.to_string(),
            unknown_label: UNKNOWN_LABEL.to_string(),
            resolution_tolerance: RESOLUTION_TOLERANCE,
            surround_bitrate_threshold: SURROUND_BITRATE_THRESHOLD,
        }
    }
}

impl LabelConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, LabelError> {
        let config: LabelConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, or fall back to defaults
    pub fn load(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => {
                info!("Loaded label config: {:?}", config);
                config
            }
            Err(e) => {
                warn!("Failed to load label config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String, LabelError> {
        toml::to_string_pretty(self)
            .map_err(|e| LabelError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.separator.is_empty() {
            return Err(LabelError::Config("separator must not be empty".to_string()));
        }
        if self.unknown_label.is_empty() {
            return Err(LabelError::Config(
                "unknown_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabelConfig::default();
        assert_eq!(config.separator, ", ");
        assert_eq!(config.unknown_label, "unknown");
        assert_eq!(config.resolution_tolerance, 15);
        assert_eq!(config.surround_bitrate_threshold, 300_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = LabelConfig::from_toml_str("separator = \" | \"\n").unwrap();
        assert_eq!(config.separator, " | ");
        assert_eq!(config.unknown_label, "unknown");
        assert_eq!(config.resolution_tolerance, 15);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LabelConfig::from_toml_str("").unwrap(), LabelConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = LabelConfig::from_toml_str("separator = \"\"").unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));

        let err = LabelConfig::from_toml_str("unknown_label = \"\"").unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LabelConfig::from_toml_str("resolution_tolerance = \"wide\"").unwrap_err();
        assert!(matches!(err, LabelError::Toml(_)));
    }

    #[test]
    fn test_load_falls_back() {
        assert_eq!(LabelConfig::load("separator = 3"), LabelConfig::default());
        assert_eq!(
            LabelConfig::load("resolution_tolerance = 20").resolution_tolerance,
            20
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LabelConfig {
            separator: " / ".to_string(),
            ..LabelConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(LabelConfig::from_toml_str(&text).unwrap(), config);
    }
}
