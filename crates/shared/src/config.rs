//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::DEFAULT_TOLERANCE;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Settlement configuration.
    #[serde(default)]
    pub settlement: SettlementConfig,
    /// Data source configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Settlement configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementConfig {
    /// Balances at or below this magnitude are treated as settled.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
    /// Decimal places used when presenting amounts.
    #[serde(default = "default_display_scale")]
    pub display_scale: u32,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            display_scale: default_display_scale(),
        }
    }
}

fn default_tolerance() -> Decimal {
    DEFAULT_TOLERANCE
}

fn default_display_scale() -> u32 {
    2
}

/// Data source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON household snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "data/household.json".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "TALLY__SETTLEMENT__TOLERANCE",
                "TALLY__SETTLEMENT__DISPLAY_SCALE",
                "TALLY__DATA__SNAPSHOT_PATH",
                "TALLY__LOG__FORMAT",
            ],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.settlement.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.settlement.display_scale, 2);
        assert_eq!(config.data.snapshot_path, "data/household.json");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                ("TALLY__SETTLEMENT__TOLERANCE", Some("0.001")),
                ("TALLY__SETTLEMENT__DISPLAY_SCALE", Some("4")),
                ("TALLY__DATA__SNAPSHOT_PATH", Some("/tmp/house.json")),
                ("TALLY__LOG__FORMAT", Some("json")),
            ],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.settlement.tolerance, dec!(0.001));
        assert_eq!(config.settlement.display_scale, 4);
        assert_eq!(config.data.snapshot_path, "/tmp/house.json");
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
