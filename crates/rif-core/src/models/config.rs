//! Configuration structures for the rif pipeline.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the rif pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RifConfig {
    /// Risk-scoring thresholds used by the financial summary.
    pub risk: RiskThresholds,

    /// Output shaping defaults for the CLI.
    pub output: OutputConfig,
}

impl Default for RifConfig {
    fn default() -> Self {
        Self {
            risk: RiskThresholds::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Thresholds applied by the risk/summary post-processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Multiple of annual declared income above which movement is flagged as
    /// incompatible.
    pub income_multiple: f64,

    /// Boleto count above which the "many billed documents" indicator fires.
    pub boleto_alert_count: usize,

    /// Multiple of monthly income above which in-person deposits are flagged.
    pub cash_deposit_income_multiple: f64,

    /// Municipality count above which the multi-locality indicator fires.
    pub multi_locality_count: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            income_multiple: 3.0,
            boleto_alert_count: 5,
            cash_deposit_income_multiple: 2.0,
            multi_locality_count: 3,
        }
    }
}

/// Output shaping defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl RifConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = RiskThresholds::default();
        assert_eq!(t.income_multiple, 3.0);
        assert_eq!(t.boleto_alert_count, 5);
        assert_eq!(t.cash_deposit_income_multiple, 2.0);
        assert_eq!(t.multi_locality_count, 3);
    }

    #[test]
    fn test_partial_config_round_trip() {
        let config: RifConfig =
            serde_json::from_str(r#"{"risk": {"income_multiple": 5.0}}"#).unwrap();
        assert_eq!(config.risk.income_multiple, 5.0);
        assert_eq!(config.risk.boleto_alert_count, 5);
        assert!(config.output.pretty_json);
    }
}
