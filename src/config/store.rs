use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::cost_model::{CostModel, CostModelError};
use crate::core::types::Cost;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read cost configuration: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse cost configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid symbol key {0:?}: keys must be a single ASCII character")]
    InvalidSymbol(String),

    #[error("Invalid cost model: {0}")]
    Model(#[from] CostModelError),
}

/// Configuration version for compatibility checking
pub const CONFIG_VERSION: &str = "1.0.0";

/// Serializable cost configuration.
///
/// `substitution[a][b]` is the cost of aligning `a` from the first sequence
/// against `b` from the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostConfig {
    pub version: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    pub gap: BTreeMap<String, Cost>,

    pub substitution: BTreeMap<String, BTreeMap<String, Cost>>,
}

impl CostConfig {
    /// The reference configuration compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the embedded JSON is malformed
    /// (checked at build time by `build.rs`).
    pub fn embedded() -> Result<Self, ConfigError> {
        const EMBEDDED_CONFIG: &str = include_str!("../../configs/reference_costs.json");
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read or
    /// `ConfigError::ParseError` if it is not a valid configuration.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the JSON does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if config.version != CONFIG_VERSION {
            warn!(
                "Cost configuration version mismatch (expected {}, found {})",
                CONFIG_VERSION, config.version
            );
        }

        Ok(config)
    }

    /// Build the lookup model described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSymbol` for keys that are not a single
    /// ASCII character, or `ConfigError::Model` if the tables are incomplete.
    pub fn to_model(&self) -> Result<CostModel, ConfigError> {
        let gap = self
            .gap
            .iter()
            .map(|(k, &c)| Ok((parse_symbol(k)?, c)))
            .collect::<Result<BTreeMap<u8, Cost>, ConfigError>>()?;

        let mut substitution = BTreeMap::new();
        for (a, row) in &self.substitution {
            let row = row
                .iter()
                .map(|(k, &c)| Ok((parse_symbol(k)?, c)))
                .collect::<Result<BTreeMap<u8, Cost>, ConfigError>>()?;
            substitution.insert(parse_symbol(a)?, row);
        }

        Ok(CostModel::from_tables(&gap, &substitution)?)
    }

    /// Describe an existing model as a configuration
    #[must_use]
    pub fn from_model(name: impl Into<String>, model: &CostModel) -> Self {
        let key = |s: u8| char::from(s).to_string();
        Self {
            version: CONFIG_VERSION.to_string(),
            name: name.into(),
            created_at: None,
            gap: model
                .gap_table()
                .into_iter()
                .map(|(s, c)| (key(s), c))
                .collect(),
            substitution: model
                .substitution_table()
                .into_iter()
                .map(|(a, row)| (key(a), row.into_iter().map(|(b, c)| (key(b), c)).collect()))
                .collect(),
        }
    }

    /// Export to pretty JSON, stamping the creation time
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let data = Self {
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            ..self.clone()
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

/// Decode a configuration key into a symbol
fn parse_symbol(key: &str) -> Result<u8, ConfigError> {
    match key.as_bytes() {
        [b] if b.is_ascii() && !b.is_ascii_control() => Ok(*b),
        _ => Err(ConfigError::InvalidSymbol(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_config() {
        let config = CostConfig::embedded().unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.name, "reference");

        let model = config.to_model().unwrap();
        assert_eq!(model.alphabet(), b"ACGT");
        assert_eq!(model.gap_cost(b'T'), Ok(2));
        assert_eq!(model.gap_cost(b'C'), Ok(3));
        assert_eq!(model.substitution_cost(b'T', b'G'), Ok(9));
        assert_eq!(model.substitution_cost(b'G', b'A'), Ok(5));
        assert!(model.is_symmetric());
    }

    #[test]
    fn test_round_trip_through_json() {
        let model = CostConfig::embedded().unwrap().to_model().unwrap();
        let json = CostConfig::from_model("copy", &model).to_json().unwrap();

        assert!(json.contains("\"created_at\""));
        let reloaded = CostConfig::from_json(&json).unwrap();
        assert_eq!(reloaded.name, "copy");
        assert_eq!(reloaded.to_model().unwrap(), model);
    }

    #[test]
    fn test_rejects_multi_character_key() {
        let json = r#"{"version": "1.0.0", "gap": {"AT": 1}, "substitution": {}}"#;
        let err = CostConfig::from_json(json).unwrap().to_model().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSymbol(k) if k == "AT"));
    }

    #[test]
    fn test_rejects_incomplete_substitution() {
        let json = r#"{
            "version": "1.0.0",
            "gap": {"A": 1, "C": 1},
            "substitution": {"A": {"A": 0, "C": 1}}
        }"#;
        let err = CostConfig::from_json(json).unwrap().to_model().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Model(CostModelError::MissingSubstitution('C', 'A'))
        ));
    }

    #[test]
    fn test_rejects_gap_marker_symbol() {
        let json = r#"{
            "version": "1.0.0",
            "gap": {"-": 1},
            "substitution": {"-": {"-": 0}}
        }"#;
        let err = CostConfig::from_json(json).unwrap().to_model().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Model(CostModelError::GapInAlphabet('-'))
        ));
    }

    #[test]
    fn test_version_mismatch_still_loads() {
        let json = r#"{"version": "0.9", "gap": {"A": 1}, "substitution": {"A": {"A": 0}}}"#;
        let config = CostConfig::from_json(json).unwrap();
        assert_eq!(config.to_model().unwrap().alphabet(), b"A");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CostConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
