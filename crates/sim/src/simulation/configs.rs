//! Replication configuration.
//!
//! [`ReplicationConfig`] is the serializable description of a run. It can be
//! read from a JSON file and handed to
//! [`ReplicationBuilder::from_config`](super::ReplicationBuilder::from_config).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::OrganismProfile;
use crate::errors::ConfigError;
use crate::replication::DEFAULT_MAX_STEPS;

/// Organism given either by preset name or as a full profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrganismSpec {
    Preset(String),
    Custom(OrganismProfile),
}

impl OrganismSpec {
    /// Look up the preset or validate the custom profile.
    pub fn resolve(&self) -> Result<OrganismProfile, ConfigError> {
        match self {
            Self::Preset(name) => Ok(name.parse()?),
            Self::Custom(profile) => {
                profile.validate()?;
                Ok(profile.clone())
            }
        }
    }
}

impl Default for OrganismSpec {
    fn default() -> Self {
        Self::Preset("e_coli".to_string())
    }
}

impl From<OrganismProfile> for OrganismSpec {
    fn from(profile: OrganismProfile) -> Self {
        Self::Custom(profile)
    }
}

/// Parameters of one replication run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationConfig {
    #[serde(default)]
    pub organism: OrganismSpec,
    /// RNG seed for reproducible fragment sizes. Random if unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Step cap for running to completion.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    /// Bases per step. Unset means 1% of the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<i64>,
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        Self {
            organism: OrganismSpec::default(),
            seed: None,
            max_steps: DEFAULT_MAX_STEPS,
            step_size: None,
        }
    }
}

impl ReplicationConfig {
    pub fn new(organism: impl Into<OrganismSpec>) -> Self {
        Self {
            organism: organism.into(),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.organism.resolve()?;
        if self.max_steps == 0 {
            return Err(ConfigError::Validation(
                "max_steps must be greater than 0".to_string(),
            ));
        }
        if let Some(step) = self.step_size {
            if step <= 0 {
                return Err(ConfigError::Validation(format!(
                    "step_size must be positive, got {step}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = ReplicationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ReplicationConfig::default());
        assert_eq!(config.max_steps, 10_000);
        assert_eq!(config.organism.resolve().unwrap(), OrganismProfile::e_coli());
    }

    #[test]
    fn test_preset_by_name() {
        let config =
            ReplicationConfig::from_json_str(r#"{"organism": "human", "seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.organism.resolve().unwrap(), OrganismProfile::human());
    }

    #[test]
    fn test_custom_profile() {
        let json = r#"{
            "organism": {
                "name": "Drosophila",
                "class": "eukaryote",
                "polymerase_speed": 40.0,
                "fragment_size": {"min": 150, "max": 300},
                "primer_length": {"min": 5, "max": 9}
            },
            "step_size": 25
        }"#;
        let config = ReplicationConfig::from_json_str(json).unwrap();
        let profile = config.organism.resolve().unwrap();
        assert_eq!(profile.name(), "Drosophila");
        assert_eq!(profile.fragment_size().max, 300);
        assert_eq!(config.step_size, Some(25));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            ReplicationConfig::from_json_str(r#"{"organism": "martian"}"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            ReplicationConfig::from_json_str(r#"{"max_steps": 0}"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            ReplicationConfig::from_json_str(r#"{"step_size": -4}"#),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            ReplicationConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_custom_profile_is_validated() {
        let json = r#"{"organism": {
            "name": "bad", "class": "prokaryote", "polymerase_speed": -1.0,
            "fragment_size": {"min": 100, "max": 200},
            "primer_length": {"min": 3, "max": 10}
        }}"#;
        let err = ReplicationConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Polymerase speed must be positive"));
    }

    #[test]
    fn test_file_round_trip() {
        let config = ReplicationConfig::new(OrganismProfile::yeast()).with_seed(3);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json().unwrap().as_bytes()).unwrap();

        let loaded = ReplicationConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ReplicationConfig::from_file("/nonexistent/replisome.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
