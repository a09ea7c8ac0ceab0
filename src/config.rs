//! Model Configuration
//!
//! Hyper-parameters of the random forest classifier and of the regression
//! tree, readable from and writable to JSON.
use crate::errors::SaplingError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_n_estimators() -> usize {
    100
}
fn default_max_depth() -> Option<usize> {
    None
}
fn default_seed() -> u64 {
    0
}
fn default_log_iterations() -> usize {
    0
}
fn default_min_samples_split() -> usize {
    1
}

/// Configuration for the `RandomForestClassifier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of bootstrapped trees.
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,
    /// Depth limit of every tree, `None` grows until leaves are pure.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Seed of the bootstrap draws, tree `i` samples with `seed + i`.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Logging frequency (every N trees), zero disables logging.
    #[serde(default = "default_log_iterations")]
    pub log_iterations: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        ForestConfig {
            n_estimators: default_n_estimators(),
            max_depth: default_max_depth(),
            seed: default_seed(),
            log_iterations: default_log_iterations(),
        }
    }
}

impl ForestConfig {
    pub fn validate(&self) -> Result<(), SaplingError> {
        if self.n_estimators == 0 {
            return Err(SaplingError::InvalidParameter(
                "n_estimators".to_string(),
                "a positive integer".to_string(),
                self.n_estimators.to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the `DecisionTreeRegressor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressorConfig {
    /// Depth limit, the root counts as depth 1.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Children with this many rows or fewer become leaves.
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    /// Log a summary of the fitted tree.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for RegressorConfig {
    fn default() -> Self {
        RegressorConfig {
            max_depth: default_max_depth(),
            min_samples_split: default_min_samples_split(),
            verbose: false,
        }
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), SaplingError> {
        fs::write(path, self.json_dump()?).map_err(|e| SaplingError::UnableToParseConfig(e.to_string()))
    }

    /// Dump a configuration as a json object.
    fn json_dump(&self) -> Result<String, SaplingError> {
        serde_json::to_string(self).map_err(|e| SaplingError::UnableToParseConfig(e.to_string()))
    }

    /// Load a configuration from a json string, missing fields take their defaults.
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    fn from_json(json_str: &str) -> Result<Self, SaplingError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| SaplingError::UnableToParseConfig(e.to_string()))
    }

    /// Load a configuration from a path to a json file.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, SaplingError> {
        let json_str = fs::read_to_string(path).map_err(|e| SaplingError::UnableToParseConfig(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for ForestConfig {}
impl ConfigIO for RegressorConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_forest_config_default() {
        let config = ForestConfig::default();
        assert_eq!(config.n_estimators, 100);
        assert_eq!(config.max_depth, None);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_forest_config_validate() {
        let config = ForestConfig {
            n_estimators: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SaplingError::InvalidParameter(..))));
    }

    #[test]
    fn test_config_io_json() {
        let config = ForestConfig {
            n_estimators: 7,
            max_depth: Some(3),
            seed: 11,
            log_iterations: 1,
        };
        let json = config.json_dump().unwrap();
        assert_eq!(ForestConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_partial_json() {
        let config = ForestConfig::from_json(r#"{"n_estimators": 5}"#).unwrap();
        assert_eq!(config.n_estimators, 5);
        assert_eq!(config.max_depth, None);

        let config = RegressorConfig::from_json(r#"{"max_depth": 2}"#).unwrap();
        assert_eq!(config.max_depth, Some(2));
        assert_eq!(config.min_samples_split, 1);
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_bad_json() {
        let res = RegressorConfig::from_json(r#"{"min_samples_split": "many"}"#);
        assert!(matches!(res, Err(SaplingError::UnableToParseConfig(_))));
    }

    #[test]
    fn test_config_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("regressor.json");
        let config = RegressorConfig {
            max_depth: Some(4),
            min_samples_split: 3,
            verbose: true,
        };
        config.save_config(&file_path).unwrap();
        assert_eq!(RegressorConfig::load_config(&file_path).unwrap(), config);
        assert!(RegressorConfig::load_config(dir.path().join("missing.json")).is_err());
    }
}
