//! Configuration system for FuzzyForge.
//!
//! Load solver configuration from TOML or YAML files to choose the joint
//! constraint type, bound the appropriateness enumeration, and select the
//! heuristic and backtracking policies without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use fuzzyforge_config::{ConsistencyType, SolverConfig};
//! use fuzzyforge_core::JointConstraintType;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     joint_constraint_type = "min"
//!     max_enumeration = 100000
//!
//!     [backtracking]
//!     consistency = "min_appropriateness"
//!     threshold = 0.25
//! "#).unwrap();
//!
//! assert_eq!(config.joint_constraint_type, JointConstraintType::Min);
//! assert_eq!(config.max_enumeration, Some(100_000));
//! assert_eq!(config.backtracking.consistency, ConsistencyType::MinAppropriateness);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use fuzzyforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("fuzzyforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use fuzzyforge_core::JointConstraintType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// How individual constraint degrees combine into a joint degree.
    #[serde(default)]
    pub joint_constraint_type: JointConstraintType,

    /// Upper bound on candidate instantiations per appropriateness query.
    #[serde(default)]
    pub max_enumeration: Option<u64>,

    /// Heuristic search configuration.
    #[serde(default)]
    pub heuristic: HeuristicConfig,

    /// Backtracking search configuration.
    #[serde(default)]
    pub backtracking: BacktrackingConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the joint constraint type.
    pub fn with_joint_constraint_type(mut self, joint_constraint_type: JointConstraintType) -> Self {
        self.joint_constraint_type = joint_constraint_type;
        self
    }

    /// Sets the enumeration bound.
    pub fn with_max_enumeration(mut self, limit: u64) -> Self {
        self.max_enumeration = Some(limit);
        self
    }

    /// Sets the zero-appropriateness policy of the heuristic search.
    pub fn with_zero_appropriateness(mut self, policy: ZeroAppropriatenessPolicy) -> Self {
        self.heuristic.zero_appropriateness = policy;
        self
    }

    /// Sets the backtracking configuration.
    pub fn with_backtracking(mut self, backtracking: BacktrackingConfig) -> Self {
        self.backtracking = backtracking;
        self
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_enumeration == Some(0) {
            return Err(ConfigError::Invalid(
                "max_enumeration must be at least 1".to_string(),
            ));
        }
        let threshold = self.backtracking.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "backtracking threshold {} is outside [0, 1]",
                threshold
            )));
        }
        Ok(())
    }
}

/// Heuristic search configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HeuristicConfig {
    /// What to do when no value of the selected variable has a nonzero
    /// appropriateness.
    #[serde(default)]
    pub zero_appropriateness: ZeroAppropriatenessPolicy,
}

/// Policy for a variable whose values all have appropriateness 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroAppropriatenessPolicy {
    /// Assign the first value of the domain.
    #[default]
    FirstValue,

    /// Stop the search with an error.
    Fail,
}

/// Backtracking search configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BacktrackingConfig {
    /// Partial-assignment consistency check.
    #[serde(default)]
    pub consistency: ConsistencyType,

    /// Appropriateness a partial assignment must exceed when
    /// `consistency = "min_appropriateness"`.
    #[serde(default)]
    pub threshold: f64,
}

/// Partial-assignment consistency check types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyType {
    /// Every partial assignment is consistent.
    #[default]
    AcceptAll,

    /// A partial assignment is consistent when its appropriateness is above
    /// the threshold.
    MinAppropriateness,
}
