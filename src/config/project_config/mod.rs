//! Project-level configuration support
//!
//! Loads per-project configuration from `codescope.toml`.
//!
//! # Configuration Format
//!
//! ```toml
//! # codescope.toml
//!
//! [quality]
//! complexity_threshold = 20
//! max_parameters = 5
//!
//! [security]
//! large_file_lines = 1000
//! weights = { sql_injection = 30 }
//!
//! [defaults]
//! format = "json"
//! language = "python"
//! ```
//!
//! Every value is optional. Defaults reproduce the built-in scoring rules.

use crate::models::VulnerabilityType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "codescope.toml";

/// Errors that can occur while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Project-level configuration loaded from codescope.toml
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Quality scorer thresholds and deductions
    #[serde(default)]
    pub quality: QualityConfig,

    /// Security scanner weights
    #[serde(default)]
    pub security: SecurityConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Thresholds and deductions for the quality scorer
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QualityConfig {
    /// Complexity above this costs `complexity_penalty` (default: 20)
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: usize,

    #[serde(default = "default_complexity_penalty")]
    pub complexity_penalty: u32,

    #[serde(default = "default_documentation_penalty")]
    pub documentation_penalty: u32,

    /// Functions with more parameters than this are flagged (default: 5)
    #[serde(default = "default_max_parameters")]
    pub max_parameters: usize,

    #[serde(default = "default_parameter_penalty")]
    pub parameter_penalty: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            complexity_penalty: default_complexity_penalty(),
            documentation_penalty: default_documentation_penalty(),
            max_parameters: default_max_parameters(),
            parameter_penalty: default_parameter_penalty(),
        }
    }
}

fn default_complexity_threshold() -> usize {
    20
}
fn default_complexity_penalty() -> u32 {
    20
}
fn default_documentation_penalty() -> u32 {
    10
}
fn default_max_parameters() -> usize {
    5
}
fn default_parameter_penalty() -> u32 {
    15
}

/// Weights and size penalty for the security score
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SecurityConfig {
    /// Files longer than this get an extra `lines / 100` deduction (default: 1000)
    #[serde(default = "default_large_file_lines")]
    pub large_file_lines: usize,

    /// Per-type deduction overrides
    #[serde(default)]
    pub weights: HashMap<VulnerabilityType, u32>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            large_file_lines: default_large_file_lines(),
            weights: HashMap::new(),
        }
    }
}

fn default_large_file_lines() -> usize {
    1000
}

impl SecurityConfig {
    /// Deduction for one finding of `vulnerability_type`
    pub fn weight(&self, vulnerability_type: VulnerabilityType) -> u32 {
        self.weights
            .get(&vulnerability_type)
            .copied()
            .unwrap_or_else(|| vulnerability_type.default_weight())
    }
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Language to assume when the file extension is not recognized
    #[serde(default)]
    pub language: Option<String>,
}

/// Load project configuration from `dir/codescope.toml`.
///
/// Returns defaults when the file is missing or invalid.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if !toml_path.exists() {
        debug!("No project config found, using defaults");
        return ProjectConfig::default();
    }

    match load_config_file(&toml_path) {
        Ok(config) => {
            debug!("Loaded project config from {}", toml_path.display());
            config
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            ProjectConfig::default()
        }
    }
}

/// Load configuration from an explicit TOML file
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(content: &str) -> Result<ProjectConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Commented example written by `codescope init`
pub fn example_config() -> &'static str {
    r#"# codescope configuration

[quality]
# Complexity (functions + classes) above this lowers the quality score
complexity_threshold = 20
complexity_penalty = 20

# Deducted when there are fewer comments than functions / 3 (minimum 1)
documentation_penalty = 10

# Functions with more parameters than this are flagged
max_parameters = 5
parameter_penalty = 15

[security]
# Files longer than this lose an extra lines/100 points
large_file_lines = 1000

# Per-finding deductions (defaults shown)
# weights = { sql_injection = 25, xss = 20, hardcoded_secrets = 15, insecure_crypto = 15, path_traversal = 20 }

[defaults]
# Default output format (text, json)
format = "text"

# Language for files with unrecognized extensions
# language = "python"
"#
}
