//! Configuration module for codescope
//!
//! This module handles:
//! - Project-level configuration (codescope.toml)
//! - Quality and security scoring overrides
//! - CLI defaults

mod project_config;

pub use project_config::{
    example_config, load_config_file, load_project_config, CliDefaults, ConfigError,
    ProjectConfig, QualityConfig, SecurityConfig, CONFIG_FILE_NAME,
};
