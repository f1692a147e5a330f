//! Configuration loading and config file resolution
//!
//! Configuration is bootstrap-only: it is read once at startup and controls
//! logging, report output, and the submission policy applied to validation
//! results. The brand denylist and scoring rules are compiled in and are not
//! configurable here.
//!
//! # Config File Priority
//!
//! 1. Command-line argument (highest priority)
//! 2. `STOCKMETA_CONFIG` environment variable
//! 3. Platform config file (`<config_dir>/stockmeta/config.toml`)
//! 4. Compiled defaults (fallback)
//!
//! A missing platform file is not an error. A file named explicitly (CLI or
//! environment) that cannot be loaded is.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "STOCKMETA_CONFIG";

/// Bootstrap configuration loaded from TOML file
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Report output configuration
    pub output: OutputConfig,

    /// Submission policy applied to validation results
    pub policy: PolicyConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// Indent JSON output
    pub pretty: bool,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON document per validated record
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// Submission policy
///
/// Decides whether a validation result is acceptable for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Any error-severity issue fails the record
    pub fail_on_error: bool,

    /// Minimum acceptable score (0-100), if any
    pub min_score: Option<u8>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            fail_on_error: true,
            min_score: None,
        }
    }
}

impl PolicyConfig {
    /// Check whether a score and blocking flag satisfy this policy
    pub fn accepts(&self, score: u8, has_blocking_issues: bool) -> bool {
        if self.fail_on_error && has_blocking_issues {
            return false;
        }
        match self.min_score {
            Some(min) => score >= min,
            None => true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject values the loader accepts syntactically but that make no sense
    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.policy.min_score {
            if min > 100 {
                return Err(Error::Config(format!(
                    "policy.min_score must be between 0 and 100, got {}",
                    min
                )));
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line
    CommandLine(PathBuf),
    /// Path given by `STOCKMETA_CONFIG`
    Environment(PathBuf),
    /// Platform config file
    PlatformFile(PathBuf),
    /// No file; compiled defaults
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::CommandLine(path) => write!(f, "{} (command line)", path.display()),
            ConfigSource::Environment(path) => {
                write!(f, "{} ({})", path.display(), CONFIG_ENV_VAR)
            }
            ConfigSource::PlatformFile(path) => write!(f, "{} (platform)", path.display()),
            ConfigSource::Defaults => write!(f, "compiled defaults"),
        }
    }
}

/// Effective configuration plus how it was obtained
///
/// Resolution runs before logging is initialized, so nothing is logged while
/// resolving. Call [`ResolvedConfig::log_resolution`] once a subscriber is
/// installed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: TomlConfig,
    pub source: ConfigSource,
    /// Why a platform config file was ignored, if it was
    pub fallback: Option<String>,
}

impl ResolvedConfig {
    /// Report the config source and any fallback
    pub fn log_resolution(&self) {
        if let Some(reason) = &self.fallback {
            warn!("{}, using compiled defaults", reason);
            return;
        }
        match &self.source {
            ConfigSource::Defaults => info!("No config file found, using compiled defaults"),
            source => info!("Using configuration from {}", source),
        }
    }
}

/// Config file resolver following the documented priority order
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
    env_var_name: String,
    platform_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for an optional command-line path
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self {
            cli_path,
            env_var_name: CONFIG_ENV_VAR.to_string(),
            platform_path: default_config_path(),
        }
    }

    /// Override the platform config file location
    pub fn with_platform_path(mut self, path: Option<PathBuf>) -> Self {
        self.platform_path = path;
        self
    }

    /// Determine which config source applies, without reading it
    pub fn source(&self) -> ConfigSource {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return ConfigSource::CommandLine(path.clone());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(&self.env_var_name) {
            if !path.trim().is_empty() {
                return ConfigSource::Environment(PathBuf::from(path));
            }
        }

        // Priority 3: Platform config file
        if let Some(path) = &self.platform_path {
            if path.exists() {
                return ConfigSource::PlatformFile(path.clone());
            }
        }

        // Priority 4: Compiled defaults
        ConfigSource::Defaults
    }

    /// Resolve and load the effective configuration
    ///
    /// An unusable platform file degrades to defaults with `fallback` set; an
    /// explicitly named file that cannot be loaded is an error.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let source = self.source();
        let (config, fallback) = match &source {
            ConfigSource::CommandLine(path) | ConfigSource::Environment(path) => {
                (TomlConfig::load(path)?, None)
            }
            ConfigSource::PlatformFile(path) => match TomlConfig::load(path) {
                Ok(config) => (config, None),
                Err(e) => (
                    TomlConfig::default(),
                    Some(format!(
                        "Ignoring unusable config file {}: {}",
                        path.display(),
                        e
                    )),
                ),
            },
            ConfigSource::Defaults => (TomlConfig::default(), None),
        };
        let source = if fallback.is_some() {
            ConfigSource::Defaults
        } else {
            source
        };
        Ok(ResolvedConfig {
            config,
            source,
            fallback,
        })
    }
}

/// Platform config file path (`<config_dir>/stockmeta/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stockmeta").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.policy.fail_on_error);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_sections() {
        let config = TomlConfig::from_toml_str(
            r#"
            [output]
            format = "json"

            [policy]
            min_score = 75
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
        assert_eq!(config.policy.min_score, Some(75));
        assert!(config.policy.fail_on_error);
    }

    #[test]
    fn test_min_score_out_of_range_rejected() {
        let err = TomlConfig::from_toml_str("[policy]\nmin_score = 101").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_policy_accepts() {
        let strict = PolicyConfig {
            fail_on_error: true,
            min_score: Some(80),
        };
        assert!(strict.accepts(90, false));
        assert!(!strict.accepts(90, true));
        assert!(!strict.accepts(79, false));

        let lenient = PolicyConfig {
            fail_on_error: false,
            min_score: None,
        };
        assert!(lenient.accepts(0, true));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "compiled defaults");
        assert_eq!(
            ConfigSource::Environment(PathBuf::from("/etc/stockmeta.toml")).to_string(),
            "/etc/stockmeta.toml (STOCKMETA_CONFIG)"
        );
    }
}
