//! Simulation engine configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `BLOCH_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Hard ceiling on `max_qubits`: 2^30 amplitudes is 16 GiB.
pub const QUBIT_CEILING: u32 = bloch_ir::MAX_QUBITS;

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Repetitions used when a request does not specify any.
    #[serde(default = "default_shots")]
    pub default_shots: u32,

    /// Widest circuit the engine will simulate.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,

    /// Fixed RNG seed. Unset means fresh entropy per request.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Allowed deviation of |ψ|² from 1 after each gate.
    #[serde(default = "default_normalization_tolerance")]
    pub normalization_tolerance: f64,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_shots() -> u32 {
    500
}

fn default_max_qubits() -> u32 {
    20
}

fn default_normalization_tolerance() -> f64 {
    1e-9
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            default_shots: default_shots(),
            max_qubits: default_max_qubits(),
            seed: None,
            normalization_tolerance: default_normalization_tolerance(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.as_ref().display())))?;

        let config: SimConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults.
    pub fn from_env() -> Self {
        SimConfig::default().merge_env()
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    ///
    /// Unparseable environment values are logged as warnings and ignored.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::load_with_ignored(config_file)?;
        for var in &ignored {
            warn!("{var}");
        }
        Ok(config)
    }

    /// Like [`load`](Self::load), returning the ignored environment values
    /// instead of logging them.
    ///
    /// Useful when logging is configured from the loaded values and no
    /// subscriber exists yet.
    pub fn load_with_ignored(
        config_file: Option<&Path>,
    ) -> Result<(Self, Vec<IgnoredVar>), ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => SimConfig::default(),
        };

        let (config, ignored) = config.merge_vars(|key| std::env::var(key).ok());
        config.validate()?;
        Ok((config, ignored))
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that are set override the current values. Unparseable
    /// values are logged and ignored.
    pub fn merge_env(self) -> Self {
        let (config, ignored) = self.merge_vars(|key| std::env::var(key).ok());
        for var in &ignored {
            warn!("{var}");
        }
        config
    }

    pub(crate) fn merge_vars(
        mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<IgnoredVar>) {
        let mut ignored = Vec::new();
        if let Some(val) = parse_var(&var, "BLOCH_DEFAULT_SHOTS", &mut ignored) {
            self.default_shots = val;
        }
        if let Some(val) = parse_var(&var, "BLOCH_MAX_QUBITS", &mut ignored) {
            self.max_qubits = val;
        }
        if let Some(val) = parse_var(&var, "BLOCH_SEED", &mut ignored) {
            self.seed = Some(val);
        }
        if let Some(val) = parse_var(&var, "BLOCH_NORMALIZATION_TOLERANCE", &mut ignored) {
            self.normalization_tolerance = val;
        }
        if let Some(v) = var("BLOCH_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = var("BLOCH_LOG_FORMAT") {
            self.logging.format = v;
        }
        (self, ignored)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_shots == 0 {
            return Err(ConfigError::ValidationError(
                "default_shots must be greater than 0".to_string(),
            ));
        }

        if self.max_qubits == 0 || self.max_qubits > QUBIT_CEILING {
            return Err(ConfigError::ValidationError(format!(
                "max_qubits must be between 1 and {QUBIT_CEILING}, got {}",
                self.max_qubits
            )));
        }

        if !self.normalization_tolerance.is_finite() || self.normalization_tolerance <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "normalization_tolerance must be a positive number, got {}",
                self.normalization_tolerance
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// An environment override whose value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredVar {
    /// Variable name, e.g. `BLOCH_SEED`.
    pub key: &'static str,
    /// The raw value that failed to parse.
    pub value: String,
}

impl fmt::Display for IgnoredVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ignoring invalid {}: {}", self.key, self.value)
    }
}

fn parse_var<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    ignored: &mut Vec<IgnoredVar>,
) -> Option<T> {
    let value = var(key)?;
    match value.parse() {
        Ok(val) => Some(val),
        Err(_) => {
            ignored.push(IgnoredVar { key, value });
            None
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
