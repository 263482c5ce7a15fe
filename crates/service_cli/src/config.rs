//! Simulation configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use copula_core::types::CopulaError;
use copula_models::correlation::{CholeskyFactor, CovarianceMatrix};
use copula_models::{make_growth_model, make_margin_model, GrowthModel, MarginModel};
use copula_sampling::CopulaConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "COPULA_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid simulation parameters: {0}")]
    Invalid(#[from] CopulaError),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Simulation parameters
///
/// Field names double as TOML keys; `COPULA_<FIELD>` (upper case) are the
/// environment overrides.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of sample rows
    pub n: usize,
    /// Latent correlation between growth and margin
    pub rho: f64,
    /// Random seed
    pub seed: u64,
    /// Mean of ln(1 + growth)
    pub mu_g: f64,
    /// Standard deviation of ln(1 + growth)
    pub sigma_g: f64,
    /// Mean of the margin
    pub m_mean: f64,
    /// Variance of the margin
    pub m_var: f64,
    /// Default log level (RUST_LOG takes precedence)
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n: 100_000,
            rho: 0.4,
            seed: 7,
            mu_g: 0.04,
            sigma_g: 0.08,
            m_mean: 0.30,
            m_var: 0.015,
            log_level: LogLevel::Info,
        }
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvError(format!(
            "{}{} has invalid value '{}'",
            ENV_PREFIX, name, value
        ))
    })
}

impl SimulationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `lookup`, which maps a full variable name
    /// (e.g. `COPULA_RHO`) to its value
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(v) = get("N") {
            self.n = parse_env("N", &v)?;
        }
        if let Some(v) = get("RHO") {
            self.rho = parse_env("RHO", &v)?;
        }
        if let Some(v) = get("SEED") {
            self.seed = parse_env("SEED", &v)?;
        }
        if let Some(v) = get("MU_G") {
            self.mu_g = parse_env("MU_G", &v)?;
        }
        if let Some(v) = get("SIGMA_G") {
            self.sigma_g = parse_env("SIGMA_G", &v)?;
        }
        if let Some(v) = get("M_MEAN") {
            self.m_mean = parse_env("M_MEAN", &v)?;
        }
        if let Some(v) = get("M_VAR") {
            self.m_var = parse_env("M_VAR", &v)?;
        }
        if let Some(v) = get("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&v)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(n) = cli.n {
            self.n = n;
        }
        if let Some(rho) = cli.rho {
            self.rho = rho;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(mu_g) = cli.mu_g {
            self.mu_g = mu_g;
        }
        if let Some(sigma_g) = cli.sigma_g {
            self.sigma_g = sigma_g;
        }
        if let Some(m_mean) = cli.m_mean {
            self.m_mean = m_mean;
        }
        if let Some(m_var) = cli.m_var {
            self.m_var = m_var;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }

    /// Validate every parameter by building the structures it feeds
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.copula_config()?;
        self.correlation_factor()?;
        self.growth_model()?;
        self.margin_model()?;
        Ok(())
    }

    /// Sampling configuration (row count and seed)
    pub fn copula_config(&self) -> Result<CopulaConfig, CopulaError> {
        CopulaConfig::builder()
            .n_samples(self.n)
            .seed(self.seed)
            .build()
    }

    /// Bivariate latent correlation matrix
    pub fn correlation_matrix(&self) -> CovarianceMatrix {
        CovarianceMatrix::bivariate(self.rho)
    }

    /// Validated Cholesky factor of the correlation matrix
    pub fn correlation_factor(&self) -> Result<CholeskyFactor, CopulaError> {
        self.correlation_matrix().cholesky()
    }

    /// Growth marginal
    pub fn growth_model(&self) -> Result<GrowthModel, CopulaError> {
        make_growth_model(self.mu_g, self.sigma_g)
    }

    /// Margin marginal
    pub fn margin_model(&self) -> Result<MarginModel, CopulaError> {
        make_margin_model(self.m_mean, self.m_var)
    }
}

/// Parameter overrides shared by all subcommands
#[derive(Debug, Clone, Default, Args)]
pub struct CliArgs {
    /// TOML configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Number of samples [default: 100000]
    #[arg(long)]
    pub n: Option<usize>,

    /// Latent correlation between growth and margin [default: 0.4]
    #[arg(long, allow_hyphen_values = true)]
    pub rho: Option<f64>,

    /// Random seed [default: 7]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mean of ln(1 + growth) [default: 0.04]
    #[arg(long, allow_hyphen_values = true)]
    pub mu_g: Option<f64>,

    /// Standard deviation of ln(1 + growth) [default: 0.08]
    #[arg(long)]
    pub sigma_g: Option<f64>,

    /// Margin mean [default: 0.30]
    #[arg(long)]
    pub m_mean: Option<f64>,

    /// Margin variance [default: 0.015]
    #[arg(long)]
    pub m_var: Option<f64>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<SimulationConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<SimulationConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
