use crate::analyzer::{FormatOptions, TimePolicy, DEFAULT_YEAR_FACTOR};
use crate::domain::BranchConfig;
use crate::error::{GitVersionerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gitversioner.toml";

/// Represents the complete configuration for git-versioner.
///
/// Contains the base branch candidates, version name formatting, the optional
/// time policy, CI branch name lookup and the output file location.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub time: TimeConfig,

    #[serde(default)]
    pub ci: CiConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default base branch candidates.
fn default_base_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_year_factor() -> u64 {
    DEFAULT_YEAR_FACTOR
}

/// Base branch candidates, in order of preference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    #[serde(default = "default_base_branches")]
    pub base: Vec<String>,
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            base: default_base_branches(),
        }
    }
}

/// Version name formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormatConfig {
    #[serde(default = "default_true")]
    pub add_local_changes_details: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            add_local_changes_details: true,
        }
    }
}

/// Elapsed-time component of the version code. Disabled unless configured.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TimeConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_year_factor")]
    pub year_factor: u64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            enabled: false,
            year_factor: DEFAULT_YEAR_FACTOR,
        }
    }
}

/// Environment variables that carry the branch name on detached CI checkouts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CiConfig {
    #[serde(default)]
    pub branch_env_vars: Vec<String>,
}

/// Machine-readable output file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn branch_config(&self) -> BranchConfig {
        BranchConfig::new(self.branches.base.iter().cloned())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            add_local_changes_details: self.format.add_local_changes_details,
        }
    }

    pub fn time_policy(&self) -> TimePolicy {
        TimePolicy {
            enabled: self.time.enabled,
            year_factor: self.time.year_factor,
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| GitVersionerError::config(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.time.enabled && self.time.year_factor == 0 {
            return Err(GitVersionerError::config(
                "time.year_factor must be greater than 0 when time.enabled is set",
            ));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversioner.toml` in current directory
/// 3. `.gitversioner.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            GitVersionerError::config(format!("cannot read {}: {}", path.display(), e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
