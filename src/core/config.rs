//! Configuration module for Campus Records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the records CSV files
    #[serde(default)]
    pub data_dir: String,
    /// Directory receiving timestamped backups
    #[serde(default)]
    pub backup_dir: String,
}

/// Enrollment limits configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum credits a student may hold per semester
    #[serde(default = "default_max_credits")]
    pub max_credits_per_semester: u32,
}

const fn default_max_credits() -> u32 {
    18
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_credits_per_semester: default_max_credits(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Enrollment limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override backup directory
    pub backup_dir: Option<String>,
    /// Override per-semester credit cap
    pub max_credits: Option<u32>,
}

impl Config {
    /// Get the `$CAMPUS_RECORDS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusrecords`
    /// - macOS: `~/Library/Application Support/campusrecords`
    /// - Windows: `%APPDATA%\campusrecords`
    #[must_use]
    pub fn get_campusrecords_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusrecords")
    }

    /// Merge missing fields from defaults into this config.
    ///
    /// Used on load so that fields added in newer versions pick up their
    /// defaults without clobbering existing user settings. Returns `true`
    /// if anything changed.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_dir.is_empty() && !defaults.paths.data_dir.is_empty() {
            self.paths.data_dir.clone_from(&defaults.paths.data_dir);
            changed = true;
        }
        if self.paths.backup_dir.is_empty() && !defaults.paths.backup_dir.is_empty() {
            self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration.
    ///
    /// Only non-`None` values replace config values; the config file on
    /// disk is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(backup_dir) = &overrides.backup_dir {
            self.paths.backup_dir.clone_from(backup_dir);
        }
        if let Some(max_credits) = overrides.max_credits {
            self.limits.max_credits_per_semester = max_credits;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside the directory returned by [`get_campusrecords_dir`].
    ///
    /// [`get_campusrecords_dir`]: Self::get_campusrecords_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campusrecords_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CAMPUS_RECORDS` in a string to the actual config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CAMPUS_RECORDS") {
            let dir = Self::get_campusrecords_dir();
            value.replace("$CAMPUS_RECORDS", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string, expanding `$CAMPUS_RECORDS`
    /// in path-valued fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.backup_dir = Self::expand_variables(&config.paths.backup_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default configuration is invalid TOML, which
    /// cannot happen for a correctly built binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found.
    ///
    /// On first run the config directory and file are created from the
    /// embedded defaults. An existing file is merged with defaults so new
    /// fields appear after an upgrade. Falls back to defaults on any load
    /// error.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file.
    ///
    /// # Errors
    ///
    /// Returns an error when the config cannot be serialized or the
    /// directory/file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key.
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`,
    /// `backup_dir`, `max_credits`. Returns `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "backup_dir" | "backup-dir" => Some(self.paths.backup_dir.clone()),
            "max_credits" | "max-credits" => {
                Some(self.limits.max_credits_per_semester.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key.
    ///
    /// Updates the in-memory config only; call [`save()`](Self::save) to
    /// persist.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key or an unparseable value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "backup_dir" | "backup-dir" => self.paths.backup_dir = value.to_string(),
            "max_credits" | "max-credits" => {
                let parsed = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid credit count for 'max_credits': '{value}'"))?;
                if parsed == 0 {
                    return Err("'max_credits' must be positive".to_string());
                }
                self.limits.max_credits_per_semester = parsed;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default.
    ///
    /// Updates the in-memory config only; call [`save()`](Self::save) to
    /// persist.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "backup_dir" | "backup-dir" => {
                self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            }
            "max_credits" | "max-credits" => {
                self.limits.max_credits_per_semester = defaults.limits.max_credits_per_semester;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the configuration file so the next load recreates defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  backup_dir = \"{}\"", self.paths.backup_dir)?;

        writeln!(f, "\n[limits]")?;
        writeln!(
            f,
            "  max_credits_per_semester = {}",
            self.limits.max_credits_per_semester
        )?;

        Ok(())
    }
}
