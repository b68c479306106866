//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where dashboard usage comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Seed for the mock interval generator; random when unset
    pub seed: Option<u64>,

    /// JSON fixture replacing the mock provider
    pub fixture: Option<String>,
}

/// Command output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
}

fn default_output_format() -> String {
    "table".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// A config file that exists but cannot be read or parsed is an error
    /// rather than a silent fall back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("hourglass").join("config.toml")),
            Some(PathBuf::from("./hourglass.toml")),
        ];

        Self::load_first_existing(config_paths.iter().flatten())
    }

    fn load_first_existing<'a>(
        paths: impl IntoIterator<Item = &'a PathBuf>,
    ) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `HOURGLASS_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(seed) = lookup("HOURGLASS_SEED") {
            match seed.parse() {
                Ok(s) => self.data.seed = Some(s),
                Err(_) => tracing::warn!("Ignoring invalid HOURGLASS_SEED: {}", seed),
            }
        }
        if let Some(fixture) = lookup("HOURGLASS_FIXTURE") {
            self.data.fixture = Some(fixture);
        }

        // Output overrides
        if let Some(format) = lookup("HOURGLASS_OUTPUT_FORMAT") {
            self.output.format = format;
        }

        // Logging overrides
        if let Some(level) = lookup("HOURGLASS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HOURGLASS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Hourglass Configuration
#
# Environment variables override these settings:
# - HOURGLASS_SEED
# - HOURGLASS_FIXTURE
# - HOURGLASS_OUTPUT_FORMAT
# - HOURGLASS_LOG_LEVEL
# - HOURGLASS_LOG_FORMAT

[data]
# Seed for generated interval data (omit for a fresh random day)
# seed = 42

# JSON fixture with "hourly" and "intervals" bucket arrays
# fixture = "./usage.json"

[output]
# Output format: table or json
format = "table"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.seed, None);
        assert_eq!(config.output.format, "table");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.output.format, "table");
        assert!(config.data.fixture.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[data]\nseed = 7\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data.seed, Some(7));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/hourglass.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[data\nseed = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_malformed_default_location_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let broken = dir.path().join("hourglass.toml");
        std::fs::write(&broken, "[data\nseed = ").unwrap();

        let err = Config::load_first_existing([&missing, &broken]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path, .. } if path == broken));
    }

    #[test]
    fn test_no_default_location_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let config = Config::load_first_existing([&missing]).unwrap();
        assert_eq!(config.output.format, "table");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOURGLASS_SEED", "99"),
            ("HOURGLASS_FIXTURE", "/tmp/usage.json"),
            ("HOURGLASS_OUTPUT_FORMAT", "json"),
            ("HOURGLASS_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.seed, Some(99));
        assert_eq!(config.data.fixture.as_deref(), Some("/tmp/usage.json"));
        assert_eq!(config.output.format, "json");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_seed_override_is_ignored() {
        let mut config = Config::default();
        config.data.seed = Some(1);
        config.apply_overrides(|key| (key == "HOURGLASS_SEED").then(|| "abc".to_string()));
        assert_eq!(config.data.seed, Some(1));
    }
}
