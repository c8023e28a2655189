//! Configuration management for the Sprout documentation scaffold.
//!
//! Parses `sprout.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The content root is an explicit configuration value rather than an
//! implicit constant, so callers (and tests) can point discovery at any
//! synthetic root.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sprout.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
    pattern: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Root directory for content files.
    pub source_dir: PathBuf,
    /// Glob pattern for content files.
    pub pattern: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `sprout.toml` in the current directory and parents,
    /// falling back to defaults when no file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default_with_cwd())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("docs"),
                pattern: "**/*.md".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Resolve raw string paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self
            .content
            .source_dir
            .as_deref()
            .map_or_else(|| config_dir.join("docs"), |s| config_dir.join(s));

        self.content_resolved = ContentConfig {
            source_dir,
            pattern: self
                .content
                .pattern
                .clone()
                .unwrap_or_else(|| "**/*.md".to_owned()),
        };
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the content pattern is empty or
    /// not a valid glob pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pattern = &self.content_resolved.pattern;
        if pattern.is_empty() {
            return Err(ConfigError::Validation(
                "content.pattern cannot be empty".to_owned(),
            ));
        }
        if glob::Pattern::new(pattern).is_err() {
            return Err(ConfigError::Validation(format!(
                "content.pattern is not a valid glob pattern: {pattern}"
            )));
        }
        Ok(())
    }
}
