//! Configuration management for Mimeo.
//!
//! Parses `mimeo.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [markdown]
//! image_class = "img-fluid"
//!
//! [submission]
//! max_bytes = 1048576
//! ```

use std::path::{Path, PathBuf};

use mimeo_markdown::{ArticleRenderer, DEFAULT_IMAGE_CLASS, DEFAULT_MAX_BYTES, SubmissionLimits};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override image class attribute.
    pub image_class: Option<String>,
    /// Override submission size limit.
    pub max_bytes: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mimeo.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Article rendering configuration.
    pub markdown: MarkdownConfig,
    /// Submission validation configuration.
    pub submission: SubmissionConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Article rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// `class` attribute written on every rendered `<img>`.
    pub image_class: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            image_class: DEFAULT_IMAGE_CLASS.to_owned(),
        }
    }
}

impl MarkdownConfig {
    /// Article renderer configured from this section.
    #[must_use]
    pub fn renderer(&self) -> ArticleRenderer {
        ArticleRenderer::new().with_image_class(self.image_class.clone())
    }
}

/// Submission validation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Maximum article size in bytes.
    pub max_bytes: usize,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl SubmissionConfig {
    /// Submission limits configured from this section.
    #[must_use]
    pub fn limits(&self) -> SubmissionLimits {
        SubmissionLimits {
            max_bytes: self.max_bytes,
        }
    }
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

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mimeo.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take precedence
    /// over config file values. The result is validated after overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(image_class) = &settings.image_class {
            self.markdown.image_class.clone_from(image_class);
        }
        if let Some(max_bytes) = settings.max_bytes {
            self.submission.max_bytes = max_bytes;
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_markdown()?;
        self.validate_submission()?;
        Ok(())
    }

    fn validate_markdown(&self) -> Result<(), ConfigError> {
        let class = &self.markdown.image_class;
        require_non_empty(class, "markdown.image_class")?;
        // The class is written inside a double-quoted attribute.
        if class.contains('"') {
            return Err(ConfigError::Validation(
                "markdown.image_class cannot contain '\"'".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_submission(&self) -> Result<(), ConfigError> {
        if self.submission.max_bytes == 0 {
            return Err(ConfigError::Validation(
                "submission.max_bytes must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}
