//! Configuration management for puml.
//!
//! Parses `puml.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [server]
//! url = "https://www.plantuml.com/plantuml"
//! timeout_secs = 30
//!
//! [diagram]
//! input = "diagrams/architecture.puml"
//! output = "diagrams/architecture.png"
//! format = "png"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `server.url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use puml_render::{DEFAULT_SERVER_URL, OutputFormat};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override diagram source path.
    pub input: Option<PathBuf>,
    /// Override rendered image path.
    pub output: Option<PathBuf>,
    /// Override `PlantUML` server URL.
    pub server_url: Option<String>,
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "puml.toml";

/// Default diagram source path, relative to the project directory.
const DEFAULT_INPUT: &str = "diagrams/architecture.puml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering server configuration.
    pub server: ServerConfig,
    /// Diagram configuration (paths are relative strings from TOML).
    diagram: DiagramConfigRaw,

    /// Resolved diagram configuration (set after loading).
    #[serde(skip)]
    pub diagram_resolved: DiagramConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Rendering server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `PlantUML` server base URL, without the format segment.
    pub url: String,
    /// Request timeout in seconds. Unset uses the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_owned(),
            timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Request timeout, if configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Raw diagram configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DiagramConfigRaw {
    input: Option<String>,
    output: Option<String>,
    format: Option<OutputFormat>,
}

/// Resolved diagram configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DiagramConfig {
    /// Diagram source file.
    pub input: PathBuf,
    /// Explicit rendered image path, if configured.
    pub output: Option<PathBuf>,
    /// Output format requested from the server.
    pub format: OutputFormat,
}

impl DiagramConfig {
    /// Rendered image path.
    ///
    /// Falls back to the input path with the format's extension
    /// (`architecture.puml` becomes `architecture.png`).
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(self.format.extension()))
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.url`").
        field: String,
        /// Error message (e.g., "${`PLANTUML_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `puml.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged result
    /// is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
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
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input) = &settings.input {
            self.diagram_resolved.input.clone_from(input);
        }
        if let Some(output) = &settings.output {
            self.diagram_resolved.output = Some(output.clone());
        }
        if let Some(url) = &settings.server_url {
            self.server.url.clone_from(url);
        }
        if let Some(format) = settings.format {
            self.diagram_resolved.format = format;
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.server.timeout_secs = Some(timeout_secs);
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
            server: ServerConfig::default(),
            diagram: DiagramConfigRaw::default(),
            diagram_resolved: DiagramConfig {
                input: base.join(DEFAULT_INPUT),
                output: None,
                format: OutputFormat::default(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.url, "server.url")?;
        require_http_url(&self.server.url, "server.url")?;

        if self.server.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "server.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.url = expand::expand_env(&self.server.url, "server.url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.diagram_resolved = DiagramConfig {
            input: config_dir.join(self.diagram.input.as_deref().unwrap_or(DEFAULT_INPUT)),
            output: self.diagram.output.as_deref().map(|o| config_dir.join(o)),
            format: self.diagram.format.unwrap_or_default(),
        };
    }
}
