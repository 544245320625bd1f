//! Configuration types, defaults, loading, and validation.

use crate::error::{Result, ShellError};
use crate::registry::AppKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interaction sound cues
    #[serde(default)]
    pub sound: SoundConfig,

    /// Shell start-up behaviour
    #[serde(default)]
    pub shell: ShellConfig,

    /// Per-app title/content overrides, keyed by app identifier
    #[serde(default)]
    pub apps: BTreeMap<String, AppOverride>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log to file
    #[serde(default)]
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

fn default_log_level() -> String {
    "info".to_string()
}

/// Which audio backend plays hover/click cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundBackend {
    Silent,
    Bell,
    #[default]
    Tone,
}

impl std::str::FromStr for SoundBackend {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "none" | "off" => Ok(Self::Silent),
            "bell" => Ok(Self::Bell),
            "tone" => Ok(Self::Tone),
            other => Err(ShellError::ConfigInvalid(format!(
                "unknown sound backend '{}' (expected silent, bell or tone)",
                other
            ))),
        }
    }
}

/// Interaction sound configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Master switch (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Backend used when enabled (default: tone)
    #[serde(default)]
    pub backend: SoundBackend,

    /// Tone volume, 0.0 to 1.0 (default: 0.2)
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: SoundBackend::default(),
            volume: default_volume(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f32 {
    0.2
}

impl SoundConfig {
    /// Backend after applying the master switch
    pub fn effective_backend(&self) -> SoundBackend {
        if self.enabled {
            self.backend
        } else {
            SoundBackend::Silent
        }
    }
}

/// Shell start-up configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// App shown at start (default: first registry entry)
    #[serde(default)]
    pub initial_app: Option<String>,
}

impl ShellConfig {
    /// Parsed initial app, if one is configured
    pub fn initial_app(&self) -> Result<Option<AppKey>> {
        self.initial_app.as_deref().map(str::parse).transpose()
    }
}

/// Title/content replacement for one registry entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppOverride {
    #[serde(default)]
    pub title: Option<String>,

    /// Inline payload
    #[serde(default)]
    pub content: Option<String>,

    /// Payload read from a text file (takes precedence over `content`)
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

/// Recursively overlay `overlay` onto `base`; nested tables merge, any other
/// value replaces
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Boolean switch from an environment variable
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ShellError::ConfigInvalid(format!(
            "{} must be one of 1/0, true/false, yes/no, on/off, got '{}'",
            name, other
        ))),
    }
}

fn expand_tilde(p: &Path) -> PathBuf {
    if let Ok(rest) = p.strip_prefix("~") {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest)
    } else {
        p.to_path_buf()
    }
}

/// Canonical base directory: `~/.mateapps/`
pub fn mateapps_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mateapps")
}

impl Config {
    /// Load configuration from the standard locations
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. System config (~/.mateapps/config.toml)
    /// 3. Local config (./mateapps.toml)
    /// 4. Environment variables
    pub fn load() -> Result<Self> {
        tracing::debug!("Loading configuration...");

        let mut layers = Vec::new();

        if let Some(system_config_path) = Self::system_config_path()
            && system_config_path.exists()
        {
            tracing::debug!("Loading system config from: {:?}", system_config_path);
            layers.push(system_config_path);
        }

        let local_config_path = Self::local_config_path();
        if local_config_path.exists() {
            tracing::debug!("Loading local config from: {:?}", local_config_path);
            layers.push(local_config_path);
        }

        let mut config = Self::from_layers(&layers)?;
        config = Self::apply_env_overrides(config)?;
        config.expand_paths();

        tracing::debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from a specific file path
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. Custom config file (specified path)
    /// 3. Environment variables
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from custom path: {:?}", path);

        let config = Self::from_layers(&[path.to_path_buf()])?;
        let mut config = Self::apply_env_overrides(config)?;
        config.expand_paths();

        tracing::debug!("Configuration loaded successfully from custom path");
        Ok(config)
    }

    /// Get the system config path: ~/.mateapps/config.toml
    pub fn system_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".mateapps").join("config.toml"))
    }

    /// Get the local config path: ./mateapps.toml
    fn local_config_path() -> PathBuf {
        PathBuf::from("./mateapps.toml")
    }

    /// Read one config file as a raw table, rejecting files that do not
    /// describe a valid config on their own
    fn read_layer(path: &Path) -> Result<toml::Table> {
        let contents = fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_err = |source| ShellError::ConfigParse {
            path: path.to_path_buf(),
            source,
        };

        toml::from_str::<Self>(&contents).map_err(parse_err)?;
        toml::from_str::<toml::Table>(&contents).map_err(parse_err)
    }

    /// Defaults overlaid with each file in order, key by key.
    ///
    /// Later files only replace the keys they actually set.
    fn from_layers(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = toml::Table::new();
        for path in paths {
            merge_tables(&mut merged, Self::read_layer(path)?);
        }
        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| ShellError::ConfigInvalid(e.to_string()))
    }

    fn apply_env_overrides(config: Self) -> Result<Self> {
        Self::apply_overrides(config, |name| std::env::var(name).ok())
    }

    /// Apply `MATEAPPS_*` overrides, reading variables through `lookup`
    fn apply_overrides<F>(mut config: Self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("MATEAPPS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("MATEAPPS_LOG_FILE") {
            config.logging.file = Some(PathBuf::from(file));
        }

        if let Some(enabled) = lookup("MATEAPPS_SOUND") {
            config.sound.enabled = parse_flag("MATEAPPS_SOUND", &enabled)?;
        }

        if let Some(backend) = lookup("MATEAPPS_SOUND_BACKEND") {
            config.sound.backend = backend.parse()?;
        }

        Ok(config)
    }

    fn expand_paths(&mut self) {
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_tilde(file));
        }
        for ovr in self.apps.values_mut() {
            if let Some(ref path) = ovr.content_file {
                ovr.content_file = Some(expand_tilde(path));
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        tracing::debug!("Validating configuration...");

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ShellError::ConfigInvalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, valid_levels
            )));
        }

        if !(0.0..=1.0).contains(&self.sound.volume) {
            return Err(ShellError::ConfigInvalid(format!(
                "Sound volume must be between 0.0 and 1.0, got {}",
                self.sound.volume
            )));
        }

        self.shell.initial_app()?;
        for key in self.apps.keys() {
            key.parse::<AppKey>()?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }

    /// Render as TOML (used by `mateapps config`)
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
