//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dobble/dobble.toml`
//! 3. Environment variables: `DOBBLE_*` prefix
//!
//! Command-line flags override all of these in the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

/// How generated decks are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable card list
    #[default]
    Text,
    /// Machine-readable JSON report
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Unified configuration for dobble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Card size used when none is given on the command line.
    /// Validated like user input when used.
    pub symbols_per_card: i64,
    /// Output format (default: text)
    pub format: OutputFormat,
    /// Colored terminal output (default: true)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbols_per_card: 8,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub symbols_per_card: Option<i64>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for dobble.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dobble").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dobble.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            symbols_per_card: overlay.symbols_per_card.unwrap_or(self.symbols_per_card),
            format: overlay.format.unwrap_or(self.format),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings from defaults, the global config file and `DOBBLE_*` env vars.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` in place of the global config path.
    ///
    /// A missing file is skipped; an unreadable or malformed one is an error.
    pub fn load_from(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                debug!("load config: {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply DOBBLE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("DOBBLE").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("symbols_per_card") {
            settings.symbols_per_card = val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("DOBBLE_SYMBOLS_PER_CARD is not a number: {}", val),
            })?;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = OutputFormat::parse(&val).ok_or_else(|| ApplicationError::Config {
                message: format!("DOBBLE_FORMAT must be 'text' or 'json': {}", val),
            })?;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_classic_deck_size() {
        let s = Settings::default();
        assert_eq!(s.symbols_per_card, 8);
        assert_eq!(s.format, OutputFormat::Text);
        assert!(s.color);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_values() {
        let overlay = RawSettings {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.format, OutputFormat::Json);
        assert_eq!(merged.symbols_per_card, 8);
        assert!(merged.color);
    }

    #[test]
    fn given_format_strings_when_parsing_then_case_insensitive() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse(" text "), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }
}
