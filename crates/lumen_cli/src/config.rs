//! Lumen configuration file handling

use anyhow::{Context, Result};
use lumen_animation::DEFAULT_LEAD_MS;
use lumen_theme::{Theme, ThemePreset, DEFAULT_MAX_ALIAS_HOPS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "lumen.toml";

/// Top-level Lumen configuration (lumen.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LumenConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub transitions: TransitionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which theme to resolve against
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Built-in preset id, used when `path` is not set
    #[serde(default = "default_preset")]
    pub preset: String,
    /// TOML theme file, relative to the config file
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_max_alias_hops")]
    pub max_alias_hops: usize,
}

fn default_preset() -> String {
    ThemePreset::Lumen.id().to_string()
}

fn default_max_alias_hops() -> usize {
    DEFAULT_MAX_ALIAS_HOPS
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            path: None,
            max_alias_hops: default_max_alias_hops(),
        }
    }
}

/// Transition sequencer settings
#[derive(Debug, Deserialize, Serialize)]
pub struct TransitionsConfig {
    /// Gap between a step's start and its begin callback
    #[serde(default = "default_lead_ms")]
    pub lead_ms: u64,
}

fn default_lead_ms() -> u64 {
    DEFAULT_LEAD_MS
}

impl Default for TransitionsConfig {
    fn default() -> Self {
        Self {
            lead_ms: default_lead_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl LumenConfig {
    /// Load an explicit config file, or `./lumen.toml` if present, or defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(Path::new(CONFIG_FILE)),
            None => {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Theme paths are relative to the config file
        if let (Some(theme), Some(dir)) = (config.theme.path.as_mut(), path.parent()) {
            if theme.is_relative() {
                *theme = dir.join(&*theme);
            }
        }
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid lumen configuration")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// The configured theme: the `path` file if set, else the preset
    pub fn load_theme(&self) -> Result<Theme> {
        let hops = self.theme.max_alias_hops;
        let theme = match &self.theme.path {
            Some(path) => Theme::load_with(path, hops)
                .with_context(|| format!("Failed to load theme {}", path.display()))?,
            None => ThemePreset::from_id(&self.theme.preset)
                .with_context(|| {
                    let known: Vec<_> = ThemePreset::all().iter().map(|p| p.id()).collect();
                    format!(
                        "Unknown theme preset `{}` (known: {})",
                        self.theme.preset,
                        known.join(", ")
                    )
                })?
                .theme()
                .with_max_alias_hops(hops),
        };
        tracing::debug!(theme = %theme.name(), max_alias_hops = hops, "using theme");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let config = LumenConfig::from_toml_str("").unwrap();
        assert_eq!(config.theme.preset, "lumen");
        assert_eq!(config.theme.path, None);
        assert_eq!(config.theme.max_alias_hops, 8);
        assert_eq!(config.transitions.lead_ms, 5);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn partial_sections() {
        let config = LumenConfig::from_toml_str(
            r#"
            [theme]
            preset = "midnight"

            [transitions]
            lead_ms = 16
            "#,
        )
        .unwrap();
        assert_eq!(config.theme.preset, "midnight");
        assert_eq!(config.theme.max_alias_hops, 8);
        assert_eq!(config.transitions.lead_ms, 16);
        assert_eq!(config.load_theme().unwrap().name(), "midnight");
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let config = LumenConfig::from_toml_str("[theme]\npreset = \"neon\"").unwrap();
        let err = config.load_theme().unwrap_err().to_string();
        assert!(err.contains("neon"), "{err}");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = LumenConfig::default();
        let parsed = LumenConfig::from_toml_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.theme.preset, config.theme.preset);
        assert_eq!(parsed.transitions.lead_ms, config.transitions.lead_ms);
    }

    #[test]
    fn alias_hop_bound_reaches_theme_validation() {
        let dir = std::env::temp_dir().join(format!("lumen-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let mut theme = String::from("name = \"long\"\n\n[chain]\n");
        for i in 0..10 {
            theme.push_str(&format!("a{i} = \"@chain.a{}\"\n", i + 1));
        }
        theme.push_str("a10 = 2.0\n");
        fs::write(dir.join("long.toml"), theme).unwrap();

        let config_path = dir.join(CONFIG_FILE);
        fs::write(&config_path, "[theme]\npath = \"long.toml\"\nmax_alias_hops = 16\n").unwrap();
        let theme = LumenConfig::load(&config_path).unwrap().load_theme().unwrap();
        assert_eq!(theme.max_alias_hops(), 16);
        assert_eq!(theme.number("chain.a0").unwrap(), 2.0);

        fs::write(&config_path, "[theme]\npath = \"long.toml\"\n").unwrap();
        assert!(LumenConfig::load(&config_path).unwrap().load_theme().is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
