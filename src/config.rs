// WHY: TOML configuration for equalizer defaults and named card layouts
// Built-in presets mirror the course card (320/280) and hover overlay (120/100) layouts

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::equalizer::EqualizerOptions;

pub const CARD_PRESET: &str = "card";
pub const OVERLAY_PRESET: &str = "overlay";

/// Application configuration loaded from an optional TOML file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Collapse whitespace in catalog descriptions before equalizing
    pub normalize_whitespace: bool,
    /// Options used when no preset is named
    pub equalizer: EqualizerOptions,
    /// Named layouts; file entries override built-ins with the same name
    pub presets: BTreeMap<String, EqualizerOptions>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            equalizer: EqualizerOptions::default(),
            presets: builtin_presets(),
        }
    }
}

fn builtin_presets() -> BTreeMap<String, EqualizerOptions> {
    BTreeMap::from([
        (CARD_PRESET.to_string(), EqualizerOptions::new(320, 280)),
        (OVERLAY_PRESET.to_string(), EqualizerOptions::new(120, 100)),
    ])
}

impl AppConfig {
    /// Parse TOML, keeping built-in presets the file does not redefine
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content).context("Invalid configuration TOML")?;

        for (name, options) in builtin_presets() {
            config.presets.entry(name).or_insert(options);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when no path is given
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?;

        info!("Loaded configuration from {} ({} presets)", path.display(), config.presets.len());
        Ok(config)
    }

    /// Options for a named preset, or the default equalizer options
    pub fn equalizer_options(&self, preset: Option<&str>) -> Result<EqualizerOptions> {
        match preset {
            None => Ok(self.equalizer.clone()),
            Some(name) => match self.presets.get(name) {
                Some(options) => Ok(options.clone()),
                None => {
                    let known: Vec<&str> = self.presets.keys().map(String::as_str).collect();
                    bail!("Unknown preset '{}' (known presets: {})", name, known.join(", "))
                }
            },
        }
    }

    /// Reject targets of zero
    /// WHY: min_length above target is tolerated, matching the equalizer's own contract
    fn validate(&self) -> Result<()> {
        if self.equalizer.target_length == 0 {
            bail!("equalizer.target_length must be greater than zero");
        }

        for (name, options) in &self.presets {
            if options.target_length == 0 {
                bail!("presets.{}.target_length must be greater than zero", name);
            }
        }

        Ok(())
    }
}
