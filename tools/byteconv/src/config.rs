//! byteconv configuration
//!
//! Loaded through `common::load_config`, so every key can come from
//! `byteconv.toml`, `byteconv.yaml`, `--config <file>` or `BYTECONV_*`
//! environment variables (nested keys use `__`, e.g. `BYTECONV_LOG__LEVEL`).

use anyhow::{Context, Result};
use byte_codec::Pane;
use clap::ValueEnum;
use common::{LogConfig, LogFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application name, also the config file stem and env prefix
pub const APP_NAME: &str = "byteconv";

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Panes printed by `convert` and the REPL `show` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneSelection {
    pub unsigned: bool,
    pub signed: bool,
    pub bits: bool,
    pub literal: bool,
}

impl Default for PaneSelection {
    fn default() -> Self {
        Self {
            unsigned: true,
            signed: true,
            bits: true,
            literal: true,
        }
    }
}

impl PaneSelection {
    pub fn is_enabled(&self, pane: Pane) -> bool {
        match pane {
            Pane::Unsigned => self.unsigned,
            Pane::Signed => self.signed,
            Pane::Bits => self.bits,
            Pane::Literal => self.literal,
        }
    }

    /// Enabled panes in display order
    pub fn enabled(&self) -> impl Iterator<Item = Pane> + '_ {
        Pane::ALL.into_iter().filter(|pane| self.is_enabled(*pane))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ByteconvConfig {
    pub output: OutputFormat,
    /// Colored terminal output
    pub color: bool,
    pub log: LogSettings,
    pub panes: PaneSelection,
}

impl Default for ByteconvConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            color: true,
            log: LogSettings::default(),
            panes: PaneSelection::default(),
        }
    }
}

impl ByteconvConfig {
    /// Load from all configuration layers
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        common::load_config(APP_NAME, explicit).context("Failed to load byteconv configuration")
    }

    /// Logging configuration after CLI overrides
    pub fn log_config(&self, verbose: bool, ansi: bool) -> LogConfig {
        let config = LogConfig {
            level: self.log.level.clone(),
            format: self.log.format,
            ansi,
        };

        if verbose {
            config.with_level("debug")
        } else {
            config
        }
    }

    /// Effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration")
    }
}
