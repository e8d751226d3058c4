//! Optional renderer configuration.
//!
//! A config file only exists to override the document-wide font; everything
//! else is fixed by the section layout. Blank or zero values fall back to
//! the defaults so a sparse file never disables text styling.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u32 = 10;

/// Document-wide text settings applied to every table run the renderer
/// emits. Font size is in points.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_font_family", rename = "fontfamily")]
    pub font_family: String,
    #[serde(default = "default_font_size", rename = "fontsize")]
    pub font_size: u32,
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl RenderConfig {
    /// Load settings from a YAML file. A missing or unparsable file is fatal
    /// when the caller asked for one explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read configuration file {}", path.display()))?;
        let config: RenderConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parse configuration file {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Font size in the half-point units the document format uses.
    pub fn half_points(&self) -> usize {
        (self.font_size * 2) as usize
    }

    fn normalized(mut self) -> Self {
        if self.font_family.trim().is_empty() {
            self.font_family = default_font_family();
        }
        if self.font_size == 0 {
            self.font_size = default_font_size();
        }
        self
    }
}
