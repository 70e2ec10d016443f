//! Tracker configuration with documented defaults
//!
//! Every knob the session reads lives here. The defaults reproduce the
//! behavior of a plain session with no config file.

use crate::core::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How `phase` is kept inside [0, 2π] after a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhasePolicy {
    /// Stick at 0 or 2π when a rotation would leave the range.
    ///
    /// A character at phase 350° shifted by +20° ends at 360°, and the
    /// extra 10° of phase is lost (the health vector still rotates 20°).
    #[default]
    Saturate,
    /// Wrap modulo 2π into [0, 2π), like a continuous dial.
    Wrap,
}

/// Output form of the global summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

/// Diagram rasterizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Grid width in terminal columns
    ///
    /// Terminal cells are roughly twice as tall as they are wide, so a
    /// round circle needs about twice as many columns as rows.
    pub width: usize,

    /// Grid height in terminal rows
    pub height: usize,

    /// Colour the diagram with ANSI escapes
    pub color: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 49,
            height: 25,
            color: true,
        }
    }
}

/// Configuration for one tracking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Phase range policy applied after every phase shift
    pub phase_policy: PhasePolicy,

    /// Decimal places shown in summaries
    pub display_digits: u32,

    /// Print the welcome banner and wait for a keypress at startup
    pub show_welcome: bool,

    /// Format of the global summary
    pub summary_format: SummaryFormat,

    pub diagram: DiagramConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            phase_policy: PhasePolicy::Saturate,
            display_digits: 2,
            show_welcome: true,
            summary_format: SummaryFormat::Text,
            diagram: DiagramConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(content)?;
        config.validate().map_err(TrackerError::InvalidConfig)?;
        Ok(config)
    }

    /// Load and validate a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.display_digits > 10 {
            return Err(format!(
                "display_digits ({}) should be at most 10",
                self.display_digits
            ));
        }

        // The diagram needs a centre cell plus at least one ring of cells
        if self.diagram.width < 5 || self.diagram.height < 5 {
            return Err(format!(
                "diagram must be at least 5x5 cells (got {}x{})",
                self.diagram.width, self.diagram.height
            ));
        }

        if self.diagram.width > 400 || self.diagram.height > 200 {
            return Err(format!(
                "diagram is too large ({}x{}), limit is 400x200",
                self.diagram.width, self.diagram.height
            ));
        }

        Ok(())
    }
}
