//! Serializable generator configuration.
//!
//! A [`GeneratorConfig`] carries everything that parameterizes a run apart
//! from the names themselves. It can be built in code, parsed from JSON, or
//! assembled by the command line tool.
//!
//! # Example
//!
//! ```
//! use buddy_icon::GeneratorConfig;
//!
//! let config = GeneratorConfig::new()
//!     .with_size(48)
//!     .with_output("icons");
//!
//! let json = config.to_json().unwrap();
//! let restored = GeneratorConfig::from_json(&json).unwrap();
//! assert_eq!(restored.size, 48);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::icon::validate_size;

/// Font used when none is configured.
pub const DEFAULT_FONT: &str = "/usr/share/fonts/urw-base35/D050000L.otf";

/// Icon edge length used when none is configured.
pub const DEFAULT_SIZE: u32 = 96;

/// Settings for generating a batch of icons.
///
/// # JSON Format
///
/// ```json
/// {
///   "font": "/usr/share/fonts/urw-base35/D050000L.otf",
///   "size": 96,
///   "output": ".",
///   "parallel": false
/// }
/// ```
///
/// Every field is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// TrueType or OpenType font the glyphs are drawn with.
    pub font: PathBuf,

    /// Width and height of each icon in pixels.
    pub size: u32,

    /// Existing directory the icons are written into.
    pub output: PathBuf,

    /// Generate names on a thread pool instead of one after another.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from(DEFAULT_FONT),
            size: DEFAULT_SIZE,
            output: PathBuf::from("."),
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects settings no icon can be generated with.
    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================
