//! Demo configuration: the sizes and colors the showcase builds its shapes with.
//!
//! [`DemoConfig`] can be loaded from a TOML file or built from defaults.  The
//! defaults reproduce the classic walkthrough (a 5×10 red rectangle, a green
//! square of side 7, and a side-4 square widened to 9).
//!
//! # Example file
//!
//! ```toml
//! [shape]
//! color = "yellow"
//! recolor = "blue"
//!
//! [rectangle]
//! width = 5.0
//! height = 10.0
//! color = "red"
//! resize_width = 8.0
//!
//! [square]
//! side = 7.0
//! color = "green"
//! resize_from = 4.0
//! resize_to = 9.0
//! ```
//!
//! Every field has a default, so any subset of the file above is valid.
//! Unknown tables or keys (such as a misspelt `widht`) are rejected.
//! Leaving `shape.color` out builds the shape with its own default color.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for demo configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default)]
    pub shape: ShapeSection,
    #[serde(default)]
    pub rectangle: RectangleSection,
    #[serde(default)]
    pub square: SquareSection,
}

/// Settings for the encapsulation section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShapeSection {
    /// Initial color.  `None` uses the shape's own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Color passed to the setter after the first display.
    #[serde(default = "default_recolor")]
    pub recolor: String,
}

/// Settings for the inheritance section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RectangleSection {
    #[serde(default = "default_rectangle_width")]
    pub width: f64,
    #[serde(default = "default_rectangle_height")]
    pub height: f64,
    #[serde(default = "default_rectangle_color")]
    pub color: String,
    /// Width applied after the first area report.
    #[serde(default = "default_rectangle_resize_width")]
    pub resize_width: f64,
}

/// Settings for the overriding section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SquareSection {
    #[serde(default = "default_square_side")]
    pub side: f64,
    #[serde(default = "default_square_color")]
    pub color: String,
    /// Side of the square whose width is then overwritten.
    #[serde(default = "default_square_resize_from")]
    pub resize_from: f64,
    /// Value passed to `set_width` on that square.
    #[serde(default = "default_square_resize_to")]
    pub resize_to: f64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_recolor() -> String {
    "blue".to_string()
}
fn default_rectangle_width() -> f64 {
    5.0
}
fn default_rectangle_height() -> f64 {
    10.0
}
fn default_rectangle_color() -> String {
    "red".to_string()
}
fn default_rectangle_resize_width() -> f64 {
    8.0
}
fn default_square_side() -> f64 {
    7.0
}
fn default_square_color() -> String {
    "green".to_string()
}
fn default_square_resize_from() -> f64 {
    4.0
}
fn default_square_resize_to() -> f64 {
    9.0
}

impl Default for ShapeSection {
    fn default() -> Self {
        Self {
            color: None,
            recolor: default_recolor(),
        }
    }
}

impl Default for RectangleSection {
    fn default() -> Self {
        Self {
            width: default_rectangle_width(),
            height: default_rectangle_height(),
            color: default_rectangle_color(),
            resize_width: default_rectangle_resize_width(),
        }
    }
}

impl Default for SquareSection {
    fn default() -> Self {
        Self {
            side: default_square_side(),
            color: default_square_color(),
            resize_from: default_square_resize_from(),
            resize_to: default_square_resize_to(),
        }
    }
}

impl DemoConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed, a field has
    /// the wrong type, or a key is not recognised.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the config as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Loads the demo config from `path`, or returns [`DemoConfig::default`] when
/// no path is given.
///
/// Unlike an implicit config location, an explicit path must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if its TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    DemoConfig::from_toml_str(&content)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
