//! [`ShapeKind`] names the three entity kinds so they can be selected by text
//! (for example from a command-line flag).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while interpreting shape-related input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// The text did not name a known shape kind.
    #[error("unknown shape kind: {0:?} (expected one of: shape, rectangle, square)")]
    UnknownKind(String),
}

/// One of the three entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Shape,
    Rectangle,
    Square,
}

impl ShapeKind {
    /// All kinds, base type first.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Shape, ShapeKind::Rectangle, ShapeKind::Square];

    /// Returns the lowercase name, e.g. `"rectangle"`.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Shape => "shape",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Parses a kind name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShapeError::UnknownKind(s.to_owned()))
    }
}
