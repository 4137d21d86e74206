//! The base `Shape` entity and the [`Colored`] capability set.
//!
//! A `Shape` owns exactly one piece of state: its color.  The field is private
//! to this module, so the only way to read it from outside is
//! [`Colored::color`] and the only way to change it is [`Colored::set_color`].

use std::fmt;

use tracing::trace;

use crate::output::Console;

/// Color used when a shape is constructed without one.
pub const DEFAULT_COLOR: &str = "black";

/// Operations every shape supports: reading, replacing and displaying its color.
///
/// `Shape`, `Rectangle` and `Square` all implement this trait, so code written
/// against `&dyn Colored` or `impl Colored` accepts any of them.
pub trait Colored {
    /// Returns the current color.
    fn color(&self) -> &str;

    /// Replaces the color unconditionally.  No validation is performed.
    fn set_color(&mut self, color: &str);

    /// Writes a line describing the current color, e.g. `Shape color: red`.
    fn display(&self, console: &mut dyn Console) {
        console.write_line(&format!("Shape color: {}", self.color()));
    }
}

/// The base entity: a color and nothing else.
///
/// # Example
///
/// ```rust
/// use shapes_core::{Colored, Shape};
///
/// let mut shape = Shape::default();
/// assert_eq!(shape.color(), "black");
///
/// shape.set_color("blue");
/// assert_eq!(shape.color(), "blue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    color: String,
}

impl Shape {
    /// Creates a shape with the given color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Default for Shape {
    /// Creates a shape with [`DEFAULT_COLOR`].
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl Colored for Shape {
    fn color(&self) -> &str {
        &self.color
    }

    fn set_color(&mut self, color: &str) {
        trace!(from = %self.color, to = %color, "shape color changed");
        self.color = color.to_owned();
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", self.color)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
