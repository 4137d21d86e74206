//! The `Square` entity.
//!
//! A `Square` contains a [`Rectangle`] and keeps its width and height equal.
//! That single shared value is the square's *side*.
//!
//! # The override hazard
//!
//! `Square` implements [`Rectangular`], so it can be passed to any code that
//! expects a rectangle.  Its `set_width` and `set_height` however change
//! *both* dimensions.  Code that assumes the axes are independent (set the
//! width, expect the height to stay put) sees different results for a square
//! than for a rectangle:
//!
//! ```rust
//! use shapes_core::{Rectangle, Rectangular, Square};
//!
//! fn widen(shape: &mut dyn Rectangular) -> f64 {
//!     shape.set_width(9.0);
//!     shape.height()
//! }
//!
//! assert_eq!(widen(&mut Rectangle::new(4.0, 4.0)), 4.0);
//! assert_eq!(widen(&mut Square::new(4.0)), 9.0);
//! ```
//!
//! The inner rectangle is never exposed mutably, so no caller can break the
//! `width == height` invariant.

use std::fmt;

use tracing::trace;

use super::rectangle::{Rectangle, Rectangular};
use super::shape::Colored;
use crate::output::Console;

/// A rectangle whose width and height are always equal.
///
/// # Example
///
/// ```rust
/// use shapes_core::{Rectangular, Square};
///
/// let square = Square::with_color(7.0, "green");
/// assert_eq!(square.side(), 7.0);
/// assert_eq!(square.area(), 49.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Creates a square with the default color.
    pub fn new(side: f64) -> Self {
        Self {
            rect: Rectangle::new(side, side),
        }
    }

    /// Creates a square with the given color.
    pub fn with_color(side: f64, color: impl Into<String>) -> Self {
        Self {
            rect: Rectangle::with_color(side, side, color),
        }
    }

    /// Returns the side length.
    pub fn side(&self) -> f64 {
        self.rect.width()
    }

    /// Sets both width and height to `side`.
    pub fn set_side(&mut self, side: f64) {
        trace!(from = self.side(), to = side, "square side changed");
        self.rect.set_width(side);
        self.rect.set_height(side);
    }

    /// Returns the inner rectangle (read only).
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }
}

impl Colored for Square {
    fn color(&self) -> &str {
        self.rect.color()
    }

    fn set_color(&mut self, color: &str) {
        self.rect.set_color(color);
    }

    fn display(&self, console: &mut dyn Console) {
        self.rect.display(console);
    }
}

impl Rectangular for Square {
    fn width(&self) -> f64 {
        self.rect.width()
    }

    fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Sets both dimensions to `width`.
    fn set_width(&mut self, width: f64) {
        self.set_side(width);
    }

    /// Sets both dimensions to `height`.
    fn set_height(&mut self, height: f64) {
        self.set_side(height);
    }

    fn area_label(&self) -> &'static str {
        "Square area"
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square {} ({})", self.side(), self.color())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
