//! The `Rectangle` entity and the [`Rectangular`] capability set.
//!
//! A `Rectangle` contains a [`Shape`] for its color and adds two independent
//! dimensions.  Color operations are forwarded to the inner shape, which is
//! how this crate spells "Rectangle inherits from Shape".
//!
//! Dimensions are plain `f64` values.  Negative or zero sizes are accepted
//! and simply produce the corresponding (possibly nonsensical) area.

use std::fmt;

use tracing::trace;

use super::shape::{Colored, Shape};
use crate::output::Console;

/// Operations every rectangle-like shape supports.
///
/// `Rectangular` requires [`Colored`], so anything usable as a rectangle is
/// also usable as a shape.
pub trait Rectangular: Colored {
    /// Returns the width.
    fn width(&self) -> f64;

    /// Returns the height.
    fn height(&self) -> f64;

    /// Changes the width.
    fn set_width(&mut self, width: f64);

    /// Changes the height.
    fn set_height(&mut self, height: f64);

    /// Label written in front of the area by [`Rectangular::report_area`].
    fn area_label(&self) -> &'static str {
        "Rectangle area"
    }

    /// Returns `width * height` without writing anything.
    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Computes the area, writes it, displays the color, and returns the area.
    ///
    /// Two lines are written, in order:
    ///
    /// ```text
    /// Rectangle area: 50
    /// Shape color: red
    /// ```
    fn report_area(&self, console: &mut dyn Console) -> f64 {
        let area = self.area();
        console.write_line(&format!("{}: {}", self.area_label(), area));
        self.display(console);
        area
    }
}

/// A shape with independent width and height.
///
/// # Example
///
/// ```rust
/// use shapes_core::{BufferConsole, Colored, Rectangle, Rectangular};
///
/// let rect = Rectangle::with_color(5.0, 10.0, "red");
/// let mut console = BufferConsole::new();
///
/// assert_eq!(rect.report_area(&mut console), 50.0);
/// assert_eq!(rect.color(), "red");
/// assert_eq!(console.lines(), ["Rectangle area: 50", "Shape color: red"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    shape: Shape,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle with the default color.
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_shape(Shape::default(), width, height)
    }

    /// Creates a rectangle with the given color.
    pub fn with_color(width: f64, height: f64, color: impl Into<String>) -> Self {
        Self::from_shape(Shape::new(color), width, height)
    }

    fn from_shape(shape: Shape, width: f64, height: f64) -> Self {
        Self {
            shape,
            width,
            height,
        }
    }

    /// Returns the inner shape.
    pub fn as_shape(&self) -> &Shape {
        &self.shape
    }
}

impl Colored for Rectangle {
    fn color(&self) -> &str {
        self.shape.color()
    }

    fn set_color(&mut self, color: &str) {
        self.shape.set_color(color);
    }

    fn display(&self, console: &mut dyn Console) {
        self.shape.display(console);
    }
}

impl Rectangular for Rectangle {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_width(&mut self, width: f64) {
        trace!(from = self.width, to = width, "rectangle width changed");
        self.width = width;
    }

    fn set_height(&mut self, height: f64) {
        trace!(from = self.height, to = height, "rectangle height changed");
        self.height = height;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle {} x {} ({})", self.width, self.height, self.color())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
