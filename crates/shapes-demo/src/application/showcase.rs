//! The showcase: a fixed walk through encapsulation, inheritance and overriding.
//!
//! # Sections
//!
//! | Section     | Demonstrates                                             |
//! |-------------|----------------------------------------------------------|
//! | `shape`     | Private color reached only through `color`/`set_color`   |
//! | `rectangle` | Area report delegating to the inner shape's display      |
//! | `square`    | Overridden area label and coupled `set_width`            |
//!
//! After the selected sections, a polymorphism pass reports every selected
//! rectangle-like shape through `&dyn Rectangular`.
//!
//! The report returned by [`run_showcase`] mirrors what was written, so
//! callers and tests can check results without parsing console text.

use shapes_core::{Colored, Console, Rectangle, Rectangular, Shape, ShapeKind, Square};
use tracing::debug;

use crate::domain::DemoConfig;

/// One area reported during the showcase.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRecord {
    /// The label the shape printed, e.g. `"Square area"`.
    pub label: &'static str,
    /// The area returned by `report_area`.
    pub area: f64,
}

/// What the showcase did, in the order it did it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowcaseReport {
    /// Sections that ran, in execution order.
    pub sections: Vec<ShapeKind>,
    /// Every area reported, including the polymorphism pass.
    pub areas: Vec<AreaRecord>,
    /// Final color of the shape built in the `shape` section.
    pub final_shape_color: Option<String>,
    /// Width and height of the resized square after `set_width`.
    pub resized_square: Option<(f64, f64)>,
}

impl ShowcaseReport {
    fn record(&mut self, label: &'static str, area: f64) {
        self.areas.push(AreaRecord { label, area });
    }
}

/// Runs the showcase for the selected sections.
///
/// An empty `sections` slice selects every section.  Sections always run in
/// base-to-derived order regardless of the order given.
pub fn run_showcase(
    config: &DemoConfig,
    sections: &[ShapeKind],
    console: &mut dyn Console,
) -> ShowcaseReport {
    let selected: Vec<ShapeKind> = ShapeKind::ALL
        .into_iter()
        .filter(|kind| sections.is_empty() || sections.contains(kind))
        .collect();

    let mut report = ShowcaseReport::default();

    for &kind in &selected {
        debug!(section = %kind, "running showcase section");
        match kind {
            ShapeKind::Shape => shape_section(config, console, &mut report),
            ShapeKind::Rectangle => rectangle_section(config, console, &mut report),
            ShapeKind::Square => square_section(config, console, &mut report),
        }
        report.sections.push(kind);
    }

    let shapes = rectangular_shapes(config, &selected);
    if !shapes.is_empty() {
        console.write_line("");
        console.write_line("=== Polymorphism: &dyn Rectangular ===");
        for shape in &shapes {
            let area = shape.report_area(console);
            report.record(shape.area_label(), area);
        }
    }

    report
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn shape_section(config: &DemoConfig, console: &mut dyn Console, report: &mut ShowcaseReport) {
    console.write_line("=== Encapsulation: Shape ===");

    let mut shape = config
        .shape
        .color
        .as_deref()
        .map(Shape::new)
        .unwrap_or_default();
    shape.display(console);

    shape.set_color(&config.shape.recolor);
    console.write_line(&format!("Color via accessor: {}", shape.color()));
    shape.display(console);

    report.final_shape_color = Some(shape.color().to_owned());
}

fn rectangle_section(
    config: &DemoConfig,
    console: &mut dyn Console,
    report: &mut ShowcaseReport,
) {
    let cfg = &config.rectangle;
    console.write_line("");
    console.write_line("=== Inheritance: Rectangle ===");

    let mut rect = Rectangle::with_color(cfg.width, cfg.height, cfg.color.as_str());
    console.write_line(&rect.to_string());
    let area = rect.report_area(console);
    report.record(rect.area_label(), area);

    rect.set_width(cfg.resize_width);
    console.write_line(&format!(
        "After set_width({}): width={}, height={}",
        cfg.resize_width,
        rect.width(),
        rect.height()
    ));
    let area = rect.report_area(console);
    report.record(rect.area_label(), area);
}

fn square_section(config: &DemoConfig, console: &mut dyn Console, report: &mut ShowcaseReport) {
    let cfg = &config.square;
    console.write_line("");
    console.write_line("=== Overriding: Square ===");

    let square = Square::with_color(cfg.side, cfg.color.as_str());
    console.write_line(&square.to_string());
    console.write_line(&format!("Side: {}", square.side()));
    let area = square.report_area(console);
    report.record(square.area_label(), area);

    let mut resized = Square::new(cfg.resize_from);
    console.write_line(&format!(
        "Before set_width: width={}, height={}",
        resized.width(),
        resized.height()
    ));
    resized.set_width(cfg.resize_to);
    console.write_line(&format!(
        "After set_width({}): width={}, height={}",
        cfg.resize_to,
        resized.width(),
        resized.height()
    ));
    report.resized_square = Some((resized.width(), resized.height()));
}

/// Builds fresh rectangle-like shapes for the polymorphism pass.
fn rectangular_shapes(config: &DemoConfig, selected: &[ShapeKind]) -> Vec<Box<dyn Rectangular>> {
    let mut shapes: Vec<Box<dyn Rectangular>> = Vec::new();
    if selected.contains(&ShapeKind::Rectangle) {
        let cfg = &config.rectangle;
        shapes.push(Box::new(Rectangle::with_color(
            cfg.width,
            cfg.height,
            cfg.color.as_str(),
        )));
    }
    if selected.contains(&ShapeKind::Square) {
        let cfg = &config.square;
        shapes.push(Box::new(Square::with_color(cfg.side, cfg.color.as_str())));
    }
    shapes
}

// ── Tests ─────────────────────────────────────────────────────────────────────
