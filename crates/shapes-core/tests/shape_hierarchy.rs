//! Integration tests for the shapes-core public API.
//!
//! These tests use only what the crate root re-exports and check the
//! behaviour a caller relies on: default colors, area computation, the
//! square's equal-sides invariant, and substitutability through the
//! `Colored` and `Rectangular` traits.

use mockall::{mock, Sequence};
use shapes_core::{
    BufferConsole, Colored, Console, Rectangle, Rectangular, Shape, ShapeKind, Square,
    DEFAULT_COLOR,
};

mock! {
    pub Sink {}

    impl Console for Sink {
        fn write_line(&mut self, line: &str);
    }
}

// ── Helpers taking the capability sets ────────────────────────────────────────

fn recolor(shape: &mut dyn Colored, color: &str) -> String {
    shape.set_color(color);
    shape.color().to_string()
}

fn total_area(shapes: &[Box<dyn Rectangular>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

fn describe<R: Rectangular>(shape: &R) -> Vec<String> {
    let mut console = BufferConsole::new();
    shape.report_area(&mut console);
    console.into_lines()
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn test_shape_without_color_is_black() {
    assert_eq!(Shape::default().color(), "black");
    assert_eq!(DEFAULT_COLOR, "black");
}

#[test]
fn test_red_rectangle_area_is_fifty() {
    // Arrange
    let rect = Rectangle::with_color(5.0, 10.0, "red");
    let mut console = BufferConsole::new();

    // Act
    let area = rect.report_area(&mut console);

    // Assert
    assert_eq!(area, 50.0);
    assert_eq!(rect.color(), "red");
}

#[test]
fn test_green_square_side_and_area() {
    let square = Square::with_color(7.0, "green");
    assert_eq!(square.side(), 7.0);
    assert_eq!(square.area(), 49.0);
}

#[test]
fn test_square_set_width_changes_height() {
    let mut square = Square::new(4.0);
    square.set_width(9.0);
    assert_eq!(square.height(), 9.0);
}

// ── Properties over a spread of inputs ────────────────────────────────────────

#[test]
fn test_rectangle_area_matches_product_for_many_inputs() {
    let dims = [0.0, 1.0, 2.5, 7.0, -3.0, 1e6];
    for &w in &dims {
        for &h in &dims {
            assert_eq!(Rectangle::new(w, h).area(), w * h, "w={w} h={h}");
        }
    }
}

#[test]
fn test_square_mutators_always_keep_sides_equal() {
    let values = [0.0, 1.0, 4.0, 9.0, -2.0, 0.25];
    for &v in &values {
        let mut by_side = Square::new(1.0);
        by_side.set_side(v);

        let mut by_width = Square::new(1.0);
        by_width.set_width(v);

        let mut by_height = Square::new(1.0);
        by_height.set_height(v);

        for square in [&by_side, &by_width, &by_height] {
            assert_eq!(square.width(), v);
            assert_eq!(square.height(), v);
            assert_eq!(square.area(), v * v);
        }
    }
}

#[test]
fn test_set_color_then_color_round_trips_for_every_kind() {
    let mut shapes: Vec<Box<dyn Colored>> = vec![
        Box::new(Shape::default()),
        Box::new(Rectangle::new(1.0, 2.0)),
        Box::new(Square::new(3.0)),
    ];
    for shape in shapes.iter_mut() {
        assert_eq!(recolor(shape.as_mut(), "magenta"), "magenta");
    }
}

// ── Substitutability ──────────────────────────────────────────────────────────

#[test]
fn test_square_is_usable_as_rectangle_trait_object() {
    let shapes: Vec<Box<dyn Rectangular>> = vec![
        Box::new(Rectangle::new(5.0, 10.0)),
        Box::new(Square::new(7.0)),
    ];
    assert_eq!(total_area(&shapes), 99.0);
}

#[test]
fn test_generic_caller_sees_overridden_label() {
    assert_eq!(
        describe(&Rectangle::with_color(2.0, 3.0, "red")),
        ["Rectangle area: 6", "Shape color: red"]
    );
    assert_eq!(
        describe(&Square::with_color(3.0, "blue")),
        ["Square area: 9", "Shape color: blue"]
    );
}

#[test]
fn test_independent_axis_assumption_fails_for_square() {
    fn set_width_keep_height(shape: &mut dyn Rectangular, width: f64) -> (f64, f64) {
        let before = shape.height();
        shape.set_width(width);
        (before, shape.height())
    }

    let (before, after) = set_width_keep_height(&mut Rectangle::new(4.0, 4.0), 9.0);
    assert_eq!(before, after);

    let (before, after) = set_width_keep_height(&mut Square::new(4.0), 9.0);
    assert_ne!(before, after);
    assert_eq!(after, 9.0);
}

#[test]
fn test_report_area_writes_label_before_color() {
    // Arrange
    let mut seq = Sequence::new();
    let mut sink = MockSink::new();
    sink.expect_write_line()
        .withf(|line: &str| line == "Square area: 16")
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    sink.expect_write_line()
        .withf(|line: &str| line == "Shape color: black")
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    // Act
    let area = Square::new(4.0).report_area(&mut sink);

    // Assert
    assert_eq!(area, 16.0);
}

#[test]
fn test_kind_names_parse_back() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.to_string().parse::<ShapeKind>(), Ok(kind));
    }
}
