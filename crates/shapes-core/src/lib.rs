//! # shapes-core
//!
//! A small domain library modelling three geometric entities: `Shape`,
//! `Rectangle` and `Square`.  It exists to show how class-style modelling
//! (private state, a base type, derived types and overridden methods) reads
//! when written in Rust.
//!
//! # Architecture overview (for beginners)
//!
//! Rust has no class inheritance.  The same ideas are expressed with two
//! tools:
//!
//! - **Composition** – a `Rectangle` *contains* a `Shape`, and a `Square`
//!   *contains* a `Rectangle`.  Calls are forwarded explicitly to the inner
//!   value, so every delegation is visible in the source.
//!
//! - **Traits** – the operations a type must support to play a role are
//!   grouped into a trait (a "capability set").  [`Colored`] is the role of a
//!   shape; [`Rectangular`] is the role of a rectangle and requires
//!   `Colored`.  A `Square` implements both, so it can be passed anywhere
//!   either role is expected.
//!
//! The crate is split into two modules:
//!
//! - **`domain`** – the three entities, the two traits, and [`ShapeKind`].
//! - **`output`** – the [`Console`] trait that receives demonstration text,
//!   with stdout, `tracing` and in-memory implementations.

pub mod domain;
pub mod output;

// Re-export the most-used types at the crate root so callers can write
// `shapes_core::Square` instead of `shapes_core::domain::square::Square`.
pub use domain::kind::{ShapeError, ShapeKind};
pub use domain::rectangle::{Rectangle, Rectangular};
pub use domain::shape::{Colored, Shape, DEFAULT_COLOR};
pub use domain::square::Square;
pub use output::{BufferConsole, Console, StdoutConsole, TracingConsole};
