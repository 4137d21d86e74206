//! Application layer: the scripted demonstration.
//!
//! Consumes the domain config and drives `shapes-core` through a
//! [`Console`](shapes_core::Console); it never prints directly.

pub mod showcase;

pub use showcase::{run_showcase, AreaRecord, ShowcaseReport};
