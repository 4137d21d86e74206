//! # shapes-demo
//!
//! The demonstration program for `shapes-core`, split into a library (so it
//! can be tested) and a thin binary in `main.rs`.
//!
//! ```text
//! shapes-demo (binary)
//!   domain/       DemoConfig: which shapes to build, with what sizes/colors
//!   application/  run_showcase: the scripted walk through each feature
//!       ↓ writes to
//! shapes_core::Console  (stdout, tracing, or an in-memory buffer)
//! ```

pub mod application;
pub mod domain;
