//! Domain entities for the shapes library.
//!
//! This module contains pure modelling code.  The only side effect any entity
//! performs is writing text lines to a [`Console`](crate::output::Console)
//! handed in by the caller.
//!
//! # How the "inheritance chain" is laid out (for beginners)
//!
//! ```text
//! Shape  ──────────── implements ──▶ Colored
//!   ▲ contained in
//! Rectangle ───────── implements ──▶ Colored + Rectangular
//!   ▲ contained in
//! Square ──────────── implements ──▶ Colored + Rectangular (setters overridden)
//! ```
//!
//! Each outer type owns its inner value outright; there is no shared or
//! reference-counted state between instances.

pub mod kind;
pub mod rectangle;
pub mod shape;
pub mod square;
