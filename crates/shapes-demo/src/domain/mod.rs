//! Domain types for the demonstration program.

pub mod config;

pub use config::{load_config, ConfigError, DemoConfig};
