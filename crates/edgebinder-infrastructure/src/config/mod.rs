//! Configuration management
//!
//! Layered loading (defaults, TOML file, environment) of the application
//! configuration, including the untyped `edgebinder` section.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
