//! # EdgeBinder - Infrastructure Layer
//!
//! Ambient services around the resolution engine:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Figment-based loading of `edgebinder.toml` and `EDGEBINDER_*` variables |
//! | [`logging`] | tracing subscriber setup |
//! | [`container`] | In-process [`ServiceMap`] implementing the container port |
//! | [`bootstrap`] | EdgeBinder service table and container setup |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain error |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{EdgeBinderServices, init_services, register_edgebinder_services};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use container::{BinderFactory, ServiceMap};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
