//! # EdgeBinder
//!
//! Configuration-driven resolution of persistence adapters for EdgeBinder
//! relationship services.
//!
//! ## Example
//!
//! ```ignore
//! use edgebinder::application::EdgeBinderFactory;
//! use edgebinder::infrastructure::{ConfigLoader, init_services};
//!
//! let config = ConfigLoader::new().load()?;
//! let services = init_services(&config);
//! let rag = EdgeBinderFactory::new().create_edge_binder(&services.as_container(), "rag")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy, value objects and ports
//! - `application` - adapter registry and resolution engine
//! - `providers` - in-memory and Weaviate adapters
//! - `infrastructure` - configuration, logging and the service container

// Force-link edgebinder-providers so its linkme registrations are included
extern crate edgebinder_providers;

/// Command line interface
pub mod cli;

/// Domain layer - error taxonomy, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use edgebinder_domain::*;
}

/// Application layer - adapter registry and resolution engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use edgebinder_application::*;
}

/// Adapter implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use edgebinder_providers::*;
}

/// Infrastructure layer - configuration, logging and service container
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use edgebinder_infrastructure::*;
}

pub use edgebinder_application::{EdgeBinder, EdgeBinderFactory};
pub use edgebinder_domain::{Error, Result};
