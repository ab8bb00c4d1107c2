//! Ports
//!
//! Interfaces the resolution engine consumes. Hosts implement
//! [`ServiceContainer`]; adapter crates implement [`PersistenceAdapter`] and,
//! when they want container-based discovery, [`AdapterFactory`].

pub mod adapter;
pub mod container;
pub mod factory;
pub mod registry;

pub use adapter::PersistenceAdapter;
pub use container::{ContainerService, ServiceContainer};
pub use factory::{AdapterFactory, AdapterFn, FactoryOutput, FnAdapterFactory};
pub use registry::AdapterRegistry;
