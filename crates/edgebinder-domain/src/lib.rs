//! # EdgeBinder - Domain Layer
//!
//! Types shared by every EdgeBinder crate:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | Configuration error taxonomy and ambient errors |
//! | [`value_objects`] | [`AdapterConfiguration`], [`Binding`], untyped config helpers |
//! | [`ports`] | [`PersistenceAdapter`], [`ServiceContainer`], [`AdapterRegistry`], [`AdapterFactory`] |
//! | [`constants`] | Configuration keys and container service names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    AdapterFactory, AdapterFn, AdapterRegistry, ContainerService, FactoryOutput,
    FnAdapterFactory, PersistenceAdapter, ServiceContainer,
};
pub use value_objects::{AdapterConfiguration, Binding, ConfigMap, EntityRef};
