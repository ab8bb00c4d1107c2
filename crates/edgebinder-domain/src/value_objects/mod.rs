//! Value Objects
//!
//! Immutable values passed between the resolution engine, the registry and
//! the adapters.

pub mod adapter_configuration;
pub mod binding;
pub mod config;

pub use adapter_configuration::AdapterConfiguration;
pub use binding::{Binding, EntityRef};
pub use config::{ConfigMap, value_type_name};
