//! Service container port
//!
//! The host's dependency-injection container, reduced to the two lookups the
//! resolution engine needs.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::AdapterFactory;
use crate::error::Result;

/// A service handed out by the container
#[derive(Clone)]
pub enum ContainerService {
    /// Untyped configuration tree (the `config` service)
    Config(Value),
    /// Adapter factory following one or more calling conventions
    AdapterFactory(Arc<dyn AdapterFactory>),
    /// Any other host object (clients, connections, ...)
    Instance(Arc<dyn Any + Send + Sync>),
}

impl ContainerService {
    /// Wrap an arbitrary host object
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Self::Instance(Arc::new(value))
    }

    /// Borrow the held host object as `T`, if it is one
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Instance(object) => object.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Short description of the variant for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::AdapterFactory(_) => "adapter factory",
            Self::Instance(_) => "instance",
        }
    }
}

impl fmt::Debug for ContainerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(value) => f.debug_tuple("Config").field(value).finish(),
            Self::AdapterFactory(_) => f.write_str("AdapterFactory(..)"),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

/// Generic key/value service lookup supplied by the host application
pub trait ServiceContainer: Send + Sync {
    /// Whether a service is registered under `key`
    fn has(&self, key: &str) -> bool;

    /// Fetch the service registered under `key`
    fn get(&self, key: &str) -> Result<ContainerService>;
}
