//! Container adapter factory port
//!
//! A service registered in the host container under
//! `edgebinder.adapter.<type>` describes how to build that adapter type. Three
//! calling conventions are recognised and tried in this order:
//!
//! | Order | Capability | Shape |
//! |-------|------------|-------|
//! | (a) | [`AdapterFactory::call`] | bare callable taking the configuration |
//! | (b) | [`AdapterFactory::create_adapter`] | object with a `create_adapter` method |
//! | (c) | [`AdapterFactory::invoke`] | object that is itself invocable |
//!
//! Each capability returns `None` when the service does not have it. A
//! capability that runs but yields `Ok(None)` produced nothing usable, and the
//! next convention is tried.

use std::fmt;
use std::sync::Arc;

use super::PersistenceAdapter;
use crate::error::Result;
use crate::value_objects::AdapterConfiguration;

/// What a factory convention yields: an adapter, or nothing usable
pub type FactoryOutput = Option<Arc<dyn PersistenceAdapter>>;

/// Signature of a bare adapter constructor
pub type AdapterFn = dyn Fn(&AdapterConfiguration) -> Result<FactoryOutput> + Send + Sync;

/// Adapter factory service with optional calling conventions
pub trait AdapterFactory: Send + Sync {
    /// Convention (a): bare callable
    fn call(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        None
    }

    /// Convention (b): named `create_adapter` method
    fn create_adapter(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        None
    }

    /// Convention (c): invocable object
    fn invoke(&self, _config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        None
    }
}

/// Adapts a closure or function to the bare-callable convention
pub struct FnAdapterFactory {
    factory_fn: Box<AdapterFn>,
}

impl FnAdapterFactory {
    /// Wrap a constructor function
    pub fn new<F>(factory_fn: F) -> Self
    where
        F: Fn(&AdapterConfiguration) -> Result<FactoryOutput> + Send + Sync + 'static,
    {
        Self {
            factory_fn: Box::new(factory_fn),
        }
    }
}

impl AdapterFactory for FnAdapterFactory {
    fn call(&self, config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        Some((self.factory_fn)(config))
    }
}

impl fmt::Debug for FnAdapterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAdapterFactory").finish_non_exhaustive()
    }
}
