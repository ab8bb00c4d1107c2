//! Runtime adapter registry

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::{AdapterRegistry, PersistenceAdapter};
use edgebinder_domain::value_objects::AdapterConfiguration;
use tracing::{debug, info};

use super::{ADAPTER_PROVIDERS, AdapterProviderEntry};

/// Constructor stored in the runtime registry
pub type AdapterConstructor =
    dyn Fn(&AdapterConfiguration) -> Result<Arc<dyn PersistenceAdapter>> + Send + Sync;

struct RegisteredAdapter {
    description: String,
    constructor: Arc<AdapterConstructor>,
}

/// Adapter registry that can be extended and cleared at runtime
///
/// Instances are independent: tests build their own instead of touching the
/// process-wide one returned by [`global_registry`](super::global_registry).
#[derive(Default)]
pub struct RuntimeAdapterRegistry {
    adapters: DashMap<String, RegisteredAdapter>,
}

impl RuntimeAdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with every compile-time registered adapter
    pub fn with_providers() -> Self {
        let registry = Self::new();
        for entry in ADAPTER_PROVIDERS.iter() {
            // Slice entries with a duplicated name: first one wins
            if let Err(e) = registry.register_entry(entry) {
                debug!(error = %e, "Skipping duplicate adapter provider entry");
            }
        }
        registry
    }

    /// Register a constructor for `adapter_type`
    ///
    /// Fails with [`Error::DuplicateAdapter`] when the type is already taken.
    pub fn register<F>(
        &self,
        adapter_type: impl Into<String>,
        description: impl Into<String>,
        constructor: F,
    ) -> Result<()>
    where
        F: Fn(&AdapterConfiguration) -> Result<Arc<dyn PersistenceAdapter>>
            + Send
            + Sync
            + 'static,
    {
        let adapter_type = adapter_type.into();
        match self.adapters.entry(adapter_type) {
            Entry::Occupied(occupied) => Err(Error::duplicate_adapter(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                info!(adapter_type = %vacant.key(), "Registered adapter");
                vacant.insert(RegisteredAdapter {
                    description: description.into(),
                    constructor: Arc::new(constructor),
                });
                Ok(())
            }
        }
    }

    /// Register a compile-time provider entry
    pub fn register_entry(&self, entry: &'static AdapterProviderEntry) -> Result<()> {
        self.register(entry.name, entry.description, entry.factory)
    }

    /// Remove the constructor for `adapter_type`, returning whether it existed
    pub fn unregister(&self, adapter_type: &str) -> bool {
        self.adapters.remove(adapter_type).is_some()
    }

    /// Remove every registered adapter
    pub fn clear(&self) {
        self.adapters.clear();
    }

    /// Number of registered adapter types
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no adapter is registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Registered `(type, description)` pairs, sorted by type
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut described: Vec<(String, String)> = self
            .adapters
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().description.clone()))
            .collect();
        described.sort();
        described
    }
}

impl AdapterRegistry for RuntimeAdapterRegistry {
    fn has_adapter(&self, adapter_type: &str) -> bool {
        self.adapters.contains_key(adapter_type)
    }

    fn create(
        &self,
        adapter_type: &str,
        config: &AdapterConfiguration,
    ) -> Result<Arc<dyn PersistenceAdapter>> {
        // Clone the constructor out so no map guard is held while user code runs
        let constructor = self
            .adapters
            .get(adapter_type)
            .map(|registered| Arc::clone(&registered.constructor))
            .ok_or_else(|| Error::unsupported_adapter(adapter_type))?;

        debug!(adapter_type, "Creating adapter from registry");
        constructor(config)
    }

    fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.adapters.iter().map(|e| e.key().clone()).collect();
        types.sort();
        types
    }
}

impl fmt::Debug for RuntimeAdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeAdapterRegistry")
            .field("adapters", &self.registered_types())
            .finish()
    }
}
