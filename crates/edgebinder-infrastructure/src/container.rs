//! In-process service container
//!
//! A minimal host container: plain services (configuration, clients, adapter
//! factories) served through the [`ServiceContainer`] port, plus named
//! `EdgeBinder` factories and aliases between service names.
//!
//! ```text
//! "edgebinder" ──alias──→ "edgebinder.default" ──factory──→ EdgeBinder
//!                                                     │
//!                                     reads "config", "edgebinder.adapter.*"
//! ```

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use edgebinder_application::EdgeBinder;
use edgebinder_domain::constants::CONFIG_SERVICE;
use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::{AdapterFactory, ContainerService, ServiceContainer};
use serde_json::Value;
use tracing::debug;

/// Factory producing an [`EdgeBinder`] from the container it is registered in
pub type BinderFactory =
    Arc<dyn Fn(&Arc<dyn ServiceContainer>) -> Result<EdgeBinder> + Send + Sync>;

/// Alias chains longer than this are treated as cycles
const MAX_ALIAS_DEPTH: usize = 16;

#[derive(Default)]
struct Inner {
    services: DashMap<String, ContainerService>,
    binder_factories: DashMap<String, BinderFactory>,
    aliases: DashMap<String, String>,
}

/// Shared, cloneable service container
///
/// Clones share the same registrations.
#[derive(Clone, Default)]
pub struct ServiceMap {
    inner: Arc<Inner>,
}

impl ServiceMap {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a plain service
    pub fn register_service(&self, name: impl Into<String>, service: ContainerService) {
        self.inner.services.insert(name.into(), service);
    }

    /// Register the configuration tree served as `config`
    pub fn register_config(&self, tree: Value) {
        self.register_service(CONFIG_SERVICE, ContainerService::Config(tree));
    }

    /// Register an adapter factory service (e.g. under `edgebinder.adapter.<type>`)
    pub fn register_adapter_factory<F>(&self, name: impl Into<String>, factory: F)
    where
        F: AdapterFactory + 'static,
    {
        self.register_service(name, ContainerService::AdapterFactory(Arc::new(factory)));
    }

    /// Register a factory building an [`EdgeBinder`] under `name`
    pub fn register_binder_factory<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn(&Arc<dyn ServiceContainer>) -> Result<EdgeBinder> + Send + Sync + 'static,
    {
        self.inner
            .binder_factories
            .insert(name.into(), Arc::new(factory));
    }

    /// Make `alias` resolve to whatever `target` resolves to
    pub fn alias(&self, alias: impl Into<String>, target: impl Into<String>) {
        self.inner.aliases.insert(alias.into(), target.into());
    }

    /// Follow aliases from `name` to the registered service name
    pub fn canonical_name(&self, name: &str) -> Result<String> {
        let mut current = name.to_string();
        for _ in 0..MAX_ALIAS_DEPTH {
            match self.inner.aliases.get(&current) {
                Some(target) => current = target.value().clone(),
                None => return Ok(current),
            }
        }
        Err(Error::invalid_service(name, "alias chain does not terminate"))
    }

    /// Whether an EdgeBinder factory is reachable from `name`
    pub fn has_edge_binder(&self, name: &str) -> bool {
        self.canonical_name(name)
            .is_ok_and(|canonical| self.inner.binder_factories.contains_key(&canonical))
    }

    /// Build the [`EdgeBinder`] registered under `name` or one of its aliases
    pub fn resolve_edge_binder(&self, name: &str) -> Result<EdgeBinder> {
        let canonical = self.canonical_name(name)?;
        let factory = self
            .inner
            .binder_factories
            .get(&canonical)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::missing_service(name))?;

        debug!(service = name, canonical = %canonical, "Resolving EdgeBinder service");
        factory(&self.as_container())
    }

    /// Borrow a plain service object registered with [`ContainerService::instance`]
    pub fn get_instance<T>(&self, name: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let canonical = self.canonical_name(name).ok()?;
        let service = self.inner.services.get(&canonical)?;
        service.downcast_ref::<T>().cloned()
    }

    /// This container as the port handed to the resolution engine
    pub fn as_container(&self) -> Arc<dyn ServiceContainer> {
        Arc::new(self.clone())
    }

    /// Names of all plain services, sorted
    pub fn service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .services
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }
}

impl ServiceContainer for ServiceMap {
    fn has(&self, key: &str) -> bool {
        self.canonical_name(key)
            .is_ok_and(|canonical| self.inner.services.contains_key(&canonical))
    }

    fn get(&self, key: &str) -> Result<ContainerService> {
        let canonical = self.canonical_name(key)?;
        self.inner
            .services
            .get(&canonical)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::missing_service(key))
    }
}

impl fmt::Debug for ServiceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut binders: Vec<String> = self
            .inner
            .binder_factories
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        binders.sort();
        f.debug_struct("ServiceMap")
            .field("services", &self.service_names())
            .field("binder_factories", &binders)
            .field("aliases", &self.inner.aliases.len())
            .finish()
    }
}
