//! Factory for EdgeBinder instances with named configurations
//!
//! Supports the legacy single-instance configuration as well as any number of
//! named instances:
//!
//! ```toml
//! # legacy flat form, only valid for "default"
//! [edgebinder]
//! adapter = "inmemory"
//!
//! # named instances
//! [edgebinder.rag]
//! adapter = "weaviate"
//! collection_name = "RagBindings"
//! ```

use std::sync::Arc;

use edgebinder_domain::constants::DEFAULT_INSTANCE;
use edgebinder_domain::error::Result;
use edgebinder_domain::ports::{AdapterRegistry, ServiceContainer};
use tracing::debug;

use super::engine::{AdapterResolver, ResolvedAdapter};
use super::instance::{get_configuration, resolve_instance_config};
use crate::registry::global_registry;
use crate::service::EdgeBinder;

/// Creates [`EdgeBinder`] services from a host container
#[derive(Debug)]
pub struct EdgeBinderFactory {
    resolver: AdapterResolver,
}

impl EdgeBinderFactory {
    /// Factory backed by the process-wide adapter registry
    pub fn new() -> Self {
        let registry: Arc<dyn AdapterRegistry> = global_registry();
        Self::with_registry(registry)
    }

    /// Factory backed by a specific adapter registry
    pub fn with_registry(registry: Arc<dyn AdapterRegistry>) -> Self {
        Self {
            resolver: AdapterResolver::new(registry),
        }
    }

    /// Create the `default` instance
    pub fn create(&self, container: &Arc<dyn ServiceContainer>) -> Result<EdgeBinder> {
        self.create_edge_binder(container, DEFAULT_INSTANCE)
    }

    /// Create the instance configured under `name`
    pub fn create_edge_binder(
        &self,
        container: &Arc<dyn ServiceContainer>,
        name: &str,
    ) -> Result<EdgeBinder> {
        let resolved = self.resolve_adapter(container, name)?;
        Ok(EdgeBinder::new(resolved.adapter))
    }

    /// Resolve the adapter of instance `name` without wrapping it
    pub fn resolve_adapter(
        &self,
        container: &Arc<dyn ServiceContainer>,
        name: &str,
    ) -> Result<ResolvedAdapter> {
        let config = get_configuration(container.as_ref())?;
        let instance_config = resolve_instance_config(&config, name)?;

        let resolved = self
            .resolver
            .resolve_detailed(instance_config, &config, container)?;
        debug!(
            instance = name,
            adapter_type = %resolved.adapter_type,
            strategy = %resolved.strategy,
            "Resolved EdgeBinder adapter"
        );
        Ok(resolved)
    }
}

impl Default for EdgeBinderFactory {
    fn default() -> Self {
        Self::new()
    }
}
