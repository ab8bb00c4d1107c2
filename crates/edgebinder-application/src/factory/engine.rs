//! Adapter resolution engine
//!
//! Turns an instance configuration into a live adapter.
//!
//! ## Resolution Order
//!
//! ```text
//! instance config ── "adapter" = <type>
//!        │
//!        ▼
//! ┌──────────────────────────────┐   has_adapter(<type>)
//! │ 1. AdapterRegistry           │ ─────────────────────────→ registry.create()
//! └──────────────────────────────┘
//!        │ not registered
//!        ▼
//! ┌──────────────────────────────┐   has("edgebinder.adapter.<type>")
//! │ 2. Container convention      │ ─────────────────────────→ call / create_adapter / invoke
//! └──────────────────────────────┘
//!        │ nothing usable
//!        ▼
//!   Error::UnsupportedAdapter(<type>)
//! ```
//!
//! The registry always wins when both strategies know the type.

use std::fmt;
use std::sync::Arc;

use edgebinder_domain::constants::{ADAPTER_KEY, adapter_service_name};
use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::{
    AdapterFactory, AdapterRegistry, ContainerService, FactoryOutput, PersistenceAdapter,
    ServiceContainer,
};
use edgebinder_domain::value_objects::{AdapterConfiguration, ConfigMap};
use serde_json::Value;
use tracing::debug;

use super::builder::build_adapter_configuration;

/// Calling conventions of container adapter factories, in the order tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryConvention {
    /// Bare callable taking the configuration
    Callable,
    /// Object exposing `create_adapter(config)`
    CreateAdapterMethod,
    /// Object that is itself invocable
    Invocable,
}

impl FactoryConvention {
    /// Conventions in resolution order
    pub const ORDER: [Self; 3] = [Self::Callable, Self::CreateAdapterMethod, Self::Invocable];

    /// Run this convention against `factory`, `None` if it lacks the capability
    pub fn apply(
        self,
        factory: &dyn AdapterFactory,
        config: &AdapterConfiguration,
    ) -> Option<Result<FactoryOutput>> {
        match self {
            Self::Callable => factory.call(config),
            Self::CreateAdapterMethod => factory.create_adapter(config),
            Self::Invocable => factory.invoke(config),
        }
    }

    /// Convention name for diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Callable => "callable",
            Self::CreateAdapterMethod => "create_adapter",
            Self::Invocable => "invocable",
        }
    }
}

impl fmt::Display for FactoryConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which discovery strategy produced an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// The adapter registry
    Registry,
    /// A container factory service, through the given convention
    Container(FactoryConvention),
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry => f.write_str("registry"),
            Self::Container(convention) => write!(f, "container ({convention})"),
        }
    }
}

/// An adapter together with the strategy that built it
#[derive(Clone)]
pub struct ResolvedAdapter {
    /// Adapter type from the instance configuration
    pub adapter_type: String,
    /// The constructed adapter
    pub adapter: Arc<dyn PersistenceAdapter>,
    /// How it was found
    pub strategy: ResolutionStrategy,
}

impl fmt::Debug for ResolvedAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedAdapter")
            .field("adapter_type", &self.adapter_type)
            .field("adapter", &self.adapter.adapter_name())
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// Read the adapter type out of an instance configuration
///
/// Absent, null and empty values are [`Error::MissingAdapter`]; any other
/// non-string value is [`Error::InvalidConfigurationValue`].
pub fn adapter_type(instance_config: &ConfigMap) -> Result<&str> {
    match instance_config.get(ADAPTER_KEY) {
        None | Some(Value::Null) => Err(Error::missing_adapter()),
        Some(Value::String(adapter_type)) if adapter_type.is_empty() => {
            Err(Error::missing_adapter())
        }
        Some(Value::String(adapter_type)) => Ok(adapter_type),
        Some(other) => Err(Error::invalid_configuration_value(
            ADAPTER_KEY,
            other,
            "string",
        )),
    }
}

/// Resolves adapters through the registry, then the container
pub struct AdapterResolver {
    registry: Arc<dyn AdapterRegistry>,
}

impl AdapterResolver {
    /// Create a resolver backed by `registry`
    pub fn new(registry: Arc<dyn AdapterRegistry>) -> Self {
        Self { registry }
    }

    /// Registry consulted first
    pub fn registry(&self) -> &Arc<dyn AdapterRegistry> {
        &self.registry
    }

    /// Resolve and construct the adapter for an instance
    pub fn resolve(
        &self,
        instance_config: &ConfigMap,
        global_config: &ConfigMap,
        container: &Arc<dyn ServiceContainer>,
    ) -> Result<Arc<dyn PersistenceAdapter>> {
        self.resolve_detailed(instance_config, global_config, container)
            .map(|resolved| resolved.adapter)
    }

    /// Like [`resolve`](Self::resolve), also reporting the strategy used
    pub fn resolve_detailed(
        &self,
        instance_config: &ConfigMap,
        global_config: &ConfigMap,
        container: &Arc<dyn ServiceContainer>,
    ) -> Result<ResolvedAdapter> {
        let adapter_type = adapter_type(instance_config)?;

        if self.registry.has_adapter(adapter_type) {
            debug!(adapter_type, "Resolving adapter from registry");
            let config = build_adapter_configuration(instance_config, global_config, container);
            let adapter = self.registry.create(adapter_type, &config)?;
            return Ok(ResolvedAdapter {
                adapter_type: adapter_type.to_string(),
                adapter,
                strategy: ResolutionStrategy::Registry,
            });
        }

        let service_name = adapter_service_name(adapter_type);
        if container.has(&service_name) {
            debug!(adapter_type, service = %service_name, "Resolving adapter from container");
            match container.get(&service_name)? {
                ContainerService::AdapterFactory(factory) => {
                    let config =
                        build_adapter_configuration(instance_config, global_config, container);
                    if let Some((adapter, convention)) =
                        Self::apply_conventions(factory.as_ref(), &config)?
                    {
                        return Ok(ResolvedAdapter {
                            adapter_type: adapter_type.to_string(),
                            adapter,
                            strategy: ResolutionStrategy::Container(convention),
                        });
                    }
                }
                other => {
                    debug!(
                        service = %service_name,
                        kind = other.kind(),
                        "Container service matches no factory convention"
                    );
                }
            }
        }

        Err(Error::unsupported_adapter(adapter_type))
    }

    /// Try each convention in order; the first yielding an adapter wins
    ///
    /// Constructor errors propagate immediately.
    fn apply_conventions(
        factory: &dyn AdapterFactory,
        config: &AdapterConfiguration,
    ) -> Result<Option<(Arc<dyn PersistenceAdapter>, FactoryConvention)>> {
        for convention in FactoryConvention::ORDER {
            match convention.apply(factory, config) {
                None => {}
                Some(Ok(Some(adapter))) => return Ok(Some((adapter, convention))),
                Some(Ok(None)) => {
                    debug!(%convention, "Factory convention produced no adapter");
                }
                Some(Err(e)) => return Err(e),
            }
        }
        Ok(None)
    }
}

impl fmt::Debug for AdapterResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterResolver")
            .field("registry", &self.registry.registered_types())
            .finish()
    }
}
