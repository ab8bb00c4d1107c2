//! Container factory for the Weaviate adapter

use std::sync::Arc;

use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::{
    AdapterFactory, ContainerService, FactoryOutput, PersistenceAdapter,
};
use edgebinder_domain::value_objects::AdapterConfiguration;
use tracing::debug;

use super::adapter::{WeaviateAdapter, WeaviateSettings};
use super::client::WeaviateClient;
use super::{CLIENT_SERVICE_KEY, DEFAULT_CLIENT_SERVICE};

/// Builds [`WeaviateAdapter`]s through the `create_adapter` convention
///
/// The client service must hold an `Arc<dyn WeaviateClient>`, registered with
/// [`WeaviateAdapterFactory::client_service`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WeaviateAdapterFactory;

impl WeaviateAdapterFactory {
    /// Create the factory
    pub fn new() -> Self {
        Self
    }

    /// This factory as a container service
    pub fn service() -> ContainerService {
        ContainerService::AdapterFactory(Arc::new(Self))
    }

    /// Wrap a client so the factory can find it in the container
    pub fn client_service(client: Arc<dyn WeaviateClient>) -> ContainerService {
        ContainerService::instance(client)
    }

    /// Build the adapter for an instance configuration
    pub fn build(&self, config: &AdapterConfiguration) -> Result<WeaviateAdapter> {
        let service_name = config.instance_str_or(CLIENT_SERVICE_KEY, DEFAULT_CLIENT_SERVICE)?;

        let container = config.container();
        if !container.has(service_name) {
            return Err(Error::missing_service(service_name));
        }
        let service = container.get(service_name)?;
        let client = service
            .downcast_ref::<Arc<dyn WeaviateClient>>()
            .cloned()
            .ok_or_else(|| {
                Error::invalid_service(service_name, "must return WeaviateClient instance")
            })?;

        let settings = WeaviateSettings::from_config(config)?;
        debug!(
            client = service_name,
            collection = %settings.collection_name,
            auto_create = settings.auto_create,
            "Building Weaviate adapter"
        );
        Ok(WeaviateAdapter::new(client, settings))
    }
}

impl AdapterFactory for WeaviateAdapterFactory {
    fn create_adapter(&self, config: &AdapterConfiguration) -> Option<Result<FactoryOutput>> {
        Some(self.build(config).map(|adapter| {
            let adapter: Arc<dyn PersistenceAdapter> = Arc::new(adapter);
            Some(adapter)
        }))
    }
}
