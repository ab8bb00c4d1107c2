//! Service registration for host containers
//!
//! Describes the services EdgeBinder contributes to a host container and
//! installs them into a [`ServiceMap`].
//!
//! | Service | Kind | Resolves to |
//! |---------|------|-------------|
//! | `edgebinder_application::service::EdgeBinder` | factory | `default` instance |
//! | `edgebinder.default` | factory | `default` instance |
//! | `EdgeBinder` | alias | the type key |
//! | `edgebinder` | alias | `edgebinder.default` |

use std::any::type_name;
use std::sync::Arc;

use edgebinder_application::{EdgeBinder, EdgeBinderFactory};
use edgebinder_domain::constants::{
    DEFAULT_INSTANCE_SERVICE, EDGE_BINDER_ALIAS, EDGE_BINDER_SERVICE, adapter_service_name,
};
use edgebinder_providers::WeaviateAdapterFactory;
use edgebinder_providers::weaviate::WEAVIATE_ADAPTER;
use tracing::info;

use crate::config::AppConfig;
use crate::container::ServiceMap;

/// Container key of the EdgeBinder service type
pub fn edge_binder_type_key() -> &'static str {
    type_name::<EdgeBinder>()
}

/// The services EdgeBinder contributes to a host container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeBinderServices {
    /// Service names built by [`EdgeBinderFactory`]
    pub factories: Vec<String>,
    /// `(alias, target)` pairs
    pub aliases: Vec<(String, String)>,
}

impl EdgeBinderServices {
    /// The service table
    pub fn new() -> Self {
        let type_key = edge_binder_type_key().to_string();
        Self {
            factories: vec![type_key.clone(), DEFAULT_INSTANCE_SERVICE.to_string()],
            aliases: vec![
                (EDGE_BINDER_SERVICE.to_string(), type_key),
                (
                    EDGE_BINDER_ALIAS.to_string(),
                    DEFAULT_INSTANCE_SERVICE.to_string(),
                ),
            ],
        }
    }
}

impl Default for EdgeBinderServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the EdgeBinder service table into `container`
///
/// Every factory entry creates the `default` instance through `factory`.
pub fn register_edgebinder_services(container: &ServiceMap, factory: Arc<EdgeBinderFactory>) {
    let services = EdgeBinderServices::new();
    for name in &services.factories {
        let factory = Arc::clone(&factory);
        container.register_binder_factory(name.clone(), move |services| factory.create(services));
    }
    for (alias, target) in &services.aliases {
        container.alias(alias.clone(), target.clone());
    }
}

/// Build a container for `config` with EdgeBinder services installed
///
/// Registers the configuration tree as `config`, the Weaviate adapter factory
/// under its container key, and the EdgeBinder service table backed by the
/// global adapter registry. Hosts add their own clients afterwards.
pub fn init_services(config: &AppConfig) -> ServiceMap {
    let container = ServiceMap::new();
    container.register_config(config.to_config_tree());
    container.register_service(
        adapter_service_name(WEAVIATE_ADAPTER),
        WeaviateAdapterFactory::service(),
    );
    register_edgebinder_services(&container, Arc::new(EdgeBinderFactory::new()));

    info!(
        instances = ?config.instance_names(),
        "EdgeBinder services registered"
    );
    container
}
